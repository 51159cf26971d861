//! Per-exhibitor aggregation and global order statistics.

use std::collections::HashMap;

use serde::Serialize;

use super::types::{Order, OrderStatus};

/// Aggregate order counts for one exhibitor.
#[derive(Debug, Clone, Serialize)]
pub struct ExhibitorSummary {
    /// Exhibitor name (grouping key, as it appears in the data).
    pub name: String,
    /// First booth number seen for this exhibitor. If the exhibitor later
    /// appears under a different booth, the first one is retained.
    pub booth: String,
    /// Total order records for this exhibitor.
    pub total_orders: u64,
    /// Orders with status `delivered`.
    pub delivered_orders: u64,
}

/// Build one summary per distinct exhibitor name, preserving the order in
/// which exhibitors first appear in the input.
pub fn summarize_exhibitors(orders: &[Order]) -> Vec<ExhibitorSummary> {
    let mut summaries: Vec<ExhibitorSummary> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for order in orders {
        let idx = match index.get(order.exhibitor_name.as_str()) {
            Some(&idx) => idx,
            None => {
                summaries.push(ExhibitorSummary {
                    name: order.exhibitor_name.clone(),
                    booth: order.booth_number.clone(),
                    total_orders: 0,
                    delivered_orders: 0,
                });
                index.insert(order.exhibitor_name.as_str(), summaries.len() - 1);
                summaries.len() - 1
            }
        };

        summaries[idx].total_orders += 1;
        if order.status == OrderStatus::Delivered {
            summaries[idx].delivered_orders += 1;
        }
    }

    summaries
}

/// Global order counts by canonical status.
///
/// Each order record counts once regardless of its `quantity` field.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct OrderStats {
    /// Total order records.
    pub total_orders: u64,
    /// Orders with status `delivered`.
    pub delivered: u64,
    /// Orders with status `in-process`.
    pub in_process: u64,
    /// Orders with status `in-route`.
    pub in_route: u64,
    /// Orders with status `out-for-delivery`.
    pub out_for_delivery: u64,
    /// Orders with status `cancelled`.
    pub cancelled: u64,
}

impl OrderStats {
    /// Compute statistics in a single pass over the order sequence.
    pub fn from_orders(orders: &[Order]) -> Self {
        let mut stats = Self::default();
        for order in orders {
            stats.total_orders += 1;
            match order.status {
                OrderStatus::Delivered => stats.delivered += 1,
                OrderStatus::InProcess => stats.in_process += 1,
                OrderStatus::InRoute => stats.in_route += 1,
                OrderStatus::OutForDelivery => stats.out_for_delivery += 1,
                OrderStatus::Cancelled => stats.cancelled += 1,
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn order(exhibitor: &str, booth: &str, status: OrderStatus) -> Order {
        Order {
            id: format!("{}-{}", exhibitor, booth),
            booth_number: booth.to_string(),
            exhibitor_name: exhibitor.to_string(),
            item: "Item".to_string(),
            description: String::new(),
            color: String::new(),
            quantity: 1,
            status,
            order_date: "June 14, 2025".to_string(),
            comments: String::new(),
            section: String::new(),
        }
    }

    #[test]
    fn one_summary_per_distinct_exhibitor() {
        let orders = vec![
            order("Acme", "A-1", OrderStatus::Delivered),
            order("Acme", "A-1", OrderStatus::InProcess),
            order("Globex", "B-2", OrderStatus::Delivered),
        ];

        let summaries = summarize_exhibitors(&orders);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].name, "Acme");
        assert_eq!(summaries[0].total_orders, 2);
        assert_eq!(summaries[0].delivered_orders, 1);
        assert_eq!(summaries[1].name, "Globex");
        assert_eq!(summaries[1].total_orders, 1);
        assert_eq!(summaries[1].delivered_orders, 1);
    }

    #[test]
    fn first_occurrence_ordering_is_preserved() {
        // Orders for exhibitors [B, A, B] must yield summaries [B, A].
        let orders = vec![
            order("B Corp", "B-1", OrderStatus::InRoute),
            order("A Corp", "A-1", OrderStatus::InProcess),
            order("B Corp", "B-1", OrderStatus::Delivered),
        ];

        let summaries = summarize_exhibitors(&orders);
        let names: Vec<&str> = summaries.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["B Corp", "A Corp"]);
    }

    #[test]
    fn first_booth_seen_is_retained() {
        let orders = vec![
            order("Acme", "A-1", OrderStatus::InProcess),
            order("Acme", "C-9", OrderStatus::InProcess),
        ];

        let summaries = summarize_exhibitors(&orders);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].booth, "A-1");
        assert_eq!(summaries[0].total_orders, 2);
    }

    #[test]
    fn delivered_never_exceeds_total() {
        let orders = vec![
            order("Acme", "A-1", OrderStatus::Delivered),
            order("Acme", "A-1", OrderStatus::Delivered),
            order("Acme", "A-1", OrderStatus::Cancelled),
        ];

        for summary in summarize_exhibitors(&orders) {
            assert!(summary.delivered_orders <= summary.total_orders);
        }
    }

    #[test]
    fn empty_input_yields_no_summaries() {
        assert!(summarize_exhibitors(&[]).is_empty());
    }

    #[test]
    fn status_counts_sum_to_total() {
        let orders = vec![
            order("A", "1", OrderStatus::Delivered),
            order("B", "2", OrderStatus::InProcess),
            order("C", "3", OrderStatus::InRoute),
            order("D", "4", OrderStatus::OutForDelivery),
            order("E", "5", OrderStatus::Cancelled),
            order("F", "6", OrderStatus::Delivered),
        ];

        let stats = OrderStats::from_orders(&orders);
        assert_eq!(stats.total_orders, 6);
        assert_eq!(
            stats.delivered
                + stats.in_process
                + stats.in_route
                + stats.out_for_delivery
                + stats.cancelled,
            stats.total_orders
        );
    }

    #[test]
    fn quantity_does_not_weight_counts() {
        let mut bulk = order("Acme", "A-1", OrderStatus::Delivered);
        bulk.quantity = 50;

        let stats = OrderStats::from_orders(&[bulk]);
        assert_eq!(stats.total_orders, 1);
        assert_eq!(stats.delivered, 1);
    }
}
