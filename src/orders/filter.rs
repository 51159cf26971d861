//! Linear-scan filters over the order sequence.

use super::types::Order;

/// Filter orders by exhibitor name, case-insensitively.
///
/// Exhibitor names arrive via URL path segments, so the comparison folds
/// case on both sides. Booth filtering stays exact by contrast, see
/// [`filter_by_booth`].
pub fn filter_by_exhibitor(orders: &[Order], exhibitor: &str) -> Vec<Order> {
    let needle = exhibitor.to_lowercase();
    orders
        .iter()
        .filter(|o| o.exhibitor_name.to_lowercase() == needle)
        .cloned()
        .collect()
}

/// Filter orders by booth number, exact case-sensitive match.
pub fn filter_by_booth(orders: &[Order], booth: &str) -> Vec<Order> {
    orders
        .iter()
        .filter(|o| o.booth_number == booth)
        .cloned()
        .collect()
}
