//! Order data model and canonical status vocabulary.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Canonical order status as consumed by the dashboard.
///
/// The upstream worksheet uses free-form labels; [`OrderStatus::from_sheet_label`]
/// maps them into this fixed five-value vocabulary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, Default,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum OrderStatus {
    /// Item handed over at the booth.
    Delivered,
    /// On a delivery cart inside the venue.
    OutForDelivery,
    /// In transit from the warehouse.
    InRoute,
    /// Not yet dispatched. Also the default for unrecognized labels.
    #[default]
    InProcess,
    /// Order withdrawn by the exhibitor.
    Cancelled,
}

impl OrderStatus {
    /// Normalize a raw worksheet status label.
    ///
    /// Matching is case-sensitive and exact; any label outside the mapping
    /// table (including the empty string) normalizes to [`OrderStatus::InProcess`].
    /// Total over all inputs, never fails.
    pub fn from_sheet_label(label: &str) -> Self {
        match label {
            "Delivered" | "Received" => Self::Delivered,
            "Out for delivery" => Self::OutForDelivery,
            "In route from warehouse" => Self::InRoute,
            "In Process" => Self::InProcess,
            "cancelled" => Self::Cancelled,
            _ => Self::InProcess,
        }
    }
}

/// One physical item ordered by an exhibitor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Unique within the dataset. Derived from date+booth on the sheet path,
    /// literal in the fixture data.
    pub id: String,
    /// Physical exhibit location, e.g. "A-245".
    pub booth_number: String,
    /// Free-text exhibitor name, used as the grouping key.
    pub exhibitor_name: String,
    /// Ordered item.
    pub item: String,
    /// Item description.
    pub description: String,
    /// Display color.
    pub color: String,
    /// Number of units. Positive; defaults to 1 when absent or unparseable.
    pub quantity: u32,
    /// Canonical status.
    pub status: OrderStatus,
    /// Display string, never parsed as a date.
    pub order_date: String,
    /// Free-text comments.
    pub comments: String,
    /// Floor section, e.g. "Section A".
    pub section: String,
}
