//! Order model, status normalization, aggregation, and filtering.
//!
//! This module handles:
//! - The order data model and canonical status vocabulary
//! - Per-exhibitor aggregation with first-occurrence ordering
//! - Global status statistics
//! - Exhibitor and booth filters

pub mod aggregate;
pub mod filter;
pub mod types;

pub use aggregate::{summarize_exhibitors, ExhibitorSummary, OrderStats};
pub use filter::{filter_by_booth, filter_by_exhibitor};
pub use types::{Order, OrderStatus};
