//! Trade-show order tracking backend.
//!
//! This library exposes exhibitor order data from a Google Sheets worksheet
//! (with a built-in fixture dataset as fallback) over read-only JSON HTTP
//! endpoints, for consumption by a front-end dashboard.
//!
//! # Data flow
//!
//! ```text
//! Google Sheets ──▶ SheetClient ──▶ Vec<Order> ──▶ aggregation/filtering ──▶ JSON
//!                       │ (unavailable or empty)
//!                       └──▶ fixture dataset
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`source`]: Data-source abstraction (live sheet vs. fixture)
//! - [`orders`]: Order model, status normalization, aggregation, filters
//! - [`api`]: HTTP API routes and handlers
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod orders;
pub mod source;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServiceError};
