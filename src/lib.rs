//! Commerce tax engine
//!
//! Resolves which tax zones and rates apply to each order item and attaches
//! the resulting tax adjustments to the order.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use crate::core::{Currency, Price, Result, TaxError};
pub use modules::customers;
pub use modules::orders;
pub use modules::taxes;
pub use modules::zones;
