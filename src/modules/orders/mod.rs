//! Order-side data the tax engine reads and annotates: orders, their items,
//! the selling store and the adjustments attached to items.

pub mod models;

pub use models::{
    Adjustment, AdjustmentType, Order, OrderItem, OrderProfiles, Store, TaxableType,
};
