mod adjustment;
mod order;
mod order_item;
mod store;

pub use adjustment::{Adjustment, AdjustmentType};
pub use order::{Order, OrderProfiles};
pub use order_item::{OrderItem, TaxableType};
pub use store::Store;
