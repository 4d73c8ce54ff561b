use crate::core::Result;
use crate::modules::orders::Order;

use super::LocalTaxType;

/// A configured way of taxing orders (EU VAT, Canadian sales tax, ...)
pub trait TaxType: Send + Sync {
    /// Configured id, used in adjustment source ids
    fn id(&self) -> &str;

    fn label(&self) -> &str;

    /// Registry key of the implementing plugin
    fn plugin_id(&self) -> &str;

    /// Whether tax is part of the displayed price (VAT) or added on top (sales tax)
    fn is_display_inclusive(&self) -> bool;

    /// Cheap pre-filter: whether this tax type can concern the order at all
    fn applies(&self, order: &Order) -> bool;

    /// Attach tax adjustments to the order's items
    fn apply(&self, order: &mut Order) -> Result<()>;

    /// Access to zone-based internals, for tax types that have them
    fn as_local(&self) -> Option<&LocalTaxType> {
        None
    }
}

/// A tax type that delegates calculation to an external tax service.
///
/// Only the interface lives here; implementations own their transport.
pub trait RemoteTaxType: TaxType {
    /// Name of the external service, for logging
    fn provider(&self) -> &str;
}
