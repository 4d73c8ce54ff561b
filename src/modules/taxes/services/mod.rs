pub mod local_tax_type;
pub mod rate_resolver;
pub mod registry;
pub mod sourcing;
pub mod tax_calculator;
pub mod tax_order_processor;
pub mod tax_type;

pub use local_tax_type::{LocalTaxType, ResolvedRate};
pub use rate_resolver::{
    ChainTaxRateResolver, DefaultTaxRateResolver, OrderItemTypeRateResolver, RateResolution,
    TaxRateResolver,
};
pub use registry::{TaxTypeConstructor, TaxTypeRegistry};
pub use sourcing::{SourcingContext, SourcingPolicy};
pub use tax_calculator::TaxCalculator;
pub use tax_order_processor::TaxOrderProcessor;
pub use tax_type::{RemoteTaxType, TaxType};
