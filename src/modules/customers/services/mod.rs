pub mod profile_resolver;
pub mod tax_number_validator;

pub use profile_resolver::{CustomerProfileAlter, CustomerProfileResolver};
pub use tax_number_validator::{
    EuropeanUnionVatNumberValidator, TaxNumberValidator,
};
