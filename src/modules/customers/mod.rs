//! Customer-facing inputs to tax: addresses, profiles and tax numbers.

pub mod models;
pub mod services;

pub use models::{Address, CustomerProfile, Profile, TaxNumber, VerificationState};
pub use services::{
    CustomerProfileAlter, CustomerProfileResolver, EuropeanUnionVatNumberValidator,
    TaxNumberValidator,
};
