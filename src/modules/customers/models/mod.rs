mod address;
mod profile;

pub use address::Address;
pub use profile::{CustomerProfile, Profile, TaxNumber, VerificationState};
