pub mod currency;
pub mod date;
pub mod error;
pub mod price;

pub use currency::Currency;
pub use date::CalendarDate;
pub use error::{ErrorKind, Result, TaxError};
pub use price::Price;
