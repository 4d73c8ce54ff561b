//! Built-in tax type plugins.

pub mod canadian_sales_tax;
pub mod custom;
pub mod european_union_vat;
pub mod norwegian_vat;
pub mod swiss_vat;

mod zone_data;
