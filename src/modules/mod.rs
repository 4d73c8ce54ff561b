pub mod customers;
pub mod orders;
pub mod taxes;
pub mod zones;
