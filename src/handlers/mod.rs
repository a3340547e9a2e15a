pub mod payments;
pub mod products;
