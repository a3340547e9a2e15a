pub mod payment;
pub mod product;

pub use payment::{Payment, PaymentResponse};
pub use product::Product;
