pub mod catalog;
pub mod payment_gateway;
pub mod payment_service;

pub use catalog::Catalog;
pub use payment_gateway::{PaymentGateway, SimulatedGateway};
pub use payment_service::PaymentService;
