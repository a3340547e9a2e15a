//! Demo storefront backend: a fixed product catalog and a mock payment
//! endpoint behind a small axum router.

pub mod app;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;
