use axum::{
    extract::FromRef,
    http::StatusCode,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::app::cors::{cors_middleware, CorsSettings};
use crate::handlers::{payments, products};
use crate::services::{Catalog, PaymentService};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub payment_service: Arc<PaymentService>,
}

impl FromRef<AppState> for Arc<Catalog> {
    fn from_ref(state: &AppState) -> Self {
        state.catalog.clone()
    }
}

impl FromRef<AppState> for Arc<PaymentService> {
    fn from_ref(state: &AppState) -> Self {
        state.payment_service.clone()
    }
}

pub fn build_router(state: AppState, cors: CorsSettings) -> Router {
    Router::new()
        .route("/api/products", get(products::list_products))
        .route("/api/payments", post(payments::create_payment))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(cors, cors_middleware))
        .with_state(state)
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
