use axum::{body::Bytes, extract::State, response::Json};
use std::sync::Arc;

use crate::error::PaymentError;
use crate::models::PaymentResponse;
use crate::services::PaymentService;

// The body is decoded by hand so that any Content-Type is accepted and the
// decoder's own message reaches the caller.
pub async fn create_payment(
    State(service): State<Arc<PaymentService>>,
    body: Bytes,
) -> Result<Json<PaymentResponse>, PaymentError> {
    service.accept_raw(&body).await.map(Json)
}
