use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
    #[error("card number must contain at least 4 characters")]
    CardNumberTooShort,
}

impl PaymentError {
    pub fn status(&self) -> StatusCode {
        match self {
            PaymentError::Decode(_) | PaymentError::CardNumberTooShort => StatusCode::BAD_REQUEST,
        }
    }
}

// Rejections go back as plain text carrying the error message.
impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        (
            self.status(),
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}
