use std::sync::Arc;
use tracing::{info, warn};

use crate::error::PaymentError;
use crate::models::{Payment, PaymentResponse};
use crate::services::payment_gateway::PaymentGateway;
use crate::utils::{card::mask_card_number, money::format_amount};

pub const SUCCESS_MESSAGE: &str = "Payment successful!";

pub struct PaymentService {
    gateway: Arc<dyn PaymentGateway>,
}

impl PaymentService {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    /// Decodes the first JSON value of a raw request body and accepts the
    /// payment it describes. Anything after that value is ignored.
    pub async fn accept_raw(&self, body: &[u8]) -> Result<PaymentResponse, PaymentError> {
        let payment = decode_first(body).map_err(|e| {
            warn!("Invalid payment request: {}", e);
            PaymentError::from(e)
        })?;

        self.accept(payment).await
    }

    /// Logs a masked summary, waits on the gateway and acknowledges. Field
    /// values are never checked beyond the card number length.
    pub async fn accept(&self, payment: Payment) -> Result<PaymentResponse, PaymentError> {
        let masked_card = mask_card_number(&payment.card_number).map_err(|e| {
            warn!("Rejecting payment from {}: {}", payment.customer_name, e);
            e
        })?;

        info!(
            "Processing payment: amount {} {}, customer: {}, card: {}",
            format_amount(payment.amount),
            payment.currency,
            payment.customer_name,
            masked_card
        );

        self.gateway.charge(&payment).await;

        Ok(PaymentResponse {
            message: SUCCESS_MESSAGE.to_string(),
        })
    }
}

fn decode_first(body: &[u8]) -> Result<Payment, serde_json::Error> {
    serde_json::Deserializer::from_slice(body)
        .into_iter::<Payment>()
        .next()
        // empty or blank body: let the decoder report the EOF itself
        .unwrap_or_else(|| serde_json::from_slice(body))
}
