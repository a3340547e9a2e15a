use serde::{Deserialize, Serialize};

// Payload sent by the storefront checkout form. Absent fields decode to their
// empty values; only malformed JSON or mistyped fields are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Payment {
    pub amount: f64,
    pub currency: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub customer_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_decodes_camel_case_fields() {
        let body = r#"{"amount":10.5,"currency":"USD","cardNumber":"4111111111111111","expiryDate":"12/30","cvv":"123","customerName":"Jane Doe"}"#;
        let payment: Payment = serde_json::from_str(body).unwrap();

        assert_eq!(payment.amount, 10.5);
        assert_eq!(payment.currency, "USD");
        assert_eq!(payment.card_number, "4111111111111111");
        assert_eq!(payment.expiry_date, "12/30");
        assert_eq!(payment.cvv, "123");
        assert_eq!(payment.customer_name, "Jane Doe");
    }

    #[test]
    fn test_payment_rejects_type_mismatch() {
        let body = r#"{"amount":"ten","currency":"USD","cardNumber":"4111","expiryDate":"12/30","cvv":"123","customerName":"Jane"}"#;
        assert!(serde_json::from_str::<Payment>(body).is_err());
    }

    #[test]
    fn test_missing_fields_decode_empty() {
        let payment: Payment = serde_json::from_str(r#"{"currency":"PLN"}"#).unwrap();
        assert_eq!(payment.amount, 0.0);
        assert_eq!(payment.currency, "PLN");
        assert!(payment.card_number.is_empty());
    }
}
