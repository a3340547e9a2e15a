use crate::error::PaymentError;

pub const MASK_PREFIX: &str = "XXXX-XXXX-XXXX-";
pub const VISIBLE_DIGITS: usize = 4;

/// Masks a card number so that only its last four characters remain visible.
///
/// Counts Unicode scalar values rather than bytes, so multi-byte input never
/// splits a character.
pub fn mask_card_number(card_number: &str) -> Result<String, PaymentError> {
    let total = card_number.chars().count();
    if total < VISIBLE_DIGITS {
        return Err(PaymentError::CardNumberTooShort);
    }

    let last_four: String = card_number.chars().skip(total - VISIBLE_DIGITS).collect();
    Ok(format!("{}{}", MASK_PREFIX, last_four))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_mask_regular_card() {
        assert_eq!(
            mask_card_number("4111111111111111").unwrap(),
            "XXXX-XXXX-XXXX-1111"
        );
        assert_eq!(
            mask_card_number("1234567812345678").unwrap(),
            "XXXX-XXXX-XXXX-5678"
        );
    }

    #[test]
    fn test_mask_exactly_four() {
        assert_eq!(mask_card_number("9876").unwrap(), "XXXX-XXXX-XXXX-9876");
    }

    #[test]
    fn test_mask_too_short() {
        assert!(matches!(
            mask_card_number("123"),
            Err(PaymentError::CardNumberTooShort)
        ));
        assert!(matches!(
            mask_card_number(""),
            Err(PaymentError::CardNumberTooShort)
        ));
    }

    #[test]
    fn test_mask_multibyte() {
        assert_eq!(mask_card_number("ąęść").unwrap(), "XXXX-XXXX-XXXX-ąęść");
        assert!(mask_card_number("żół").is_err());
    }

    proptest! {
        #[test]
        fn masked_keeps_only_last_four(card in "[0-9]{4,19}") {
            let masked = mask_card_number(&card).unwrap();
            prop_assert!(masked.starts_with(MASK_PREFIX));
            prop_assert_eq!(&masked[MASK_PREFIX.len()..], &card[card.len() - 4..]);
            prop_assert_eq!(masked.len(), MASK_PREFIX.len() + 4);
        }

        #[test]
        fn short_input_is_rejected(card in "[0-9]{0,3}") {
            prop_assert!(mask_card_number(&card).is_err());
        }
    }
}
