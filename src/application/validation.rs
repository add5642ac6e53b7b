//! Pure validation functions for incoming payloads.
//!
//! All validators are pure: same input, same output, no side effects.
//! Validation results are never cached — call sites re-invoke the relevant
//! validator before each mutating operation.
//!
//! Card numbers are deliberately *not* checked for digits-only content: the
//! external BIN lookup is the authority on card number format, so only the
//! shape (non-blank, length 8–19) is enforced here.

use rust_decimal::Decimal;

use crate::domain::{DomainError, DomainResult};

/// Minimum accepted card number length.
pub const CARD_NUMBER_MIN_LENGTH: usize = 8;

/// Maximum accepted card number length.
pub const CARD_NUMBER_MAX_LENGTH: usize = 19;

/// Validates a create/update payload and normalizes the country code.
///
/// # Validation Rules
///
/// - `country` must not be empty or whitespace-only
/// - `cost` must not be negative
///
/// # Returns
///
/// The country uppercased, ready for storage.
///
/// # Errors
///
/// Returns [`DomainError::InvalidInput`] when a rule is violated.
pub fn validate_card_cost_payload(country: &str, cost: Decimal) -> DomainResult<String> {
    if country.trim().is_empty() {
        return Err(DomainError::invalid_input(
            "Country cannot be null or empty",
        ));
    }

    if cost < Decimal::ZERO {
        return Err(DomainError::invalid_input("Cost cannot be negative"));
    }

    Ok(country.trim().to_uppercase())
}

/// Validates a payment card cost request.
///
/// # Validation Rules
///
/// - `card_number` must not be empty or whitespace-only
/// - `card_number` must be 8–19 characters long (inclusive)
///
/// Length is counted in characters, not bytes, because non-digit input is
/// admitted by design and may not be ASCII.
///
/// # Errors
///
/// Returns [`DomainError::InvalidInput`] when a rule is violated.
pub fn validate_payment_request(card_number: &str) -> DomainResult<()> {
    if card_number.trim().is_empty() {
        return Err(DomainError::invalid_input(
            "CardNumber cannot be null or empty",
        ));
    }

    let length = card_number.chars().count();
    if !(CARD_NUMBER_MIN_LENGTH..=CARD_NUMBER_MAX_LENGTH).contains(&length) {
        return Err(DomainError::invalid_input(
            "CardNumber must be greater than 8 and less than 19 digits",
        ));
    }

    Ok(())
}

/// Masks a card number for logging.
///
/// Keeps the first four and last two characters visible and replaces the rest
/// with `*`. Full card numbers must never reach the logs; every log statement
/// that mentions a card number goes through this function.
///
/// Assumes the input already passed [`validate_payment_request`] (length is
/// at least 8).
#[must_use]
pub fn mask_card_number(card_number: &str) -> String {
    let characters: Vec<char> = card_number.chars().collect();
    let length = characters.len();

    let head: String = characters[..4].iter().collect();
    let tail: String = characters[length - 2..].iter().collect();
    let stars = "*".repeat(length - 6);

    format!("{head}{stars}{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    // =========================================================================
    // validate_card_cost_payload Tests
    // =========================================================================

    #[rstest]
    #[case("us", "US")]
    #[case("US", "US")]
    #[case("  dk  ", "DK")]
    #[case("others", "OTHERS")]
    fn payload_validation_uppercases_country(#[case] input: &str, #[case] expected: &str) {
        let normalized = validate_card_cost_payload(input, Decimal::ONE).unwrap();
        assert_eq!(normalized, expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn payload_validation_rejects_blank_country(#[case] country: &str) {
        let error = validate_card_cost_payload(country, Decimal::ONE).unwrap_err();
        assert_eq!(
            error,
            DomainError::invalid_input("Country cannot be null or empty")
        );
    }

    #[rstest]
    fn payload_validation_rejects_negative_cost() {
        let error = validate_card_cost_payload("US", Decimal::new(-1, 1)).unwrap_err();
        assert_eq!(error, DomainError::invalid_input("Cost cannot be negative"));
    }

    #[rstest]
    #[case(Decimal::ZERO)]
    #[case(Decimal::new(50, 1))]
    fn payload_validation_accepts_zero_and_positive_cost(#[case] cost: Decimal) {
        assert!(validate_card_cost_payload("US", cost).is_ok());
    }

    // =========================================================================
    // validate_payment_request Tests
    // =========================================================================

    #[rstest]
    #[case("12345678")]
    #[case("4532756279624064")]
    #[case("1234567890123456789")]
    #[case("45327562abc!")]
    fn payment_validation_accepts_lengths_within_bounds(#[case] card_number: &str) {
        assert!(validate_payment_request(card_number).is_ok());
    }

    #[rstest]
    #[case("1234567")]
    #[case("1")]
    #[case("12345678901234567890")]
    fn payment_validation_rejects_lengths_outside_bounds(#[case] card_number: &str) {
        let error = validate_payment_request(card_number).unwrap_err();
        assert_eq!(
            error,
            DomainError::invalid_input(
                "CardNumber must be greater than 8 and less than 19 digits"
            )
        );
    }

    #[rstest]
    #[case("")]
    #[case("        ")]
    fn payment_validation_rejects_blank_card_number(#[case] card_number: &str) {
        let error = validate_payment_request(card_number).unwrap_err();
        assert_eq!(
            error,
            DomainError::invalid_input("CardNumber cannot be null or empty")
        );
    }

    proptest! {
        #[test]
        fn payment_validation_accepts_any_printable_within_bounds(
            card_number in "[!-~]{8,19}"
        ) {
            prop_assert!(validate_payment_request(&card_number).is_ok());
        }

        #[test]
        fn payment_validation_rejects_short_input(card_number in "[!-~]{1,7}") {
            prop_assert!(validate_payment_request(&card_number).is_err());
        }

        #[test]
        fn payment_validation_rejects_long_input(card_number in "[!-~]{20,40}") {
            prop_assert!(validate_payment_request(&card_number).is_err());
        }
    }

    // =========================================================================
    // mask_card_number Tests
    // =========================================================================

    #[rstest]
    #[case("4532756279624064", "4532**********64")]
    #[case("12345678", "1234**78")]
    fn masking_keeps_first_four_and_last_two(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(mask_card_number(input), expected);
    }

    #[rstest]
    fn masking_preserves_length() {
        let masked = mask_card_number("1234567890123456789");
        assert_eq!(masked.chars().count(), 19);
    }
}
