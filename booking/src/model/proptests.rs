//! Property-based tests for party counts and name validation.

use super::{validate_customer_name, validate_restaurant_name, PartyCount, MAX_NAME_LENGTH};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Every value in range is accepted and preserved.
    #[test]
    fn party_count_accepts_valid_range(n in PartyCount::MIN..=PartyCount::MAX) {
        let party = PartyCount::try_from(n);
        prop_assert!(party.is_ok());
        prop_assert_eq!(i64::from(party.unwrap()), n);
    }

    // Zero and negatives never produce a party.
    #[test]
    fn party_count_rejects_non_positive(n in i64::MIN..=0) {
        prop_assert!(PartyCount::try_from(n).is_err());
    }

    // Values above the 32-bit column limit are rejected.
    #[test]
    fn party_count_rejects_oversized(n in (PartyCount::MAX + 1)..=i64::MAX) {
        prop_assert!(PartyCount::try_from(n).is_err());
    }

    // Names within the limit pass through unchanged.
    #[test]
    fn customer_name_passes_through(name in "[A-Za-z ]{0,100}") {
        let validated = validate_customer_name(&name);
        prop_assert_eq!(validated, Ok(name.as_str()));
    }

    // Length limit is measured in characters.
    #[test]
    fn restaurant_name_length_limit(len in 0usize..=200) {
        let name = "ñ".repeat(len);
        let result = validate_restaurant_name(Some(&name));
        prop_assert_eq!(result.is_ok(), len <= MAX_NAME_LENGTH);
    }
}
