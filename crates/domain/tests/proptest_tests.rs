//! Property-based tests for domain invariants
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::entities::{Expense, ExpenseDraft, ExpenseUpdate};
use domain::value_objects::{Condition, ExpenseId, GeoLocation, TimeOfDay};
use proptest::prelude::*;

// ============================================================================
// Condition Classifier Property Tests
// ============================================================================

mod condition_tests {
    use super::*;

    proptest! {
        #[test]
        fn high_rain_is_always_storm(
            temp in -40.0f32..=50.0f32,
            rain in 60u8..=100u8,
            wind in 0.0f32..=150.0f32
        ) {
            prop_assert_eq!(Condition::classify(temp, rain, wind), Condition::Storm);
        }

        #[test]
        fn moderate_rain_is_always_rain(
            temp in -40.0f32..=50.0f32,
            rain in 40u8..60u8,
            wind in 0.0f32..=150.0f32
        ) {
            prop_assert_eq!(Condition::classify(temp, rain, wind), Condition::Rain);
        }

        #[test]
        fn strong_wind_without_rain_is_wind(
            temp in -40.0f32..=50.0f32,
            rain in 0u8..40u8,
            wind in 45.0f32..=150.0f32
        ) {
            prop_assert_eq!(Condition::classify(temp, rain, wind), Condition::Wind);
        }

        #[test]
        fn cold_without_rain_or_wind_is_cold(
            temp in -40.0f32..=12.0f32,
            rain in 0u8..40u8,
            wind in 0.0f32..45.0f32
        ) {
            prop_assert_eq!(Condition::classify(temp, rain, wind), Condition::Cold);
        }

        #[test]
        fn heat_without_rain_or_wind_is_heat(
            temp in 32.0f32..=50.0f32,
            rain in 0u8..40u8,
            wind in 0.0f32..45.0f32
        ) {
            prop_assert_eq!(Condition::classify(temp, rain, wind), Condition::Heat);
        }

        #[test]
        fn mild_conditions_are_clear(
            temp in 12.5f32..=31.5f32,
            rain in 0u8..40u8,
            wind in 0.0f32..45.0f32
        ) {
            prop_assert_eq!(Condition::classify(temp, rain, wind), Condition::Clear);
        }

        #[test]
        fn classifier_is_total(
            temp in -100.0f32..=100.0f32,
            rain in 0u8..=100u8,
            wind in 0.0f32..=300.0f32
        ) {
            // Any plausible input maps to one of the six conditions
            let condition = Condition::classify(temp, rain, wind);
            prop_assert!(Condition::ALL.contains(&condition));
        }
    }
}

// ============================================================================
// TimeOfDay Property Tests
// ============================================================================

mod time_of_day_tests {
    use super::*;

    proptest! {
        #[test]
        fn every_hour_maps_to_exactly_one_bucket(hour in 0u32..24u32) {
            let bucket = TimeOfDay::from_hour(hour);
            let matches = TimeOfDay::ALL
                .iter()
                .filter(|&&b| b == bucket)
                .count();
            prop_assert_eq!(matches, 1);
        }

        #[test]
        fn buckets_respect_their_ranges(hour in 0u32..24u32) {
            let expected = match hour {
                6..=8 => TimeOfDay::Dawn,
                9..=16 => TimeOfDay::Day,
                17..=19 => TimeOfDay::Dusk,
                _ => TimeOfDay::Night,
            };
            prop_assert_eq!(TimeOfDay::from_hour(hour), expected);
        }

        #[test]
        fn wrapping_is_consistent(hour in 0u32..1000u32) {
            prop_assert_eq!(TimeOfDay::from_hour(hour), TimeOfDay::from_hour(hour % 24));
        }
    }
}

// ============================================================================
// Expense Derived-Field Property Tests
// ============================================================================

mod expense_tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_expense(amount: f64, work_percentage: u8) -> Expense {
        Expense::new(
            ExpenseId::from_timestamp_millis(1_700_000_000_000),
            ExpenseDraft {
                category_id: "equipment".to_string(),
                amount,
                work_percentage,
                date: NaiveDate::from_ymd_opt(2026, 1, 15).expect("valid date"),
                receipt: None,
            },
        )
        .expect("valid expense")
    }

    proptest! {
        #[test]
        fn claimable_never_exceeds_amount(
            amount in 0.0f64..=100_000.0f64,
            pct in 0u8..=100u8
        ) {
            let expense = make_expense(amount, pct);
            // Allow for rounding at the cent boundary
            prop_assert!(expense.claimable_amount() <= amount + 0.005);
        }

        #[test]
        fn claimable_is_proportional(
            amount in 0.0f64..=100_000.0f64,
            pct in 0u8..=100u8
        ) {
            let expense = make_expense(amount, pct);
            let expected = amount * f64::from(pct) / 100.0;
            prop_assert!((expense.claimable_amount() - expected).abs() <= 0.005);
        }

        #[test]
        fn amount_update_recomputes_against_stored_percentage(
            first in 0.0f64..=10_000.0f64,
            second in 0.0f64..=10_000.0f64,
            pct in 0u8..=100u8
        ) {
            let mut expense = make_expense(first, pct);
            expense
                .apply(ExpenseUpdate {
                    amount: Some(second),
                    ..ExpenseUpdate::default()
                })
                .expect("valid update");

            let expected = second * f64::from(pct) / 100.0;
            prop_assert!((expense.claimable_amount() - expected).abs() <= 0.005);
        }

        #[test]
        fn negative_amounts_always_rejected(
            amount in -100_000.0f64..-0.01f64,
            pct in 0u8..=100u8
        ) {
            let result = Expense::new(
                ExpenseId::from_timestamp_millis(1),
                ExpenseDraft {
                    category_id: "equipment".to_string(),
                    amount,
                    work_percentage: pct,
                    date: NaiveDate::from_ymd_opt(2026, 1, 15).expect("valid date"),
                    receipt: None,
                },
            );
            prop_assert!(result.is_err());
        }
    }
}

// ============================================================================
// GeoLocation Property Tests
// ============================================================================

mod geo_location_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_create_location(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let result = GeoLocation::new(lat, lon);
            prop_assert!(result.is_ok());

            let loc = result.unwrap();
            prop_assert!((loc.latitude() - lat).abs() < f64::EPSILON);
            prop_assert!((loc.longitude() - lon).abs() < f64::EPSILON);
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![
                (-1000.0f64..-90.1f64),
                (90.1f64..1000.0f64)
            ],
            lon in -180.0f64..=180.0f64
        ) {
            let result = GeoLocation::new(lat, lon);
            prop_assert!(result.is_err());
        }

        #[test]
        fn invalid_longitude_rejected(
            lat in -90.0f64..=90.0f64,
            lon in prop_oneof![
                (-1000.0f64..-180.1f64),
                (180.1f64..1000.0f64)
            ]
        ) {
            let result = GeoLocation::new(lat, lon);
            prop_assert!(result.is_err());
        }

        #[test]
        fn serialization_roundtrip(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            if let Ok(loc) = GeoLocation::new(lat, lon) {
                let json = serde_json::to_string(&loc).unwrap();
                let deserialized: GeoLocation = serde_json::from_str(&json).unwrap();
                let lat_diff = (loc.latitude() - deserialized.latitude()).abs();
                let lon_diff = (loc.longitude() - deserialized.longitude()).abs();
                prop_assert!(lat_diff < 1e-10, "Latitude difference too large: {}", lat_diff);
                prop_assert!(lon_diff < 1e-10, "Longitude difference too large: {}", lon_diff);
            }
        }
    }
}
