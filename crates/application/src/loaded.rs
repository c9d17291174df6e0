//! Tri-state result of reading a persisted record
//!
//! Callers that read JSON out of storage need to tell three situations
//! apart: the record exists and parses, the record has never been written,
//! and the record exists but is garbage. Collapsing the last two hides
//! corruption; this type keeps them separate and lets each caller decide
//! how to degrade.

/// Outcome of decoding a stored record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loaded<T> {
    /// The record was present and decoded cleanly
    Value(T),
    /// Nothing is stored under the key
    Absent,
    /// Something is stored but it does not decode
    Corrupt {
        /// The decode error, for logs and tests
        error: String,
    },
}

impl<T> Loaded<T> {
    /// The decoded value, if any. Corrupt collapses to `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Absent | Self::Corrupt { .. } => None,
        }
    }

    /// Whether the record decoded cleanly
    #[must_use]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Whether nothing is stored
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Whether the stored record failed to decode
    #[must_use]
    pub const fn is_corrupt(&self) -> bool {
        matches!(self, Self::Corrupt { .. })
    }

    /// Map the decoded value, keeping Absent and Corrupt as they are
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Loaded<U> {
        match self {
            Self::Value(value) => Loaded::Value(f(value)),
            Self::Absent => Loaded::Absent,
            Self::Corrupt { error } => Loaded::Corrupt { error },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_converts_to_some() {
        assert_eq!(Loaded::Value(7).into_option(), Some(7));
    }

    #[test]
    fn absent_and_corrupt_convert_to_none() {
        assert_eq!(Loaded::<i32>::Absent.into_option(), None);
        assert_eq!(
            Loaded::<i32>::Corrupt {
                error: "bad".to_string()
            }
            .into_option(),
            None
        );
    }

    #[test]
    fn predicates_match_variants() {
        assert!(Loaded::Value(1).is_value());
        assert!(Loaded::<i32>::Absent.is_absent());
        let corrupt = Loaded::<i32>::Corrupt {
            error: "x".to_string(),
        };
        assert!(corrupt.is_corrupt());
        assert!(!corrupt.is_absent());
    }

    #[test]
    fn map_preserves_non_values() {
        let mapped = Loaded::Value(2).map(|n| n * 10);
        assert_eq!(mapped, Loaded::Value(20));

        let absent: Loaded<i32> = Loaded::Absent;
        assert_eq!(absent.map(|n| n * 10), Loaded::Absent);

        let corrupt: Loaded<i32> = Loaded::Corrupt {
            error: "oops".to_string(),
        };
        assert!(corrupt.map(|n| n * 10).is_corrupt());
    }
}
