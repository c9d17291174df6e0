//! Expense identifier derived from a creation timestamp

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix for all expense identifiers
const PREFIX: &str = "exp-";

/// A unique expense identifier of the form `exp-<unix-millis>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExpenseId(String);

impl ExpenseId {
    /// Create an ID from a creation timestamp in unix milliseconds
    #[must_use]
    pub fn from_timestamp_millis(millis: i64) -> Self {
        Self(format!("{PREFIX}{millis}"))
    }

    /// Parse an expense ID from its string form
    ///
    /// # Errors
    ///
    /// Returns the input when it does not look like `exp-<unix-millis>`.
    pub fn parse(s: &str) -> Result<Self, String> {
        s.strip_prefix(PREFIX)
            .and_then(|rest| rest.parse::<i64>().ok())
            .map(Self::from_timestamp_millis)
            .ok_or_else(|| s.to_string())
    }

    /// The timestamp encoded in the ID, in unix milliseconds
    #[must_use]
    pub fn timestamp_millis(&self) -> Option<i64> {
        self.0.strip_prefix(PREFIX)?.parse().ok()
    }

    /// The string form
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_prefix() {
        let id = ExpenseId::from_timestamp_millis(1_700_000_000_000);
        assert_eq!(id.as_str(), "exp-1700000000000");
    }

    #[test]
    fn round_trips_through_string() {
        let original = ExpenseId::from_timestamp_millis(1_700_000_000_123);
        let parsed = ExpenseId::parse(&original.to_string()).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn exposes_timestamp() {
        let id = ExpenseId::from_timestamp_millis(42);
        assert_eq!(id.timestamp_millis(), Some(42));
    }

    #[test]
    fn parse_rejects_other_shapes() {
        assert!(ExpenseId::parse("1700000000000").is_err());
        assert!(ExpenseId::parse("exp-").is_err());
        assert!(ExpenseId::parse("exp-abc").is_err());
        assert!(ExpenseId::parse("").is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = ExpenseId::from_timestamp_millis(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"exp-7\"");
    }
}
