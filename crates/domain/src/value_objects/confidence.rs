//! Confidence label attached to weather data

use serde::{Deserialize, Serialize};
use std::fmt;

/// How much a snapshot should be trusted.
///
/// Live upstream data is `High`; the hardcoded fallback is `Medium`. The
/// wire form is capitalized to match what consumers already expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    /// Fresh data straight from the forecast provider
    High,
    /// Synthesized fallback data
    Medium,
}

impl Confidence {
    /// The wire/display form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_capitalized() {
        assert_eq!(serde_json::to_string(&Confidence::High).unwrap(), "\"High\"");
        assert_eq!(
            serde_json::to_string(&Confidence::Medium).unwrap(),
            "\"Medium\""
        );
    }

    #[test]
    fn round_trips() {
        let parsed: Confidence = serde_json::from_str("\"Medium\"").unwrap();
        assert_eq!(parsed, Confidence::Medium);
    }

    #[test]
    fn display_matches_wire_form() {
        assert_eq!(Confidence::High.to_string(), "High");
        assert_eq!(Confidence::Medium.to_string(), "Medium");
    }
}
