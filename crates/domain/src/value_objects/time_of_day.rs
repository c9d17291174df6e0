//! Time-of-day bucket used to pick imagery and copy

use serde::{Deserialize, Serialize};
use std::fmt;

/// Part of the day, derived from the local hour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    /// 06:00 to 08:59
    Dawn,
    /// 09:00 to 16:59
    Day,
    /// 17:00 to 19:59
    Dusk,
    /// 20:00 to 05:59
    Night,
}

impl TimeOfDay {
    /// All buckets
    pub const ALL: [Self; 4] = [Self::Dawn, Self::Day, Self::Dusk, Self::Night];

    /// Bucket for a local hour. Hours of 24 or more wrap around.
    #[must_use]
    pub const fn from_hour(hour: u32) -> Self {
        match hour % 24 {
            6..=8 => Self::Dawn,
            9..=16 => Self::Day,
            17..=19 => Self::Dusk,
            _ => Self::Night,
        }
    }

    /// Stable identifier used in asset paths and the scene table
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Dawn => "dawn",
            Self::Day => "day",
            Self::Dusk => "dusk",
            Self::Night => "night",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn early_hours_are_night() {
        for hour in 0..6 {
            assert_eq!(TimeOfDay::from_hour(hour), TimeOfDay::Night, "hour {hour}");
        }
    }

    #[test]
    fn morning_hours_are_dawn() {
        for hour in 6..9 {
            assert_eq!(TimeOfDay::from_hour(hour), TimeOfDay::Dawn, "hour {hour}");
        }
    }

    #[test]
    fn working_hours_are_day() {
        for hour in 9..17 {
            assert_eq!(TimeOfDay::from_hour(hour), TimeOfDay::Day, "hour {hour}");
        }
    }

    #[test]
    fn evening_hours_are_dusk() {
        for hour in 17..20 {
            assert_eq!(TimeOfDay::from_hour(hour), TimeOfDay::Dusk, "hour {hour}");
        }
    }

    #[test]
    fn late_hours_are_night() {
        for hour in 20..24 {
            assert_eq!(TimeOfDay::from_hour(hour), TimeOfDay::Night, "hour {hour}");
        }
    }

    #[test]
    fn hours_beyond_midnight_wrap() {
        assert_eq!(TimeOfDay::from_hour(24), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(33), TimeOfDay::Day);
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&TimeOfDay::Dawn).unwrap();
        assert_eq!(json, "\"dawn\"");

        let parsed: TimeOfDay = serde_json::from_str("\"night\"").unwrap();
        assert_eq!(parsed, TimeOfDay::Night);
    }
}
