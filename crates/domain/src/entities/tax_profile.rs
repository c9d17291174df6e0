//! Tax profile entity
//!
//! Singleton record of the user's setup answers. Created with defaults on
//! first read, mutated by partial-update merges.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::expense_category::ExpenseCategory;

/// How the user earns their income
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeType {
    /// Salary or wages
    #[default]
    Employee,
    /// ABN income
    SoleTrader,
    /// Both at once
    Mixed,
}

/// How often the user lodges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LodgmentCadence {
    /// One return a year
    #[default]
    Annual,
    /// Quarterly activity statements
    Quarterly,
}

/// The user's tax profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxProfile {
    income_type: IncomeType,
    lodgment: LodgmentCadence,
    /// Ids of the categories the user tracks. Free-form strings; a
    /// dangling id after a category edit is tolerated.
    enabled_categories: Vec<String>,
    reminders_enabled: bool,
    setup_complete: bool,
    disclaimer_acknowledged: bool,
    updated_at: DateTime<Utc>,
}

/// Partial update applied to a profile. Absent fields keep their value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default)]
    pub income_type: Option<IncomeType>,
    #[serde(default)]
    pub lodgment: Option<LodgmentCadence>,
    #[serde(default)]
    pub enabled_categories: Option<Vec<String>>,
    #[serde(default)]
    pub reminders_enabled: Option<bool>,
    #[serde(default)]
    pub setup_complete: Option<bool>,
    #[serde(default)]
    pub disclaimer_acknowledged: Option<bool>,
}

impl TaxProfile {
    /// Get the income type
    #[must_use]
    pub const fn income_type(&self) -> IncomeType {
        self.income_type
    }

    /// Get the lodgment cadence
    #[must_use]
    pub const fn lodgment(&self) -> LodgmentCadence {
        self.lodgment
    }

    /// Get the enabled category ids
    #[must_use]
    pub fn enabled_categories(&self) -> &[String] {
        &self.enabled_categories
    }

    /// Whether reminders are on
    #[must_use]
    pub const fn reminders_enabled(&self) -> bool {
        self.reminders_enabled
    }

    /// Whether the setup flow has been finished
    #[must_use]
    pub const fn setup_complete(&self) -> bool {
        self.setup_complete
    }

    /// Whether the disclaimer has been acknowledged
    #[must_use]
    pub const fn disclaimer_acknowledged(&self) -> bool {
        self.disclaimer_acknowledged
    }

    /// Get the last update timestamp
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Merge a partial update into the profile.
    ///
    /// Recomputes `updated_at` regardless of which fields changed.
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(income_type) = update.income_type {
            self.income_type = income_type;
        }
        if let Some(lodgment) = update.lodgment {
            self.lodgment = lodgment;
        }
        if let Some(enabled_categories) = update.enabled_categories {
            self.enabled_categories = enabled_categories;
        }
        if let Some(reminders_enabled) = update.reminders_enabled {
            self.reminders_enabled = reminders_enabled;
        }
        if let Some(setup_complete) = update.setup_complete {
            self.setup_complete = setup_complete;
        }
        if let Some(disclaimer_acknowledged) = update.disclaimer_acknowledged {
            self.disclaimer_acknowledged = disclaimer_acknowledged;
        }
        self.updated_at = Utc::now();
    }
}

impl Default for TaxProfile {
    /// The profile handed out before the user has answered anything:
    /// employee, annual lodgment, every default category on.
    fn default() -> Self {
        Self {
            income_type: IncomeType::default(),
            lodgment: LodgmentCadence::default(),
            enabled_categories: ExpenseCategory::default_ids(),
            reminders_enabled: true,
            setup_complete: false,
            disclaimer_acknowledged: false,
            updated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_enables_all_default_categories() {
        let profile = TaxProfile::default();
        assert_eq!(profile.income_type(), IncomeType::Employee);
        assert_eq!(profile.lodgment(), LodgmentCadence::Annual);
        assert_eq!(profile.enabled_categories().len(), 9);
        assert!(profile.reminders_enabled());
        assert!(!profile.setup_complete());
        assert!(!profile.disclaimer_acknowledged());
    }

    #[test]
    fn apply_merges_only_present_fields() {
        let mut profile = TaxProfile::default();
        profile.apply(ProfileUpdate {
            income_type: Some(IncomeType::SoleTrader),
            reminders_enabled: Some(false),
            ..ProfileUpdate::default()
        });

        assert_eq!(profile.income_type(), IncomeType::SoleTrader);
        assert!(!profile.reminders_enabled());
        // Untouched fields keep their defaults
        assert_eq!(profile.lodgment(), LodgmentCadence::Annual);
        assert_eq!(profile.enabled_categories().len(), 9);
    }

    #[test]
    fn apply_bumps_updated_at() {
        let mut profile = TaxProfile::default();
        let before = profile.updated_at();

        std::thread::sleep(std::time::Duration::from_millis(1));
        profile.apply(ProfileUpdate::default());

        assert!(profile.updated_at() > before);
    }

    #[test]
    fn apply_replaces_category_list_wholesale() {
        let mut profile = TaxProfile::default();
        profile.apply(ProfileUpdate {
            enabled_categories: Some(vec!["home_office".to_string()]),
            ..ProfileUpdate::default()
        });

        assert_eq!(profile.enabled_categories(), ["home_office".to_string()]);
    }

    #[test]
    fn dangling_category_ids_are_tolerated() {
        let mut profile = TaxProfile::default();
        profile.apply(ProfileUpdate {
            enabled_categories: Some(vec!["no_such_category".to_string()]),
            ..ProfileUpdate::default()
        });

        assert_eq!(profile.enabled_categories().len(), 1);
    }

    #[test]
    fn update_deserializes_from_partial_json() {
        let update: ProfileUpdate =
            serde_json::from_str(r#"{"income_type":"mixed","setup_complete":true}"#).unwrap();
        assert_eq!(update.income_type, Some(IncomeType::Mixed));
        assert_eq!(update.setup_complete, Some(true));
        assert!(update.lodgment.is_none());
        assert!(update.enabled_categories.is_none());
    }

    #[test]
    fn profile_round_trips_through_json() {
        let profile = TaxProfile::default();
        let json = serde_json::to_string(&profile).unwrap();
        let parsed: TaxProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile, parsed);
    }
}
