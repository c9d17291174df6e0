//! Expense category entity
//!
//! Nine categories ship with the app. They are seeded into storage once
//! and then read and replaced as a whole list, so user edits survive
//! restarts without being clobbered by re-seeding.

use serde::{Deserialize, Serialize};

/// An expense category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseCategory {
    /// Stable slug, e.g. `home_office`
    pub id: String,
    /// Display name
    pub name: String,
    /// One-line description of what belongs here
    pub description: String,
    /// Optional record-keeping tip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
    /// Whether the category shows up when adding an expense
    pub enabled: bool,
    /// Locked categories cannot be removed in the UI
    pub locked: bool,
}

impl ExpenseCategory {
    /// The nine categories seeded on first run
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![
            Self {
                id: "home_office".to_string(),
                name: "Home office running costs".to_string(),
                description: "Electricity, gas, cleaning and the decline in value of office furniture.".to_string(),
                tip: Some("Keep a four-week diary of your working-from-home hours.".to_string()),
                enabled: true,
                locked: true,
            },
            Self {
                id: "phone_internet".to_string(),
                name: "Phone & internet".to_string(),
                description: "Mobile, home phone and internet plans used for work.".to_string(),
                tip: Some("Claim only the work-related portion of each bill.".to_string()),
                enabled: true,
                locked: false,
            },
            Self {
                id: "equipment".to_string(),
                name: "Tools & equipment".to_string(),
                description: "Computers, monitors, chairs and other gear used for work.".to_string(),
                tip: Some("Items over $300 are depreciated rather than claimed outright.".to_string()),
                enabled: true,
                locked: false,
            },
            Self {
                id: "vehicle".to_string(),
                name: "Car expenses".to_string(),
                description: "Work-related travel in your own car, excluding the daily commute.".to_string(),
                tip: Some("The cents-per-kilometre method caps out at 5,000 km.".to_string()),
                enabled: true,
                locked: false,
            },
            Self {
                id: "travel".to_string(),
                name: "Work travel".to_string(),
                description: "Flights, accommodation and meals for overnight work trips.".to_string(),
                tip: None,
                enabled: true,
                locked: false,
            },
            Self {
                id: "clothing".to_string(),
                name: "Clothing & laundry".to_string(),
                description: "Uniforms, protective clothing and their cleaning costs.".to_string(),
                tip: Some("Plain clothes are not claimable even if your employer requires them.".to_string()),
                enabled: true,
                locked: false,
            },
            Self {
                id: "self_education".to_string(),
                name: "Self-education".to_string(),
                description: "Courses, conferences and references tied to your current role.".to_string(),
                tip: None,
                enabled: true,
                locked: false,
            },
            Self {
                id: "subscriptions".to_string(),
                name: "Subscriptions & memberships".to_string(),
                description: "Professional associations, union fees and work software.".to_string(),
                tip: None,
                enabled: true,
                locked: false,
            },
            Self {
                id: "donations".to_string(),
                name: "Gifts & donations".to_string(),
                description: "Donations of $2 or more to registered charities.".to_string(),
                tip: Some("Keep receipts; bucket donations under $10 need none.".to_string()),
                enabled: true,
                locked: false,
            },
        ]
    }

    /// Ids of the default categories, in seeding order
    #[must_use]
    pub fn default_ids() -> Vec<String> {
        Self::defaults().into_iter().map(|c| c.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_nine_defaults() {
        assert_eq!(ExpenseCategory::defaults().len(), 9);
    }

    #[test]
    fn default_ids_are_unique() {
        let ids = ExpenseCategory::default_ids();
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(ids.len(), deduped.len());
    }

    #[test]
    fn home_office_is_locked_and_enabled() {
        let defaults = ExpenseCategory::defaults();
        let home_office = defaults
            .iter()
            .find(|c| c.id == "home_office")
            .expect("home_office exists");
        assert!(home_office.locked);
        assert!(home_office.enabled);
    }

    #[test]
    fn only_home_office_is_locked() {
        let locked: Vec<_> = ExpenseCategory::defaults()
            .into_iter()
            .filter(|c| c.locked)
            .collect();
        assert_eq!(locked.len(), 1);
        assert_eq!(locked[0].id, "home_office");
    }

    #[test]
    fn all_defaults_start_enabled() {
        assert!(ExpenseCategory::defaults().iter().all(|c| c.enabled));
    }

    #[test]
    fn tip_is_omitted_from_json_when_absent() {
        let defaults = ExpenseCategory::defaults();
        let travel = defaults.iter().find(|c| c.id == "travel").expect("travel");
        let json = serde_json::to_string(travel).unwrap();
        assert!(!json.contains("tip"));

        let parsed: ExpenseCategory = serde_json::from_str(&json).unwrap();
        assert!(parsed.tip.is_none());
    }

    #[test]
    fn category_list_round_trips_through_json() {
        let defaults = ExpenseCategory::defaults();
        let json = serde_json::to_string(&defaults).unwrap();
        let parsed: Vec<ExpenseCategory> = serde_json::from_str(&json).unwrap();
        assert_eq!(defaults, parsed);
    }
}
