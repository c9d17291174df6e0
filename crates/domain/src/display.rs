//! Static copy and imagery lookup for rendering a snapshot
//!
//! A scene is picked by condition and time of day. Every condition must
//! carry a day entry; lookups for a missing combination fall back to that
//! day entry, so rendering never dead-ends on a gap in the table.

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::{Condition, TimeOfDay};

/// Copy and imagery for one rendered scene
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneCopy {
    /// Short headline, e.g. "Storms likely"
    pub title: String,
    /// One-sentence supporting line
    pub message: String,
    /// Asset path of the background image
    pub image: String,
}

/// One table row as supplied to [`SceneTable::from_entries`]
#[derive(Debug, Clone)]
pub struct SceneEntry {
    pub condition: Condition,
    pub time_of_day: TimeOfDay,
    pub copy: SceneCopy,
}

/// Scenes for a single condition. The day entry is mandatory and doubles
/// as the fallback for any missing time of day.
#[derive(Debug, Clone)]
struct SceneSet {
    day: SceneCopy,
    dawn: Option<SceneCopy>,
    dusk: Option<SceneCopy>,
    night: Option<SceneCopy>,
}

impl SceneSet {
    fn for_time(&self, time_of_day: TimeOfDay) -> &SceneCopy {
        match time_of_day {
            TimeOfDay::Day => &self.day,
            TimeOfDay::Dawn => self.dawn.as_ref().unwrap_or(&self.day),
            TimeOfDay::Dusk => self.dusk.as_ref().unwrap_or(&self.day),
            TimeOfDay::Night => self.night.as_ref().unwrap_or(&self.day),
        }
    }
}

/// Lookup table from (condition, time of day) to scene copy
#[derive(Debug, Clone)]
pub struct SceneTable {
    storm: SceneSet,
    rain: SceneSet,
    wind: SceneSet,
    cold: SceneSet,
    heat: SceneSet,
    clear: SceneSet,
}

impl SceneTable {
    /// Build a table from individual entries
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingDayScene`] when any condition lacks
    /// its day entry.
    pub fn from_entries(entries: &[SceneEntry]) -> Result<Self, DomainError> {
        Ok(Self {
            storm: Self::build_set(entries, Condition::Storm)?,
            rain: Self::build_set(entries, Condition::Rain)?,
            wind: Self::build_set(entries, Condition::Wind)?,
            cold: Self::build_set(entries, Condition::Cold)?,
            heat: Self::build_set(entries, Condition::Heat)?,
            clear: Self::build_set(entries, Condition::Clear)?,
        })
    }

    fn build_set(entries: &[SceneEntry], condition: Condition) -> Result<SceneSet, DomainError> {
        let mut day = None;
        let mut dawn = None;
        let mut dusk = None;
        let mut night = None;
        for entry in entries.iter().filter(|e| e.condition == condition) {
            match entry.time_of_day {
                TimeOfDay::Day => day = Some(entry.copy.clone()),
                TimeOfDay::Dawn => dawn = Some(entry.copy.clone()),
                TimeOfDay::Dusk => dusk = Some(entry.copy.clone()),
                TimeOfDay::Night => night = Some(entry.copy.clone()),
            }
        }
        day.map(|day| SceneSet {
            day,
            dawn,
            dusk,
            night,
        })
        .ok_or_else(|| DomainError::MissingDayScene(condition.slug().to_string()))
    }

    /// Look up the scene for a condition and time of day, falling back to
    /// the condition's day entry when the combination has no entry of its
    /// own.
    #[must_use]
    pub fn scene(&self, condition: Condition, time_of_day: TimeOfDay) -> &SceneCopy {
        self.set(condition).for_time(time_of_day)
    }

    const fn set(&self, condition: Condition) -> &SceneSet {
        match condition {
            Condition::Storm => &self.storm,
            Condition::Rain => &self.rain,
            Condition::Wind => &self.wind,
            Condition::Cold => &self.cold,
            Condition::Heat => &self.heat,
            Condition::Clear => &self.clear,
        }
    }

    /// The built-in table shipped with the app, covering every combination
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            storm: set(
                Condition::Storm,
                ("Storms likely", "High chance of heavy rain. Keep an eye on the radar."),
                ("Rough start", "Heavy rain likely this morning. Leave early and take it slow."),
                ("Stormy evening", "Heavy falls possible tonight. Bring the washing in."),
                ("Wild night", "Storms about overnight. Charge your devices now."),
            ),
            rain: set(
                Condition::Rain,
                ("Rain about", "Decent chance of showers today. Keep the umbrella close."),
                ("Wet start", "Showers around this morning. Grab the umbrella on the way out."),
                ("Damp evening", "Showers lingering into the evening. Dry socks recommended."),
                ("Rainy night", "Rain on the roof tonight. Good sleeping weather."),
            ),
            wind: set(
                Condition::Wind,
                ("Hold on", "Strong winds today. Secure anything loose outside."),
                ("Blustery start", "Strong gusts this morning. Hold onto your hat."),
                ("Windy evening", "Gusts hanging around past sunset. Eat inside tonight."),
                ("Howling night", "Wind won't let up tonight. Close the windows before bed."),
            ),
            cold: set(
                Condition::Cold,
                ("Rug up", "Staying cold all day. Coat weather, no arguments."),
                ("Frosty start", "Cold one this morning. Layer up before heading out."),
                ("Chilly evening", "Temperature dropping fast. Heater weather tonight."),
                ("Cold night", "A cold one overnight. Extra blanket territory."),
            ),
            heat: set(
                Condition::Heat,
                ("Scorcher", "Serious heat today. Water, shade and sunscreen."),
                ("Warm already", "Heating up early. Get outdoor jobs done before nine."),
                ("Warm evening", "Slow to cool down tonight. A late swim wouldn't hurt."),
                ("Hot night", "Staying warm overnight. Fan on, sheets off."),
            ),
            clear: set(
                Condition::Clear,
                ("All clear", "Blue skies and easy conditions. Make the most of it."),
                ("Clear start", "Crisp air and a clean sunrise. Good morning for a walk."),
                ("Calm evening", "A quiet sunset on the way. Nothing to dodge tonight."),
                ("Still night", "Clear skies overhead. Good night for stargazing."),
            ),
        }
    }
}

impl Default for SceneTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn set(
    condition: Condition,
    day: (&str, &str),
    dawn: (&str, &str),
    dusk: (&str, &str),
    night: (&str, &str),
) -> SceneSet {
    SceneSet {
        day: copy(condition, TimeOfDay::Day, day),
        dawn: Some(copy(condition, TimeOfDay::Dawn, dawn)),
        dusk: Some(copy(condition, TimeOfDay::Dusk, dusk)),
        night: Some(copy(condition, TimeOfDay::Night, night)),
    }
}

fn copy(condition: Condition, time_of_day: TimeOfDay, text: (&str, &str)) -> SceneCopy {
    SceneCopy {
        title: text.0.to_string(),
        message: text.1.to_string(),
        image: format!("scenes/{}-{}.webp", condition.slug(), time_of_day.slug()),
    }
}

/// Icon asset path for an expense category.
///
/// Unknown ids get the generic receipt icon so a renamed or user-added
/// category still renders.
#[must_use]
pub fn category_icon(category_id: &str) -> &'static str {
    match category_id {
        "home_office" => "icons/home.svg",
        "phone_internet" => "icons/wifi.svg",
        "equipment" => "icons/laptop.svg",
        "vehicle" => "icons/car.svg",
        "travel" => "icons/plane.svg",
        "clothing" => "icons/shirt.svg",
        "self_education" => "icons/book.svg",
        "subscriptions" => "icons/card.svg",
        "donations" => "icons/heart.svg",
        _ => "icons/receipt.svg",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(condition: Condition, time_of_day: TimeOfDay, title: &str) -> SceneEntry {
        SceneEntry {
            condition,
            time_of_day,
            copy: SceneCopy {
                title: title.to_string(),
                message: String::new(),
                image: String::new(),
            },
        }
    }

    fn day_entries() -> Vec<SceneEntry> {
        Condition::ALL
            .iter()
            .map(|&c| entry(c, TimeOfDay::Day, c.slug()))
            .collect()
    }

    #[test]
    fn builtin_covers_every_combination() {
        let table = SceneTable::builtin();
        for condition in Condition::ALL {
            for time_of_day in TimeOfDay::ALL {
                let scene = table.scene(condition, time_of_day);
                assert!(!scene.title.is_empty());
                assert_eq!(
                    scene.image,
                    format!("scenes/{}-{}.webp", condition.slug(), time_of_day.slug())
                );
            }
        }
    }

    #[test]
    fn missing_combination_falls_back_to_day() {
        let mut entries = day_entries();
        entries.push(entry(Condition::Storm, TimeOfDay::Night, "storm-night"));
        let table = SceneTable::from_entries(&entries).unwrap();

        // Present combination is served as-is
        assert_eq!(
            table.scene(Condition::Storm, TimeOfDay::Night).title,
            "storm-night"
        );
        // Absent combinations fall back to the condition's day entry
        assert_eq!(table.scene(Condition::Storm, TimeOfDay::Dawn).title, "storm");
        assert_eq!(table.scene(Condition::Clear, TimeOfDay::Night).title, "clear");
    }

    #[test]
    fn construction_rejects_missing_day_entry() {
        let entries: Vec<SceneEntry> = Condition::ALL
            .iter()
            .filter(|&&c| c != Condition::Wind)
            .map(|&c| entry(c, TimeOfDay::Day, c.slug()))
            .collect();

        let err = SceneTable::from_entries(&entries).unwrap_err();
        match err {
            DomainError::MissingDayScene(slug) => assert_eq!(slug, "wind"),
            other => unreachable!("unexpected error: {other}"),
        }
    }

    #[test]
    fn night_entry_alone_is_not_enough() {
        let mut entries = day_entries();
        entries.retain(|e| e.condition != Condition::Heat);
        entries.push(entry(Condition::Heat, TimeOfDay::Night, "heat-night"));

        assert!(SceneTable::from_entries(&entries).is_err());
    }

    #[test]
    fn default_is_builtin() {
        let table = SceneTable::default();
        assert_eq!(
            table.scene(Condition::Clear, TimeOfDay::Day).title,
            "All clear"
        );
    }

    #[test]
    fn known_category_icons() {
        assert_eq!(category_icon("home_office"), "icons/home.svg");
        assert_eq!(category_icon("donations"), "icons/heart.svg");
    }

    #[test]
    fn unknown_category_gets_fallback_icon() {
        assert_eq!(category_icon("crypto_losses"), "icons/receipt.svg");
        assert_eq!(category_icon(""), "icons/receipt.svg");
    }
}
