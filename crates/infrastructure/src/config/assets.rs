//! Static asset configuration.

use serde::{Deserialize, Serialize};

/// Static asset configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetSettings {
    /// Root directory the asset paths are resolved against
    #[serde(default = "default_root")]
    pub root: String,

    /// Asset paths loaded into memory at startup
    #[serde(default = "default_precache")]
    pub precache: Vec<String>,
}

fn default_root() -> String {
    "assets".to_string()
}

/// The category icon set is small and requested on every ledger render,
/// so it is pre-cached by default. Scene art is fetched lazily.
fn default_precache() -> Vec<String> {
    [
        "icons/home.svg",
        "icons/wifi.svg",
        "icons/laptop.svg",
        "icons/car.svg",
        "icons/plane.svg",
        "icons/shirt.svg",
        "icons/book.svg",
        "icons/card.svg",
        "icons/heart.svg",
        "icons/receipt.svg",
    ]
    .map(String::from)
    .to_vec()
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            root: default_root(),
            precache: default_precache(),
        }
    }
}
