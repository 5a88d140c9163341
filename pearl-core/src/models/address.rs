//! Address Model

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub house_number: String,
    #[serde(default)]
    pub lot: String,
    #[serde(default)]
    pub block: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub subdivision: String,
    #[serde(default)]
    pub sitio: String,
    #[serde(default)]
    pub purok: String,
    #[serde(default)]
    pub barangay: String,
    pub city_town: String,
    pub province: String,
    #[serde(default)]
    pub zip: String,
}
