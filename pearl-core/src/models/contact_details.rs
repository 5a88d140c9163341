//! Contact Details Model

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactDetails {
    #[serde(default)]
    pub phone_numbers: Vec<String>,
    pub email: String,
}
