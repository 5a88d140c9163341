//! Personal ID Model

use serde::{Deserialize, Serialize};

/// Government or company ID attached to an employee (SSS, passport, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalId {
    pub id_type: String,
    pub id_number: String,
}
