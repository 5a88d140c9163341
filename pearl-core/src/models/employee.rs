//! Employee Model

use serde::{Deserialize, Serialize};

use super::{Address, ContactDetails, PersonalId};

/// Employee record.
///
/// `id` is generated externally (see [`crate::utils::id::generate_employee_id`]).
/// `is_system_user` marks employees that own a linked [`super::User`] login
/// record; the link is provisioned by the employee management controller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    /// Birthdate as `YYYY-MM-DD`; format is checked by validation, not here.
    pub birthdate: String,
    pub gender: String,
    pub position: String,
    pub address: Address,
    pub contact_details: ContactDetails,
    #[serde(default)]
    pub personal_ids: Vec<PersonalId>,
    #[serde(default)]
    pub is_system_user: bool,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
