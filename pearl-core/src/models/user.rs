//! User Model
//!
//! A user is a login record linked to an employee, not an employee subtype.
//! One user exists per employee with `is_system_user = true`.

use serde::{Deserialize, Serialize};

/// Login record for a system-user employee.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub position: String,
    #[serde(skip_serializing)]
    pub pin: String,
    /// Creation timestamp as `YYYY-MM-DD HH:MM:SS`.
    pub created_at: String,
    pub employee_id: String,
}

/// Partial user update carrying only the changed position.
///
/// Issued when an employee update touches a system user; every other user
/// field is left unchanged by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPositionUpdate {
    pub employee_id: String,
    pub position: String,
}
