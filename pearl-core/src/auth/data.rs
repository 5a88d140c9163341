//! Authentication persistence contract

use crate::error::DataResult;
use crate::models::User;

/// Credential lookups the auth controller depends on. Implementations own
/// the credential storage; the controller never sees password material
/// beyond what the caller typed.
pub trait AuthData {
    /// Backing-store liveness check
    fn is_store_available(&self) -> bool;

    /// User matching a username/password pair, if the pair is right.
    fn find_user_by_credentials(&self, username: &str, password: &str)
    -> DataResult<Option<User>>;

    /// User owning this PIN, if any.
    fn find_user_by_pin(&self, pin: &str) -> DataResult<Option<User>>;
}
