//! Authentication Controller

use crate::validation::validate_pin;

use super::{AuthData, AuthView};

/// Password and PIN login over an injected credential store.
///
/// Refusals are deliberately uniform: a wrong password, an unknown
/// username, and an unknown PIN all produce the same notification, so the
/// view cannot be used to enumerate accounts.
pub struct AuthController<D, V> {
    data: D,
    view: V,
}

impl<D, V> AuthController<D, V>
where
    D: AuthData,
    V: AuthView,
{
    pub fn new(data: D, view: V) -> Self {
        Self { data, view }
    }

    pub fn login(&self, username: &str, password: &str) -> bool {
        tracing::debug!(username = %username, "processing password login");
        if username.trim().is_empty() || password.is_empty() {
            self.view.show_invalid_credentials();
            return false;
        }
        if !self.store_is_up() {
            return false;
        }
        match self.data.find_user_by_credentials(username, password) {
            Ok(Some(user)) => {
                tracing::info!(user_id = %user.user_id, "login succeeded");
                true
            }
            Ok(None) => {
                tracing::warn!(username = %username, "login failed - invalid credentials");
                self.view.show_invalid_credentials();
                false
            }
            Err(err) => {
                tracing::error!(error = %err, "credential lookup failed");
                self.view.show_data_not_ready();
                false
            }
        }
    }

    /// PIN login. A malformed PIN is refused before the store is asked.
    pub fn login_with_pin(&self, pin: &str) -> bool {
        tracing::debug!("processing PIN login");
        if !is_pin_valid(pin) {
            tracing::warn!("login failed - malformed PIN");
            self.view.show_invalid_credentials();
            return false;
        }
        if !self.store_is_up() {
            return false;
        }
        match self.data.find_user_by_pin(pin) {
            Ok(Some(user)) => {
                tracing::info!(user_id = %user.user_id, "PIN login succeeded");
                true
            }
            Ok(None) => {
                tracing::warn!("login failed - unknown PIN");
                self.view.show_invalid_credentials();
                false
            }
            Err(err) => {
                tracing::error!(error = %err, "PIN lookup failed");
                self.view.show_data_not_ready();
                false
            }
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    fn store_is_up(&self) -> bool {
        if self.data.is_store_available() {
            return true;
        }
        tracing::error!("credential store is not available");
        self.view.show_data_not_ready();
        false
    }
}

fn is_pin_valid(pin: &str) -> bool {
    validate_pin(pin).is_empty()
}
