//! User credential checks

use super::{MAX_PIN_LEN, MIN_PIN_LEN, ValidationErrors};

pub const FIELD_PIN: &str = "user.pin";

/// Validate a login PIN: digits only, within the configured length band.
///
/// Used when provisioning a new system user and by the PIN login path.
pub fn validate_pin(pin: &str) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if pin.is_empty() {
        errors.add(FIELD_PIN, "PIN must not be empty");
        return errors;
    }
    if !pin.chars().all(|c| c.is_ascii_digit()) {
        errors.add(FIELD_PIN, "PIN must be numeric");
    }
    if pin.len() < MIN_PIN_LEN || pin.len() > MAX_PIN_LEN {
        errors.add(
            FIELD_PIN,
            format!("PIN must be {MIN_PIN_LEN} to {MAX_PIN_LEN} digits"),
        );
    }
    errors
}
