//! Personal ID checks

use crate::models::PersonalId;

use super::{MAX_SHORT_TEXT_LEN, ValidationErrors};

pub const FIELD_ID_TYPE: &str = "personal_id.type";
pub const FIELD_ID_NUMBER: &str = "personal_id.number";

/// Validate one personal ID entry. The caller loops over the employee's
/// entries; messages for several bad entries accumulate under the same keys.
pub fn validate_personal_id(personal_id: &PersonalId) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if personal_id.id_type.trim().is_empty() {
        errors.add(FIELD_ID_TYPE, "ID type must not be empty");
    }
    if personal_id.id_number.trim().is_empty() {
        errors.add(FIELD_ID_NUMBER, "ID number must not be empty");
    } else if personal_id.id_number.len() > MAX_SHORT_TEXT_LEN {
        errors.add(FIELD_ID_NUMBER, "ID number is too long");
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_entry_passes() {
        let id = PersonalId {
            id_type: "SSS".to_string(),
            id_number: "34-1234567-8".to_string(),
        };
        assert!(validate_personal_id(&id).is_empty());
    }

    #[test]
    fn test_blank_entry_is_reported() {
        let errors = validate_personal_id(&PersonalId::default());
        assert!(errors.contains(FIELD_ID_TYPE));
        assert!(errors.contains(FIELD_ID_NUMBER));
    }
}
