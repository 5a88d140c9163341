//! Basic person field checks

use crate::models::Employee;
use crate::utils::time::parse_date;

use super::{MAX_NAME_LEN, ValidationErrors};

pub const FIELD_FIRST_NAME: &str = "person.first_name";
pub const FIELD_MIDDLE_NAME: &str = "person.middle_name";
pub const FIELD_LAST_NAME: &str = "person.last_name";
pub const FIELD_BIRTHDATE: &str = "person.birthdate";
pub const FIELD_GENDER: &str = "person.gender";

/// Validate the person aspect of an employee: names, birthdate, gender.
///
/// The middle name may be empty; the other fields are required.
pub fn validate_person(employee: &Employee) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    check_name(&mut errors, FIELD_FIRST_NAME, &employee.first_name, true);
    check_name(&mut errors, FIELD_MIDDLE_NAME, &employee.middle_name, false);
    check_name(&mut errors, FIELD_LAST_NAME, &employee.last_name, true);

    if employee.birthdate.trim().is_empty() {
        errors.add(FIELD_BIRTHDATE, "birthdate must not be empty");
    } else if parse_date(&employee.birthdate).is_none() {
        errors.add(
            FIELD_BIRTHDATE,
            format!("invalid birthdate format: {}", employee.birthdate),
        );
    }

    if employee.gender != "Male" && employee.gender != "Female" {
        errors.add(FIELD_GENDER, "gender must be Male or Female");
    }
    errors
}

fn check_name(errors: &mut ValidationErrors, field: &str, value: &str, required: bool) {
    if value.trim().is_empty() {
        if required {
            errors.add(field, "name must not be empty");
        }
        return;
    }
    if value.len() > MAX_NAME_LEN {
        errors.add(
            field,
            format!("name is too long ({} chars, max {MAX_NAME_LEN})", value.len()),
        );
    }
}
