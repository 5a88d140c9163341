//! Core employee field checks

use crate::models::Employee;

use super::{MAX_NAME_LEN, ValidationErrors};

pub const FIELD_EMPLOYEE_ID: &str = "employee.id";
pub const FIELD_POSITION: &str = "employee.position";

/// Validate key employee data: the record ID and the position title.
pub fn validate_employee(employee: &Employee) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if employee.id.trim().is_empty() {
        errors.add(FIELD_EMPLOYEE_ID, "employee ID must not be empty");
    }
    if employee.position.trim().is_empty() {
        errors.add(FIELD_POSITION, "position must not be empty");
    } else if employee.position.len() > MAX_NAME_LEN {
        errors.add(
            FIELD_POSITION,
            format!(
                "position is too long ({} chars, max {MAX_NAME_LEN})",
                employee.position.len()
            ),
        );
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_id_and_position_are_reported() {
        let errors = validate_employee(&Employee::default());
        assert!(errors.contains(FIELD_EMPLOYEE_ID));
        assert!(errors.contains(FIELD_POSITION));
    }

    #[test]
    fn test_filled_employee_passes() {
        let employee = Employee {
            id: "2241359".to_string(),
            position: "Cashier".to_string(),
            ..Employee::default()
        };
        assert!(validate_employee(&employee).is_empty());
    }
}
