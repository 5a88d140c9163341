//! Contact detail checks

use crate::models::ContactDetails;

use super::{MAX_EMAIL_LEN, MAX_PHONE_LEN, MIN_PHONE_LEN, ValidationErrors};

pub const FIELD_EMAIL: &str = "contact.email";
pub const FIELD_PHONE: &str = "contact.phone";

/// Validate contact details. The email is required; phone numbers are
/// optional but each supplied number must be a plausible digit string.
pub fn validate_contact_details(contact: &ContactDetails) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    check_email(&mut errors, &contact.email);
    for phone in &contact.phone_numbers {
        check_phone(&mut errors, phone);
    }
    errors
}

fn check_email(errors: &mut ValidationErrors, email: &str) {
    if email.trim().is_empty() {
        errors.add(FIELD_EMAIL, "email must not be empty");
        return;
    }
    if email.len() > MAX_EMAIL_LEN {
        errors.add(FIELD_EMAIL, "email is too long");
        return;
    }
    let valid = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    };
    if !valid {
        errors.add(FIELD_EMAIL, format!("invalid email: {email}"));
    }
}

fn check_phone(errors: &mut ValidationErrors, phone: &str) {
    if !phone.chars().all(|c| c.is_ascii_digit()) {
        errors.add(FIELD_PHONE, format!("phone number must be numeric: {phone}"));
    } else if phone.len() < MIN_PHONE_LEN || phone.len() > MAX_PHONE_LEN {
        errors.add(
            FIELD_PHONE,
            format!(
                "phone number must be {MIN_PHONE_LEN} to {MAX_PHONE_LEN} digits: {phone}"
            ),
        );
    }
}
