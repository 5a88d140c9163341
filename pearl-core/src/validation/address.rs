//! Address checks

use crate::models::Address;

use super::{MAX_ADDRESS_LEN, MAX_SHORT_TEXT_LEN, ValidationErrors};

pub const FIELD_CITY_TOWN: &str = "address.city_town";
pub const FIELD_PROVINCE: &str = "address.province";
pub const FIELD_ZIP: &str = "address.zip";
pub const FIELD_STREET: &str = "address.street";

/// Validate an address. City/town and province are the required minimum;
/// everything else is free-form up to the length limits.
pub fn validate_address(address: &Address) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if address.city_town.trim().is_empty() {
        errors.add(FIELD_CITY_TOWN, "city/town must not be empty");
    }
    if address.province.trim().is_empty() {
        errors.add(FIELD_PROVINCE, "province must not be empty");
    }
    if !address.zip.is_empty() && !address.zip.chars().all(|c| c.is_ascii_digit()) {
        errors.add(FIELD_ZIP, "zip code must be numeric");
    }
    if address.zip.len() > MAX_SHORT_TEXT_LEN {
        errors.add(FIELD_ZIP, "zip code is too long");
    }
    if address.street.len() > MAX_ADDRESS_LEN {
        errors.add(FIELD_STREET, "street is too long");
    }
    errors
}
