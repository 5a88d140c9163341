//! Entity Validation
//!
//! Stateless validators over disjoint aspects of an employee record. Each
//! validator returns a [`ValidationErrors`] map which the caller unions into
//! one result. Field keys are namespaced per validator (`person.*`,
//! `address.*`, ...) and every message for a key is retained, so two
//! validators reporting the same field never drop each other's output.

pub mod address;
pub mod contact;
pub mod employee;
mod errors;
pub mod person;
pub mod personal_id;
pub mod user;

// Re-exports
pub use address::validate_address;
pub use contact::validate_contact_details;
pub use employee::validate_employee;
pub use errors::ValidationErrors;
pub use person::validate_person;
pub use personal_id::validate_personal_id;
pub use user::{FIELD_PIN, validate_pin};

// ── Text length limits ──────────────────────────────────────────────

/// Name parts and position titles
pub const MAX_NAME_LEN: usize = 200;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Address components
pub const MAX_ADDRESS_LEN: usize = 500;

/// Short identifiers: personal ID numbers, zip codes
pub const MAX_SHORT_TEXT_LEN: usize = 100;

// ── Phone and PIN limits ────────────────────────────────────────────

pub const MIN_PHONE_LEN: usize = 7;
pub const MAX_PHONE_LEN: usize = 11;

pub const MIN_PIN_LEN: usize = 4;
pub const MAX_PIN_LEN: usize = 6;
