//! Entity Models
//!
//! Plain value types owned by the backing store. Controllers hold copies,
//! never references into the store.

pub mod address;
pub mod contact_details;
pub mod employee;
pub mod personal_id;
pub mod sale;
pub mod user;

// Re-exports
pub use address::Address;
pub use contact_details::ContactDetails;
pub use employee::Employee;
pub use personal_id::PersonalId;
pub use sale::{Sale, SaleItem};
pub use user::{User, UserPositionUpdate};
