//! Employee Management
//!
//! The controller owns a read cache of the employee table and drives the
//! persistence and presentation contracts injected at construction.

pub mod cache;
pub mod controller;
pub mod data;
pub mod view;

// Re-exports
pub use cache::EmployeeCache;
pub use controller::{EmployeeMgmtController, EmployeeMgmtStatus, SaveEmployeeData};
pub use data::EmployeeMgmtData;
pub use view::EmployeeMgmtView;
