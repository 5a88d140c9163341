//! Pearl back-office core
//!
//! Business logic for a retail back office: employee records management,
//! user login, dashboard session, and sales record viewing. Every domain is
//! a controller over two injected contracts, a data provider (persistence)
//! and a view (presentation), so the logic runs unchanged against a real
//! store or the in-memory doubles in `pearl-mock`.
//!
//! Controllers are synchronous and single-caller: one instance per session,
//! no internal locking.

pub mod accounting;
pub mod auth;
pub mod dashboard;
pub mod employees;
pub mod error;
pub mod models;
pub mod utils;
pub mod validation;

// Re-exports
pub use accounting::{AccountingController, AccountingData, AccountingView};
pub use auth::{AuthController, AuthData, AuthView};
pub use dashboard::{CurrentUser, DashboardController, DashboardData, DashboardView};
pub use employees::{
    EmployeeCache, EmployeeMgmtController, EmployeeMgmtData, EmployeeMgmtStatus, EmployeeMgmtView,
    SaveEmployeeData,
};
pub use error::{DataError, DataResult};
pub use validation::ValidationErrors;
