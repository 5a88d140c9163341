//! Dashboard Session

pub mod controller;
pub mod data;
pub mod view;

// Re-exports
pub use controller::{CurrentUser, DashboardController};
pub use data::DashboardData;
pub use view::DashboardView;
