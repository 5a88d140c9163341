//! Dashboard presentation contract

pub trait DashboardView {
    /// The current user was not found or has insufficient data.
    fn show_user_not_found(&self);
}
