//! Employee management presentation contract

/// Notifications the employee management controller raises toward the
/// user-facing layer. Rendering is entirely the implementor's concern.
pub trait EmployeeMgmtView {
    /// There are no employees on record.
    fn show_employees_empty(&self);

    /// A login record was provisioned for a new system user.
    fn show_user_created(&self, first_name: &str, user_id: &str);

    /// The requested record is not in the cached list.
    fn show_data_not_ready(&self);

    /// An employee was removed.
    fn show_removed(&self, employee_id: &str);
}
