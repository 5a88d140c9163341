//! Employee management persistence contract

use crate::error::DataResult;
use crate::models::{Employee, User, UserPositionUpdate};

/// Persistence operations the employee management controller depends on.
///
/// Implementations own the storage format. Read lookups signal not-found
/// with `Ok(None)`; an unreachable or failing store is an `Err`.
pub trait EmployeeMgmtData {
    /// Backing-store liveness check
    fn is_store_available(&self) -> bool;

    /// Full snapshot of the employee table
    fn employees(&self) -> DataResult<Vec<Employee>>;

    /// Login record linked to an employee, if any
    fn user_by_employee_id(&self, employee_id: &str) -> DataResult<Option<User>>;

    fn create_employee(&mut self, employee: &Employee) -> DataResult<()>;

    fn create_user(&mut self, user: &User) -> DataResult<()>;

    fn update_employee(&mut self, employee: &Employee) -> DataResult<()>;

    /// Partial user update: only the position changes.
    fn update_user_position(&mut self, update: &UserPositionUpdate) -> DataResult<()>;

    fn remove_employee(&mut self, employee_id: &str) -> DataResult<()>;
}
