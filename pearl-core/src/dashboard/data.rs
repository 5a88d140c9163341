//! Dashboard persistence contract

use crate::error::DataResult;
use crate::models::{Employee, User};

pub trait DashboardData {
    fn user_by_id(&self, user_id: &str) -> DataResult<Option<User>>;

    fn employee_by_id(&self, employee_id: &str) -> DataResult<Option<Employee>>;
}
