//! Recording view double

use std::cell::{Cell, RefCell};

use pearl_core::accounting::AccountingView;
use pearl_core::auth::AuthView;
use pearl_core::dashboard::DashboardView;
use pearl_core::employees::EmployeeMgmtView;

/// Implements every pearl-core view contract and records what it is told.
/// Fields are public so tests assert on them directly.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub employees_empty: Cell<usize>,
    pub users_created: RefCell<Vec<(String, String)>>,
    pub data_not_ready: Cell<usize>,
    pub removed: RefCell<Vec<String>>,
    pub invalid_credentials: Cell<usize>,
    pub user_not_found: Cell<usize>,
    pub invalid_date_time_range: Cell<usize>,
    pub sales_empty: Cell<usize>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EmployeeMgmtView for RecordingView {
    fn show_employees_empty(&self) {
        self.employees_empty.set(self.employees_empty.get() + 1);
    }

    fn show_user_created(&self, first_name: &str, user_id: &str) {
        self.users_created
            .borrow_mut()
            .push((first_name.to_string(), user_id.to_string()));
    }

    fn show_data_not_ready(&self) {
        self.data_not_ready.set(self.data_not_ready.get() + 1);
    }

    fn show_removed(&self, employee_id: &str) {
        self.removed.borrow_mut().push(employee_id.to_string());
    }
}

impl AuthView for RecordingView {
    fn show_invalid_credentials(&self) {
        self.invalid_credentials.set(self.invalid_credentials.get() + 1);
    }

    fn show_data_not_ready(&self) {
        self.data_not_ready.set(self.data_not_ready.get() + 1);
    }
}

impl DashboardView for RecordingView {
    fn show_user_not_found(&self) {
        self.user_not_found.set(self.user_not_found.get() + 1);
    }
}

impl AccountingView for RecordingView {
    fn show_invalid_date_time_range(&self) {
        self.invalid_date_time_range
            .set(self.invalid_date_time_range.get() + 1);
    }

    fn show_sales_empty(&self) {
        self.sales_empty.set(self.sales_empty.get() + 1);
    }
}
