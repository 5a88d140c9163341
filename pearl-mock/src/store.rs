//! In-memory data provider

use std::collections::HashMap;

use pearl_core::accounting::AccountingData;
use pearl_core::auth::AuthData;
use pearl_core::dashboard::DashboardData;
use pearl_core::employees::EmployeeMgmtData;
use pearl_core::error::{DataError, DataResult};
use pearl_core::models::{Employee, Sale, SaleItem, User, UserPositionUpdate};

/// Vector-backed store implementing all pearl-core data contracts.
///
/// `set_available(false)` makes every operation fail with
/// [`DataError::Unavailable`]; `set_fail_user_writes(true)` rejects only
/// user writes, which is how tests exercise the cascading-create rollback.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    employees: Vec<Employee>,
    users: Vec<User>,
    passwords: HashMap<String, String>,
    sales: Vec<Sale>,
    sale_items: Vec<SaleItem>,
    unavailable: bool,
    fail_user_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Seeding and fault injection ─────────────────────────────────

    pub fn insert_employee(&mut self, employee: Employee) {
        self.employees.push(employee);
    }

    pub fn insert_user(&mut self, user: User) {
        self.users.push(user);
    }

    /// Register the password for a user ID (usernames are user IDs).
    pub fn set_password(&mut self, user_id: impl Into<String>, password: impl Into<String>) {
        self.passwords.insert(user_id.into(), password.into());
    }

    pub fn insert_sale(&mut self, sale: Sale) {
        self.sales.push(sale);
    }

    pub fn insert_sale_item(&mut self, item: SaleItem) {
        self.sale_items.push(item);
    }

    pub fn set_available(&mut self, available: bool) {
        self.unavailable = !available;
    }

    pub fn set_fail_user_writes(&mut self, fail: bool) {
        self.fail_user_writes = fail;
    }

    // ── Assertion helpers ───────────────────────────────────────────

    pub fn employee(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    pub fn user_for(&self, employee_id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.employee_id == employee_id)
    }

    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    fn guard(&self) -> DataResult<()> {
        if self.unavailable {
            return Err(DataError::Unavailable("memory store is offline".to_string()));
        }
        Ok(())
    }
}

impl EmployeeMgmtData for MemoryStore {
    fn is_store_available(&self) -> bool {
        !self.unavailable
    }

    fn employees(&self) -> DataResult<Vec<Employee>> {
        self.guard()?;
        Ok(self.employees.clone())
    }

    fn user_by_employee_id(&self, employee_id: &str) -> DataResult<Option<User>> {
        self.guard()?;
        Ok(self.user_for(employee_id).cloned())
    }

    fn create_employee(&mut self, employee: &Employee) -> DataResult<()> {
        self.guard()?;
        if self.employee(&employee.id).is_some() {
            return Err(DataError::Duplicate(format!(
                "employee '{}' already exists",
                employee.id
            )));
        }
        self.employees.push(employee.clone());
        Ok(())
    }

    fn create_user(&mut self, user: &User) -> DataResult<()> {
        self.guard()?;
        if self.fail_user_writes {
            return Err(DataError::Backend("user write rejected".to_string()));
        }
        if self.user_for(&user.employee_id).is_some() {
            return Err(DataError::Duplicate(format!(
                "employee '{}' already has a login record",
                user.employee_id
            )));
        }
        self.users.push(user.clone());
        Ok(())
    }

    fn update_employee(&mut self, employee: &Employee) -> DataResult<()> {
        self.guard()?;
        let Some(slot) = self.employees.iter_mut().find(|e| e.id == employee.id) else {
            return Err(DataError::Backend(format!(
                "employee '{}' is not on record",
                employee.id
            )));
        };
        *slot = employee.clone();
        Ok(())
    }

    fn update_user_position(&mut self, update: &UserPositionUpdate) -> DataResult<()> {
        self.guard()?;
        if self.fail_user_writes {
            return Err(DataError::Backend("user write rejected".to_string()));
        }
        let Some(user) = self
            .users
            .iter_mut()
            .find(|u| u.employee_id == update.employee_id)
        else {
            return Err(DataError::Backend(format!(
                "employee '{}' has no login record",
                update.employee_id
            )));
        };
        user.position = update.position.clone();
        Ok(())
    }

    fn remove_employee(&mut self, employee_id: &str) -> DataResult<()> {
        self.guard()?;
        self.employees.retain(|e| e.id != employee_id);
        // Linked login records go with the employee.
        self.users.retain(|u| u.employee_id != employee_id);
        Ok(())
    }
}

impl AuthData for MemoryStore {
    fn is_store_available(&self) -> bool {
        !self.unavailable
    }

    fn find_user_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> DataResult<Option<User>> {
        self.guard()?;
        let matches = self
            .passwords
            .get(username)
            .is_some_and(|stored| stored == password);
        if !matches {
            return Ok(None);
        }
        Ok(self.users.iter().find(|u| u.user_id == username).cloned())
    }

    fn find_user_by_pin(&self, pin: &str) -> DataResult<Option<User>> {
        self.guard()?;
        Ok(self.users.iter().find(|u| u.pin == pin).cloned())
    }
}

impl DashboardData for MemoryStore {
    fn user_by_id(&self, user_id: &str) -> DataResult<Option<User>> {
        self.guard()?;
        Ok(self.users.iter().find(|u| u.user_id == user_id).cloned())
    }

    fn employee_by_id(&self, employee_id: &str) -> DataResult<Option<Employee>> {
        self.guard()?;
        Ok(self.employee(employee_id).cloned())
    }
}

impl AccountingData for MemoryStore {
    fn sales_between(&self, from: i64, to: i64) -> DataResult<Vec<Sale>> {
        self.guard()?;
        Ok(self
            .sales
            .iter()
            .filter(|s| s.sold_at >= from && s.sold_at <= to)
            .cloned()
            .collect())
    }

    fn sale_items(&self, sale_id: &str) -> DataResult<Vec<SaleItem>> {
        self.guard()?;
        Ok(self
            .sale_items
            .iter()
            .filter(|i| i.sale_id == sale_id)
            .cloned()
            .collect())
    }
}
