//! Employee Management Controller

use crate::error::DataResult;
use crate::models::{Employee, User, UserPositionUpdate};
use crate::utils::{id, time};
use crate::validation::{
    ValidationErrors, validate_address, validate_contact_details, validate_employee,
    validate_person, validate_personal_id, validate_pin,
};

use super::{EmployeeCache, EmployeeMgmtData, EmployeeMgmtView};

/// Outcome of a controller operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeMgmtStatus {
    Success,
    /// Validation errors are present; they carry the detail.
    Failed,
    /// The target record is not in the cached list.
    NotFound,
    /// The caller did not supply a validation output container.
    Uninitialized,
    /// A store write failed or the store is unreachable.
    StoreUnavailable,
}

/// Input bundle for [`EmployeeMgmtController::save`].
///
/// The PIN is only consulted when the employee is a new system user. The
/// validation container receives every field error found; without one the
/// save is refused with [`EmployeeMgmtStatus::Uninitialized`].
pub struct SaveEmployeeData<'a> {
    pub employee: Employee,
    pub pin: String,
    pub validation_result: Option<&'a mut ValidationErrors>,
}

/// Orchestrates validation, the create-or-update decision, cache
/// maintenance, and cascading user provisioning.
///
/// The create-vs-update decision reads the cache, not the store: call
/// [`list`] before [`save`] so the decision is accurate. A stale or empty
/// cache makes every save look like a creation.
///
/// One instance serves one caller; the cache is not shared.
///
/// [`list`]: EmployeeMgmtController::list
/// [`save`]: EmployeeMgmtController::save
pub struct EmployeeMgmtController<D, V> {
    data: D,
    view: V,
    cache: EmployeeCache,
}

impl<D, V> EmployeeMgmtController<D, V>
where
    D: EmployeeMgmtData,
    V: EmployeeMgmtView,
{
    pub fn new(data: D, view: V) -> Self {
        Self {
            data,
            view,
            cache: EmployeeCache::new(),
        }
    }

    /// Fetch all employees and replace the cache with the snapshot, empty
    /// included. An empty store raises the empty notification once.
    pub fn list(&mut self) -> DataResult<Vec<Employee>> {
        tracing::debug!("getting the list of employees");
        let employees = self.data.employees().map_err(|err| {
            tracing::error!(error = %err, "failed to fetch employees");
            err
        })?;
        self.cache.refresh(employees.clone());
        if employees.is_empty() {
            tracing::warn!("there are no employees on record");
            self.view.show_employees_empty();
            return Ok(Vec::new());
        }
        tracing::info!(count = employees.len(), "retrieved employees list");
        Ok(employees)
    }

    /// Look up an employee in the current cache. No refetch, no
    /// notification on a miss.
    pub fn get_employee(&self, employee_id: &str) -> Option<Employee> {
        tracing::debug!(employee_id = %employee_id, "getting employee");
        let employee = self.cache.get(employee_id).cloned();
        if employee.is_none() {
            tracing::error!(employee_id = %employee_id, "employee was not found");
        }
        employee
    }

    /// Fetch the login record linked to an employee. An empty user ID or a
    /// linkage to a different employee counts as not found.
    pub fn get_user(&self, employee_id: &str) -> DataResult<Option<User>> {
        tracing::debug!(employee_id = %employee_id, "retrieving user data");
        match self.data.user_by_employee_id(employee_id)? {
            Some(user) if !user.user_id.is_empty() && user.employee_id == employee_id => {
                tracing::info!(user_id = %user.user_id, "found user data");
                Ok(Some(user))
            }
            _ => {
                tracing::error!(employee_id = %employee_id, "user was not found");
                Ok(None)
            }
        }
    }

    /// Validate, then dispatch to create or update based on the cache.
    pub fn save(&mut self, data: SaveEmployeeData<'_>) -> EmployeeMgmtStatus {
        let SaveEmployeeData {
            employee,
            pin,
            validation_result,
        } = data;
        tracing::debug!(employee_id = %employee.id, "saving employee information");
        let Some(errors) = validation_result else {
            tracing::error!("validation result container is not initialized");
            return EmployeeMgmtStatus::Uninitialized;
        };
        errors.clear();
        errors.merge(validate_details(&employee));
        // A system user not yet in the cache is a creation, and only
        // creations validate the PIN until user updates are supported.
        if employee.is_system_user && !self.exists(&employee.id) {
            errors.merge(validate_pin(&pin));
        }
        if !errors.is_empty() {
            tracing::warn!("entity contains invalid data, returning validation results");
            dump_validation_result(errors);
            return EmployeeMgmtStatus::Failed;
        }
        if self.exists(&employee.id) {
            self.update(&employee)
        } else {
            self.create(&employee, &pin)
        }
    }

    /// Remove an employee by ID. A record missing from the cache is
    /// reported as not ready and never reaches the store.
    pub fn remove(&mut self, employee_id: &str) -> EmployeeMgmtStatus {
        tracing::debug!(employee_id = %employee_id, "removing employee");
        if !self.cache.contains(employee_id) {
            tracing::error!(employee_id = %employee_id, "employee is not in the cached list");
            self.view.show_data_not_ready();
            return EmployeeMgmtStatus::NotFound;
        }
        if let Err(err) = self.data.remove_employee(employee_id) {
            tracing::error!(error = %err, "store failed to remove the employee");
            return EmployeeMgmtStatus::StoreUnavailable;
        }
        self.cache.evict(employee_id);
        self.view.show_removed(employee_id);
        tracing::info!(employee_id = %employee_id, "removed employee");
        EmployeeMgmtStatus::Success
    }

    /// Linear scan of the cache matching both name parts, case-insensitive.
    pub fn find_by_name(&self, first_name: &str, last_name: &str) -> Vec<Employee> {
        self.cache
            .all()
            .iter()
            .filter(|e| {
                e.first_name.eq_ignore_ascii_case(first_name)
                    && e.last_name.eq_ignore_ascii_case(last_name)
            })
            .cloned()
            .collect()
    }

    /// Cache-only membership check
    pub fn exists(&self, employee_id: &str) -> bool {
        self.cache.contains(employee_id)
    }

    pub fn cache(&self) -> &EmployeeCache {
        &self.cache
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut D {
        &mut self.data
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    fn create(&mut self, employee: &Employee, pin: &str) -> EmployeeMgmtStatus {
        tracing::debug!(employee_id = %employee.id, "creating employee");
        if let Err(err) = self.data.create_employee(employee) {
            tracing::error!(error = %err, "store failed to create the employee");
            return EmployeeMgmtStatus::StoreUnavailable;
        }
        self.cache.upsert(employee.clone());
        tracing::info!(name = %employee.full_name(), "employee added");
        if employee.is_system_user
            && let Err(err) = self.provision_user(employee, pin)
        {
            // Compensate so the store and cache match again.
            tracing::error!(error = %err, "user provisioning failed, rolling back employee");
            if let Err(rollback_err) = self.data.remove_employee(&employee.id) {
                tracing::error!(error = %rollback_err, "rollback of employee creation failed");
            }
            self.cache.evict(&employee.id);
            return EmployeeMgmtStatus::StoreUnavailable;
        }
        EmployeeMgmtStatus::Success
    }

    fn provision_user(&mut self, employee: &Employee, pin: &str) -> DataResult<()> {
        let user = User {
            user_id: id::new_user_id(&employee.first_name, &employee.last_name),
            position: employee.position.clone(),
            pin: pin.to_string(),
            created_at: time::current_date_time(),
            employee_id: employee.id.clone(),
        };
        self.data.create_user(&user)?;
        self.view.show_user_created(&employee.first_name, &user.user_id);
        tracing::info!(user_id = %user.user_id, "user added");
        Ok(())
    }

    // Precondition: the employee is already in the cached list.
    fn update(&mut self, employee: &Employee) -> EmployeeMgmtStatus {
        tracing::debug!(employee_id = %employee.id, "updating employee");
        if let Err(err) = self.data.update_employee(employee) {
            tracing::error!(error = %err, "store failed to update the employee");
            return EmployeeMgmtStatus::StoreUnavailable;
        }
        self.cache.upsert(employee.clone());
        if employee.is_system_user {
            let update = UserPositionUpdate {
                employee_id: employee.id.clone(),
                position: employee.position.clone(),
            };
            if let Err(err) = self.data.update_user_position(&update) {
                tracing::error!(error = %err, "store failed to update the user position");
                return EmployeeMgmtStatus::StoreUnavailable;
            }
            tracing::info!(position = %employee.position, "user role updated");
        }
        tracing::info!(employee_id = %employee.id, "employee information updated");
        EmployeeMgmtStatus::Success
    }
}

/// Union the five aspect validators over one employee.
fn validate_details(employee: &Employee) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.merge(validate_employee(employee));
    errors.merge(validate_person(employee));
    errors.merge(validate_address(&employee.address));
    errors.merge(validate_contact_details(&employee.contact_details));
    for personal_id in &employee.personal_ids {
        errors.merge(validate_personal_id(personal_id));
    }
    errors
}

fn dump_validation_result(errors: &ValidationErrors) {
    for (field, messages) in errors.iter() {
        for message in messages {
            tracing::debug!(field = %field, message = %message, "validation");
        }
    }
}
