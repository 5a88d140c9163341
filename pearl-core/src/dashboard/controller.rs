//! Dashboard Controller

use crate::models::{Employee, User};

use super::{DashboardData, DashboardView};

/// The logged-in user together with their employee record.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentUser {
    pub user: User,
    pub employee: Employee,
}

/// Resolves the session's current user for the landing screen.
pub struct DashboardController<D, V> {
    data: D,
    view: V,
    current_user_id: Option<String>,
}

impl<D, V> DashboardController<D, V>
where
    D: DashboardData,
    V: DashboardView,
{
    pub fn new(data: D, view: V) -> Self {
        Self {
            data,
            view,
            current_user_id: None,
        }
    }

    pub fn set_current_user_id(&mut self, user_id: impl Into<String>) {
        self.current_user_id = Some(user_id.into());
    }

    /// Fetch the current user and the employee record it links to.
    ///
    /// A missing user, a missing employee, or a broken linkage all raise
    /// the not-found notification and yield `None`.
    pub fn current_user_info(&self) -> Option<CurrentUser> {
        let Some(user_id) = self.current_user_id.as_deref() else {
            tracing::warn!("no current user id is set");
            self.view.show_user_not_found();
            return None;
        };
        tracing::debug!(user_id = %user_id, "resolving current user");
        let user = match self.data.user_by_id(user_id) {
            Ok(Some(user)) if !user.employee_id.is_empty() => user,
            Ok(_) => {
                tracing::error!(user_id = %user_id, "current user was not found");
                self.view.show_user_not_found();
                return None;
            }
            Err(err) => {
                tracing::error!(error = %err, "user lookup failed");
                self.view.show_user_not_found();
                return None;
            }
        };
        match self.data.employee_by_id(&user.employee_id) {
            Ok(Some(employee)) => {
                tracing::info!(user_id = %user.user_id, "current user resolved");
                Some(CurrentUser { user, employee })
            }
            Ok(None) => {
                tracing::error!(
                    employee_id = %user.employee_id,
                    "current user has no employee record"
                );
                self.view.show_user_not_found();
                None
            }
            Err(err) => {
                tracing::error!(error = %err, "employee lookup failed");
                self.view.show_user_not_found();
                None
            }
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}
