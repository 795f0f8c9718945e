//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee entity
///
/// `id`, `created_at` and `updated_at` are assigned by the store and are
/// never client-settable. JSON uses camelCase to match the API surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: i64,
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create/update payload carrying the five business fields
///
/// The same flat shape is used for create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
}

impl EmployeeInput {
    /// Copy of the payload with surrounding whitespace stripped from
    /// every field. Validation and persistence both operate on the
    /// trimmed form.
    pub fn trimmed(&self) -> Self {
        Self {
            employee_id: self.employee_id.trim().to_string(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            position: self.position.trim().to_string(),
        }
    }
}
