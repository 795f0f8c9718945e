//! Repository Module
//!
//! CRUD operations over the SQLite tables.

pub mod employee;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err
            && db_err.is_unique_violation()
        {
            return RepoError::Duplicate(duplicate_message(db_err.message()));
        }
        RepoError::Database(err.to_string())
    }
}

/// Map a unique-violation detail string to the offending field.
///
/// SQLite reports these as "UNIQUE constraint failed: employee.email".
fn duplicate_message(detail: &str) -> String {
    if detail.contains("employee.email") {
        "Email already exists.".to_string()
    } else if detail.contains("employee.phone") {
        "Phone number already exists.".to_string()
    } else if detail.contains("employee.employee_id") {
        "Employee id already exists.".to_string()
    } else {
        format!("Duplicate value: {detail}")
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
