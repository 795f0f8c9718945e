//! Shared types for the Employee Data Management System
//!
//! Common types used across the server and client crates: the employee
//! data model, the single validation rule set both sides consume, the
//! API wire shapes, and id/timestamp utilities.

pub mod client;
pub mod models;
pub mod util;
pub mod validation;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{Employee, EmployeeInput};
pub use validation::{ValidationError, validate};
