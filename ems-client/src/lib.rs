//! EMS Client - HTTP client for the Employee Data Management System API
//!
//! Provides typed network calls plus a debounced list view that drives
//! search/pagination UIs without flooding the server.

pub mod config;
pub mod error;
pub mod http;
pub mod list_view;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{EmployeeApi, HttpClient};
pub use list_view::{ListState, ListView};

// Re-export shared types for convenience
pub use shared::client::{DeleteAck, EmployeeCreated, EmployeeList, EmployeeUpdated, ErrorBody};
pub use shared::models::{Employee, EmployeeInput};
