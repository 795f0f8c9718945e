//! API wire types
//!
//! Response shapes shared between the server handlers and the client so
//! the two sides deserialize exactly what the other serialized.

use serde::{Deserialize, Serialize};

use crate::models::Employee;

/// GET /employee response: one page plus pagination totals
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeList {
    pub success: bool,
    pub employees: Vec<Employee>,
    /// ceil(total_count / limit); 0 when nothing matches the filter
    pub total_pages: i64,
    /// Rows matching the filter, not the whole collection
    pub total_count: i64,
}

/// POST /employee response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreated {
    pub success: bool,
    pub new_employee: Employee,
    pub message: String,
}

/// PUT /employee/{id} response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdated {
    pub success: bool,
    pub updated_employee: Employee,
    pub message: String,
}

/// DELETE /employee/{id} response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
    pub success: bool,
    pub message: String,
}

/// Error body shared by every failure response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub success: bool,
    pub status_code: u16,
    pub message: String,
}
