//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::repository::employee;
use crate::utils::{AppError, AppResult};
use shared::client::{DeleteAck, EmployeeCreated, EmployeeList, EmployeeUpdated};
use shared::models::EmployeeInput;
use shared::validation;

/// Page size used when the query string omits or mangles `limit`
const DEFAULT_LIMIT: i64 = 10;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
}

/// GET /api/v1/employee - one page of employees, optionally filtered
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<EmployeeList>> {
    let page = normalize_page(query.page);
    let limit = normalize_limit(query.limit);
    let search = query.search.as_deref();

    let (employees, total_count) = employee::find_page(&state.pool, search, page, limit).await?;

    Ok(Json(EmployeeList {
        success: true,
        employees,
        total_pages: total_pages(total_count, limit),
        total_count,
    }))
}

/// POST /api/v1/employee - create an employee
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeInput>,
) -> AppResult<(StatusCode, Json<EmployeeCreated>)> {
    let input = payload.trimmed();
    validation::validate(&input).map_err(|e| AppError::validation(e.to_string()))?;

    // Fast path only; the UNIQUE constraints remain the arbiter under
    // concurrent creates
    if employee::find_by_employee_id_and_email(&state.pool, &input.employee_id, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::conflict("Employee already exists"));
    }

    let new_employee = employee::create(&state.pool, input).await?;

    Ok((
        StatusCode::CREATED,
        Json(EmployeeCreated {
            success: true,
            new_employee,
            message: "Employee created successfully".to_string(),
        }),
    ))
}

/// PUT /api/v1/employee/{id} - full-field replace
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<EmployeeInput>,
) -> AppResult<Json<EmployeeUpdated>> {
    // Existence is checked before the payload is validated
    let id = parse_id(&id)?;
    employee::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Employee not found"))?;

    let input = payload.trimmed();
    validation::validate(&input).map_err(|e| AppError::validation(e.to_string()))?;

    let updated_employee = employee::update(&state.pool, id, input).await?;

    Ok(Json(EmployeeUpdated {
        success: true,
        updated_employee,
        message: "Employee updated successfully".to_string(),
    }))
}

/// DELETE /api/v1/employee/{id} - hard delete
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteAck>> {
    if id.trim().is_empty() {
        return Err(AppError::validation("Employee ID is required"));
    }
    let id = parse_id(&id)?;

    let deleted = employee::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::not_found("Employee not found"));
    }

    Ok(Json(DeleteAck {
        success: true,
        message: "Employee deleted successfully".to_string(),
    }))
}

/// DELETE /api/v1/employee - id segment missing entirely
pub async fn delete_missing_id() -> AppResult<Json<DeleteAck>> {
    Err(AppError::validation("Employee ID is required"))
}

/// Record ids are store-assigned; anything unparseable cannot name an
/// existing record.
fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::not_found("Employee not found"))
}

fn normalize_page(page: Option<i64>) -> i64 {
    page.filter(|p| *p >= 1).unwrap_or(1)
}

/// Non-positive or missing limits clamp to the default page size
fn normalize_limit(limit: Option<i64>) -> i64 {
    limit.filter(|l| *l >= 1).unwrap_or(DEFAULT_LIMIT)
}

fn total_pages(total_count: i64, limit: i64) -> i64 {
    (total_count + limit - 1) / limit
}
