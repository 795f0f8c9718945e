//! Employee Repository

use sqlx::SqlitePool;

use super::{RepoError, RepoResult};
use shared::models::{Employee, EmployeeInput};

const EMPLOYEE_SELECT: &str =
    "SELECT id, employee_id, name, email, phone, position, created_at, updated_at FROM employee";

const SEARCH_FILTER: &str = "lower(name) LIKE ?1 ESCAPE '\\' OR lower(email) LIKE ?1 ESCAPE '\\' OR lower(employee_id) LIKE ?1 ESCAPE '\\'";

/// Build a case-insensitive substring pattern, escaping LIKE wildcards
/// so the term matches literally.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped.to_lowercase())
}

/// Fetch one page of employees, newest first, plus the number of rows
/// matching the filter (not the page).
pub async fn find_page(
    pool: &SqlitePool,
    search: Option<&str>,
    page: i64,
    limit: i64,
) -> RepoResult<(Vec<Employee>, i64)> {
    let offset = (page - 1) * limit;

    match search.map(str::trim).filter(|s| !s.is_empty()) {
        Some(term) => {
            let pattern = like_pattern(term);
            let sql = format!(
                "{EMPLOYEE_SELECT} WHERE {SEARCH_FILTER} ORDER BY created_at DESC, id DESC LIMIT ?2 OFFSET ?3"
            );
            let rows = sqlx::query_as::<_, Employee>(&sql)
                .bind(&pattern)
                .bind(limit)
                .bind(offset)
                .fetch_all(pool)
                .await?;

            let count_sql = format!("SELECT COUNT(*) FROM employee WHERE {SEARCH_FILTER}");
            let total: i64 = sqlx::query_scalar(&count_sql)
                .bind(&pattern)
                .fetch_one(pool)
                .await?;

            Ok((rows, total))
        }
        None => {
            let sql = format!(
                "{EMPLOYEE_SELECT} ORDER BY created_at DESC, id DESC LIMIT ?1 OFFSET ?2"
            );
            let rows = sqlx::query_as::<_, Employee>(&sql)
                .bind(limit)
                .bind(offset)
                .fetch_all(pool)
                .await?;

            let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employee")
                .fetch_one(pool)
                .await?;

            Ok((rows, total))
        }
    }
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Employee>> {
    let sql = format!("{EMPLOYEE_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Employee>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Pre-check used by create: does a record with this exact
/// (employee_id, email) pair already exist?
pub async fn find_by_employee_id_and_email(
    pool: &SqlitePool,
    employee_id: &str,
    email: &str,
) -> RepoResult<Option<Employee>> {
    let sql = format!("{EMPLOYEE_SELECT} WHERE employee_id = ? AND email = ? LIMIT 1");
    let row = sqlx::query_as::<_, Employee>(&sql)
        .bind(employee_id)
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Insert a new employee. Unique violations on employee_id / email /
/// phone surface as [`RepoError::Duplicate`] naming the field.
pub async fn create(pool: &SqlitePool, data: EmployeeInput) -> RepoResult<Employee> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO employee (id, employee_id, name, email, phone, position, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)",
    )
    .bind(id)
    .bind(&data.employee_id)
    .bind(&data.name)
    .bind(&data.email)
    .bind(&data.phone)
    .bind(&data.position)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create employee".into()))
}

/// Full-field replace of the five business fields. `id` and
/// `created_at` are untouched.
pub async fn update(pool: &SqlitePool, id: i64, data: EmployeeInput) -> RepoResult<Employee> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE employee SET employee_id = ?1, name = ?2, email = ?3, phone = ?4, position = ?5, updated_at = ?6 WHERE id = ?7",
    )
    .bind(&data.employee_id)
    .bind(&data.name)
    .bind(&data.email)
    .bind(&data.phone)
    .bind(&data.position)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Employee {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))
}

/// Hard delete. Returns whether a row was removed.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM employee WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
