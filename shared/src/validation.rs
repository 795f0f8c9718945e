//! Employee field validation
//!
//! The single source of the field rules, consumed by both the API server
//! and the client so the two sides cannot drift. Fields are checked in a
//! fixed order (employee id, name, email, phone, position) and the first
//! failing rule wins; callers always get exactly one message.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::models::EmployeeInput;

/// A single failed rule, carrying its user-facing message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn message(&self) -> &str {
        &self.0
    }
}

static EMPLOYEE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").unwrap());
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*(?: [A-Za-z0-9_]+)*$").unwrap());
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap());
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\+?[0-9]{1,3}[- ]?)?[0-9]{10}$").unwrap());
static POSITION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z\s/-]*$").unwrap());

fn fail(message: &str) -> Result<(), ValidationError> {
    Err(ValidationError(message.to_string()))
}

/// Validate a full employee payload.
///
/// Values are trimmed before the rules run; persist the trimmed form
/// (see [`EmployeeInput::trimmed`]) so what was validated is what is
/// stored.
pub fn validate(input: &EmployeeInput) -> Result<(), ValidationError> {
    validate_employee_id(&input.employee_id)?;
    validate_name(&input.name)?;
    validate_email(&input.email)?;
    validate_phone(&input.phone)?;
    validate_position(&input.position)?;
    Ok(())
}

pub fn validate_employee_id(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return fail("Employee ID is required");
    }
    if !EMPLOYEE_ID_RE.is_match(value) {
        return fail(
            "Employee ID must start with a letter and can only contain letters, numbers, underscores, or dashes",
        );
    }
    if value.chars().count() < 3 {
        return fail("Employee ID must be at least 3 characters");
    }
    if value.chars().count() > 20 {
        return fail("Employee ID must be at most 20 characters");
    }
    Ok(())
}

pub fn validate_name(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return fail("Employee name is required");
    }
    if !NAME_RE.is_match(value) {
        return fail(
            "Name must start with a letter and can contain letters, numbers, underscores, and single spaces (no leading or multiple spaces)",
        );
    }
    if value.chars().count() < 3 {
        return fail("Must be at least 3 characters");
    }
    Ok(())
}

pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return fail("Email is required");
    }
    if !EMAIL_RE.is_match(value) {
        return fail("Invalid email format");
    }
    Ok(())
}

pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return fail("Phone number is required");
    }
    if !PHONE_RE.is_match(value) {
        return fail("Phone number must be 10 digits, with optional country code");
    }
    Ok(())
}

pub fn validate_position(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return fail("Position is required");
    }
    if !POSITION_RE.is_match(value) {
        return fail(
            "Position must start with a letter and can only contain letters, spaces, dashes, or slashes",
        );
    }
    if value.chars().count() < 2 {
        return fail("Position must be at least 2 characters");
    }
    if value.chars().count() > 50 {
        return fail("Position must be at most 50 characters");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> EmployeeInput {
        EmployeeInput {
            employee_id: "E100".to_string(),
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: "9876543210".to_string(),
            position: "Engineer".to_string(),
        }
    }

    fn message(result: Result<(), ValidationError>) -> String {
        result.unwrap_err().0
    }

    #[test]
    fn accepts_a_fully_valid_payload() {
        assert!(validate(&valid_input()).is_ok());
    }

    #[test]
    fn accepts_trimmed_variants() {
        let mut input = valid_input();
        input.name = "  Jane Doe  ".to_string();
        input.email = " jane@x.com ".to_string();
        assert!(validate(&input).is_ok());
    }

    // ========== employee id ==========

    #[test]
    fn employee_id_required() {
        assert_eq!(message(validate_employee_id("   ")), "Employee ID is required");
    }

    #[test]
    fn employee_id_pattern_before_length() {
        // "9a" fails both the pattern and the minimum; the pattern wins
        assert_eq!(
            message(validate_employee_id("9a")),
            "Employee ID must start with a letter and can only contain letters, numbers, underscores, or dashes",
        );
    }

    #[test]
    fn employee_id_length_bounds() {
        assert_eq!(
            message(validate_employee_id("ab")),
            "Employee ID must be at least 3 characters"
        );
        assert_eq!(
            message(validate_employee_id(&format!("a{}", "b".repeat(20)))),
            "Employee ID must be at most 20 characters"
        );
        assert!(validate_employee_id("abc").is_ok());
        assert!(validate_employee_id(&format!("a{}", "b".repeat(19))).is_ok());
    }

    #[test]
    fn employee_id_allows_underscore_and_dash() {
        assert!(validate_employee_id("E_10-a").is_ok());
        assert!(validate_employee_id("E 10").is_err());
    }

    // ========== name ==========

    #[test]
    fn name_required() {
        assert_eq!(message(validate_name("")), "Employee name is required");
    }

    #[test]
    fn name_single_spaces_only() {
        assert!(validate_name("Jane Doe").is_ok());
        assert!(validate_name("Jane  Doe").is_err());
        assert!(validate_name("1Jane").is_err());
        assert_eq!(
            message(validate_name("Jane  Doe")),
            "Name must start with a letter and can contain letters, numbers, underscores, and single spaces (no leading or multiple spaces)",
        );
    }

    #[test]
    fn name_minimum_length() {
        assert_eq!(message(validate_name("Jo")), "Must be at least 3 characters");
    }

    // ========== email ==========

    #[test]
    fn email_required() {
        assert_eq!(message(validate_email("")), "Email is required");
    }

    #[test]
    fn email_format() {
        assert_eq!(message(validate_email("not-an-email")), "Invalid email format");
        assert_eq!(message(validate_email("a@b")), "Invalid email format");
        assert!(validate_email("a.b+tag@sub.example.com").is_ok());
    }

    // ========== phone ==========

    #[test]
    fn phone_required() {
        assert_eq!(message(validate_phone("")), "Phone number is required");
    }

    #[test]
    fn phone_accepts_country_code_variants() {
        assert!(validate_phone("9876543210").is_ok());
        assert!(validate_phone("+91 9876543210").is_ok());
        assert!(validate_phone("+1-9876543210").is_ok());
        assert!(validate_phone("919876543210").is_ok());
    }

    #[test]
    fn phone_rejects_wrong_digit_count() {
        assert_eq!(
            message(validate_phone("12345")),
            "Phone number must be 10 digits, with optional country code"
        );
        assert!(validate_phone("+1234 9876543210").is_err());
    }

    // ========== position ==========

    #[test]
    fn position_required() {
        assert_eq!(message(validate_position("")), "Position is required");
    }

    #[test]
    fn position_pattern_and_bounds() {
        assert!(validate_position("Sr Engineer/Lead").is_ok());
        assert!(validate_position("Dev-Ops").is_ok());
        assert!(validate_position("3D Artist").is_err());
        assert_eq!(
            message(validate_position("Q")),
            "Position must be at least 2 characters"
        );
        assert_eq!(
            message(validate_position(&"a".repeat(51))),
            "Position must be at most 50 characters"
        );
    }

    // ========== ordering across fields ==========

    #[test]
    fn first_failing_field_wins() {
        let mut input = valid_input();
        input.name = String::new();
        input.phone = "bad".to_string();
        // name comes before phone in the field order
        assert_eq!(message(validate(&input)), "Employee name is required");

        let mut input = valid_input();
        input.employee_id = "x".to_string();
        input.position = String::new();
        assert_eq!(
            message(validate(&input)),
            "Employee ID must be at least 3 characters"
        );
    }

    #[test]
    fn position_is_checked_last() {
        let mut input = valid_input();
        input.position = "x".repeat(51);
        assert_eq!(
            message(validate(&input)),
            "Position must be at most 50 characters"
        );
    }
}
