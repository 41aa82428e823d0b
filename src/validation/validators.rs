//! Field validators
//!
//! Every validator is a pure function returning `None` when the value is
//! acceptable and `Some(message)` with a user-facing message otherwise.
//! Validators never look at other form state except through explicit
//! parameters, so the same input always produces the same result.

use chrono::{DateTime, Local, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;

/// Minimum password length accepted by [`password`]
pub const PASSWORD_MIN_LENGTH: usize = 8;

fn email_regex() -> Option<&'static Regex> {
    static EMAIL_RE: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL_RE
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok())
        .as_ref()
}

fn employee_id_regex() -> Option<&'static Regex> {
    static EMPLOYEE_ID_RE: OnceLock<Option<Regex>> = OnceLock::new();
    EMPLOYEE_ID_RE
        .get_or_init(|| Regex::new(r"^EMP-\d{4}$").ok())
        .as_ref()
}

/// Fails if the value is empty or whitespace-only
pub fn required(value: &str, field_name: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(format!("{field_name} is required"))
    } else {
        None
    }
}

/// Deliberately permissive `local@domain.tld` check
pub fn email(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some("Email is required".to_string());
    }
    match email_regex() {
        Some(re) if re.is_match(value) => None,
        _ => Some("Please enter a valid email address".to_string()),
    }
}

/// Ten digits once every non-digit character is stripped
pub fn phone(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some("Phone number is required".to_string());
    }
    let digits = value.chars().filter(char::is_ascii_digit).count();
    if digits != 10 {
        return Some("Phone number must be 10 digits".to_string());
    }
    None
}

/// Like [`phone`], but an empty value is accepted
pub fn phone_optional(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return None;
    }
    phone(value)
}

/// Length and character-class policy for account passwords.
///
/// Special characters are not required here; they only raise the score in
/// [`crate::validation::calculate_password_strength`].
pub fn password(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Password is required".to_string());
    }
    if value.chars().count() < PASSWORD_MIN_LENGTH {
        return Some(format!(
            "Password must be at least {PASSWORD_MIN_LENGTH} characters"
        ));
    }
    if !value.chars().any(|c| c.is_ascii_lowercase()) {
        return Some("Password must contain at least one lowercase letter".to_string());
    }
    if !value.chars().any(|c| c.is_ascii_uppercase()) {
        return Some("Password must contain at least one uppercase letter".to_string());
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        return Some("Password must contain at least one number".to_string());
    }
    None
}

pub fn password_confirm(value: &str, password: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Please confirm your password".to_string());
    }
    if value != password {
        return Some("Passwords do not match".to_string());
    }
    None
}

/// Person names: 2-50 characters, letters and spaces only
pub fn name(value: &str, field_name: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(format!("{field_name} is required"));
    }
    let len = trimmed.chars().count();
    if len < 2 {
        return Some(format!("{field_name} must be at least 2 characters"));
    }
    if len > 50 {
        return Some(format!("{field_name} must be less than 50 characters"));
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
    {
        return Some(format!("{field_name} can only contain letters and spaces"));
    }
    None
}

pub fn serial_number(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some("Serial number is required".to_string());
    }
    if !(5..=30).contains(&trimmed.chars().count()) {
        return Some("Serial number must be 5-30 characters".to_string());
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-')
    {
        return Some(
            "Serial number can only contain uppercase letters, numbers, and hyphens".to_string(),
        );
    }
    None
}

pub fn model_number(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some("Model number is required".to_string());
    }
    if !(3..=30).contains(&trimmed.chars().count()) {
        return Some("Model number must be 3-30 characters".to_string());
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Some("Model number can only contain letters, numbers, and hyphens".to_string());
    }
    None
}

/// Parse a date-input value: `YYYY-MM-DD`, or an RFC 3339 timestamp whose
/// date part is used.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Fails if the date lies after today
pub fn past_date(value: &str, field_name: &str) -> Option<String> {
    past_date_on(value, field_name, today())
}

pub fn past_date_on(value: &str, field_name: &str, today: NaiveDate) -> Option<String> {
    if value.trim().is_empty() {
        return Some(format!("{field_name} is required"));
    }
    match parse_date(value) {
        None => Some(format!("{field_name} must be a valid date")),
        Some(date) if date > today => Some(format!("{field_name} cannot be in the future")),
        Some(_) => None,
    }
}

/// Fails if the date lies before today
pub fn future_date(value: &str, field_name: &str) -> Option<String> {
    future_date_on(value, field_name, today())
}

pub fn future_date_on(value: &str, field_name: &str, today: NaiveDate) -> Option<String> {
    if value.trim().is_empty() {
        return Some(format!("{field_name} is required"));
    }
    match parse_date(value) {
        None => Some(format!("{field_name} must be a valid date")),
        Some(date) if date < today => Some(format!("{field_name} cannot be in the past")),
        Some(_) => None,
    }
}

/// Any parseable date, with no ordering constraint
pub fn valid_date(value: &str, field_name: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some(format!("{field_name} is required"));
    }
    match parse_date(value) {
        Some(_) => None,
        None => Some(format!("{field_name} must be a valid date")),
    }
}

/// Inclusive numeric range check on a textual value
pub fn number_range(value: &str, min: f64, max: f64, field_name: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(format!("{field_name} is required"));
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => {
            if n < min || n > max {
                Some(format!("{field_name} must be between {min} and {max}"))
            } else {
                None
            }
        }
        _ => Some(format!("{field_name} must be a valid number")),
    }
}

/// `EMP-` followed by exactly four digits
pub fn employee_id(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some("Employee ID is required".to_string());
    }
    match employee_id_regex() {
        Some(re) if re.is_match(value) => None,
        _ => Some("Employee ID must be in format EMP-XXXX".to_string()),
    }
}

/// Inclusive character-count bounds
pub fn text_length(value: &str, min: usize, max: usize, field_name: &str) -> Option<String> {
    let len = value.chars().count();
    if len < min {
        return Some(format!("{field_name} must be at least {min} characters"));
    }
    if len > max {
        return Some(format!("{field_name} must be at most {max} characters"));
    }
    None
}
