//! Add/edit user form
//!
//! On create the password pair is mandatory. On edit both password fields
//! may stay blank to keep the current password; they are only validated,
//! and only sent, once either one has content.

use super::field::FieldSpec;
use super::helpers::{form_data, mapped_options, trimmed, value};
use crate::state::ids::generate_employee_code;
use crate::state::{Mapped, User, UserRole};
use crate::validation::{FieldRules, FormData, Rule};
use chrono::Utc;
use serde_json::{json, Value};

pub fn fields(editing: bool) -> Vec<FieldSpec> {
    let (password_label, password_help) = if editing {
        ("New Password", "Leave blank to keep the current password")
    } else {
        ("Password", "At least 8 characters")
    };
    vec![
        FieldSpec::text("employee_id", "Employee Code")
            .with_help("Assigned automatically")
            .read_only(),
        FieldSpec::text("name", "Name")
            .with_placeholder("e.g. Jane Doe")
            .with_max_length(50),
        FieldSpec::text("email", "Email").with_placeholder("name@clinic.org"),
        FieldSpec::text("phone", "Phone")
            .with_placeholder("Optional")
            .with_help("10 digits"),
        FieldSpec::select("role", "Role", mapped_options::<UserRole>()),
        FieldSpec::text("department", "Department").with_max_length(50),
        FieldSpec::password("password", password_label, true).with_help(password_help),
        FieldSpec::password("confirm_password", "Confirm Password", false),
    ]
}

pub fn initial_data(existing: Option<&User>) -> FormData {
    let user = existing.cloned().unwrap_or_else(|| User {
        employee_id: generate_employee_code(Utc::now()),
        ..Default::default()
    });
    form_data([
        ("employee_id", user.employee_id),
        ("name", user.name),
        ("email", user.email),
        ("phone", user.phone),
        ("role", user.role.backend_value().to_string()),
        ("department", user.department),
        ("password", String::new()),
        ("confirm_password", String::new()),
    ])
}

fn password_entered(data: &FormData) -> bool {
    !value(data, "password").is_empty() || !value(data, "confirm_password").is_empty()
}

/// Rules depend on the current data: an edit only checks passwords once one is typed
pub fn rules(editing: bool, data: &FormData) -> Vec<FieldRules> {
    let mut rules = vec![
        FieldRules::new("name", vec![Rule::Name { label: "Name" }]),
        FieldRules::new("email", vec![Rule::Email]),
        FieldRules::new("phone", vec![Rule::PhoneOptional]),
        FieldRules::new("role", vec![Rule::Required { label: "Role" }]),
        FieldRules::new(
            "department",
            vec![Rule::optional(Rule::TextLength { min: 2, max: 50, label: "Department" })],
        ),
    ];
    if !editing || password_entered(data) {
        rules.push(FieldRules::new("password", vec![Rule::Password]));
        rules.push(FieldRules::new(
            "confirm_password",
            vec![Rule::PasswordConfirm { other: "password" }],
        ));
    }
    rules
}

pub fn payload(editing: bool, data: &FormData) -> Value {
    let mut body = json!({
        "employee_id": trimmed(data, "employee_id"),
        "name": trimmed(data, "name"),
        "email": trimmed(data, "email"),
        "phone": trimmed(data, "phone"),
        "role": trimmed(data, "role"),
        "department": trimmed(data, "department"),
    });
    let password = value(data, "password");
    if !editing || !password.is_empty() {
        body["password"] = Value::String(password.to_string());
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_form;

    fn existing() -> User {
        User {
            id: "u1".to_string(),
            employee_id: "EMP1700000000000042".to_string(),
            name: "Sam Lee".to_string(),
            email: "sam@clinic.org".to_string(),
            role: UserRole::Manager,
            ..Default::default()
        }
    }

    #[test]
    fn test_new_user_gets_generated_code() {
        let data = initial_data(None);
        assert!(data["employee_id"].starts_with("EMP"));
        assert_eq!(data["role"], "staff");
    }

    #[test]
    fn test_create_requires_password() {
        let data = initial_data(None);
        let errors = validate_form(&data, &rules(false, &data));
        assert_eq!(errors["password"], "Password is required");
    }

    #[test]
    fn test_edit_skips_blank_password() {
        let data = initial_data(Some(&existing()));
        let errors = validate_form(&data, &rules(true, &data));
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");

        let body = payload(true, &data);
        assert!(body.get("password").is_none());
        assert!(body.get("confirm_password").is_none());
    }

    #[test]
    fn test_edit_checks_password_once_typed() {
        let mut data = initial_data(Some(&existing()));
        data.insert("password".to_string(), "Str0ng!Pass".to_string());
        let errors = validate_form(&data, &rules(true, &data));
        assert_eq!(errors["confirm_password"], "Please confirm your password");

        data.insert("confirm_password".to_string(), "Str0ng!Pass".to_string());
        assert!(validate_form(&data, &rules(true, &data)).is_empty());
        assert_eq!(payload(true, &data)["password"], "Str0ng!Pass");
    }
}
