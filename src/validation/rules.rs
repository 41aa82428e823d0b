//! Declarative rule tables and whole-form validation
//!
//! A [`Rule`] names one validator together with its parameters. Forms
//! describe each field as an ordered list of rules; the first rule that
//! fails supplies the field's error.

use super::validators;
use std::collections::BTreeMap;

/// Field name → current value
pub type FormData = BTreeMap<String, String>;

/// Field name → error message, only for fields that failed
pub type FieldErrors = BTreeMap<String, String>;

/// A single validation rule
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    Required { label: &'static str },
    Email,
    Phone,
    PhoneOptional,
    Password,
    /// Must equal the value of another field in the same form
    PasswordConfirm { other: &'static str },
    Name { label: &'static str },
    SerialNumber,
    ModelNumber,
    PastDate { label: &'static str },
    FutureDate { label: &'static str },
    ValidDate { label: &'static str },
    NumberRange {
        min: f64,
        max: f64,
        label: &'static str,
    },
    EmployeeId,
    TextLength {
        min: usize,
        max: usize,
        label: &'static str,
    },
    /// Skip the inner rule when the value is blank
    Optional(Box<Rule>),
}

impl Rule {
    pub fn optional(rule: Rule) -> Self {
        Rule::Optional(Box::new(rule))
    }

    /// Run the rule against `value`, reading sibling fields from `data`
    pub fn check(&self, value: &str, data: &FormData) -> Option<String> {
        match self {
            Rule::Required { label } => validators::required(value, label),
            Rule::Email => validators::email(value),
            Rule::Phone => validators::phone(value),
            Rule::PhoneOptional => validators::phone_optional(value),
            Rule::Password => validators::password(value),
            Rule::PasswordConfirm { other } => {
                let password = data.get(*other).map(String::as_str).unwrap_or("");
                validators::password_confirm(value, password)
            }
            Rule::Name { label } => validators::name(value, label),
            Rule::SerialNumber => validators::serial_number(value),
            Rule::ModelNumber => validators::model_number(value),
            Rule::PastDate { label } => validators::past_date(value, label),
            Rule::FutureDate { label } => validators::future_date(value, label),
            Rule::ValidDate { label } => validators::valid_date(value, label),
            Rule::NumberRange { min, max, label } => {
                validators::number_range(value, *min, *max, label)
            }
            Rule::EmployeeId => validators::employee_id(value),
            Rule::TextLength { min, max, label } => {
                validators::text_length(value, *min, *max, label)
            }
            Rule::Optional(inner) => {
                if value.trim().is_empty() {
                    None
                } else {
                    inner.check(value, data)
                }
            }
        }
    }
}

/// The ordered rules for one field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRules {
    pub field: &'static str,
    pub rules: Vec<Rule>,
}

impl FieldRules {
    pub fn new(field: &'static str, rules: Vec<Rule>) -> Self {
        Self { field, rules }
    }

    /// First failing rule's message for this field
    pub fn check(&self, data: &FormData) -> Option<String> {
        let value = data.get(self.field).map(String::as_str).unwrap_or("");
        self.rules.iter().find_map(|rule| rule.check(value, data))
    }
}

/// Validate every field that has rules. An empty result means the form is valid.
pub fn validate_form(data: &FormData, rules: &[FieldRules]) -> FieldErrors {
    rules
        .iter()
        .filter_map(|field_rules| {
            field_rules
                .check(data)
                .map(|message| (field_rules.field.to_string(), message))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn data(pairs: &[(&str, &str)]) -> FormData {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn signup_rules() -> Vec<FieldRules> {
        vec![
            FieldRules::new("name", vec![Rule::Name { label: "Name" }]),
            FieldRules::new("email", vec![Rule::Email]),
            FieldRules::new("password", vec![Rule::Password]),
            FieldRules::new(
                "confirm_password",
                vec![Rule::PasswordConfirm { other: "password" }],
            ),
            FieldRules::new("phone", vec![Rule::PhoneOptional]),
        ]
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        let form = data(&[
            ("name", "Grace Hopper"),
            ("email", "grace@clinic.org"),
            ("password", "Abc12345"),
            ("confirm_password", "Abc12345"),
            ("phone", ""),
        ]);
        assert!(validate_form(&form, &signup_rules()).is_empty());
    }

    #[test]
    fn test_collects_one_error_per_failing_field() {
        let form = data(&[
            ("name", ""),
            ("email", "nope"),
            ("password", "Abc12345"),
            ("confirm_password", "Abc1234"),
        ]);
        let errors = validate_form(&form, &signup_rules());
        assert_eq!(
            errors,
            FieldErrors::from([
                ("confirm_password".to_string(), "Passwords do not match".to_string()),
                ("email".to_string(), "Please enter a valid email address".to_string()),
                ("name".to_string(), "Name is required".to_string()),
            ])
        );
    }

    #[test]
    fn test_missing_key_is_treated_as_empty() {
        let rules = vec![FieldRules::new(
            "location",
            vec![Rule::Required { label: "Location" }],
        )];
        let errors = validate_form(&FormData::new(), &rules);
        assert_eq!(
            errors.get("location").map(String::as_str),
            Some("Location is required")
        );
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let rules = FieldRules::new(
            "title",
            vec![
                Rule::Required { label: "Title" },
                Rule::TextLength {
                    min: 5,
                    max: 100,
                    label: "Title",
                },
            ],
        );
        assert_eq!(
            rules.check(&data(&[("title", "")])),
            Some("Title is required".to_string())
        );
        assert_eq!(
            rules.check(&data(&[("title", "Fix")])),
            Some("Title must be at least 5 characters".to_string())
        );
    }

    #[test]
    fn test_optional_skips_blank_values() {
        let rule = Rule::optional(Rule::TextLength {
            min: 10,
            max: 500,
            label: "Notes",
        });
        assert!(rule.check("", &FormData::new()).is_none());
        assert!(rule.check("short", &FormData::new()).is_some());
    }
}
