//! Add/edit technician form

use super::field::FieldSpec;
use super::helpers::{form_data, mapped_options, number, optional, plain_options, trimmed};
use crate::state::{Mapped, Technician, TechnicianStatus};
use crate::validation::{FieldRules, FormData, Rule};
use serde_json::{json, Value};

pub const SPECIALIZATIONS: &[&str] = &[
    "Biomedical",
    "Imaging Systems",
    "Electrical",
    "Mechanical",
    "Laboratory Equipment",
    "IT Systems",
    "General",
];

pub fn fields(editing: bool) -> Vec<FieldSpec> {
    let employee_id = FieldSpec::text("employee_id", "Employee ID")
        .with_placeholder("EMP-0001")
        .with_max_length(8);
    vec![
        FieldSpec::text("name", "Full Name")
            .with_placeholder("e.g. Jane Doe")
            .with_max_length(50),
        if editing { employee_id.read_only() } else { employee_id },
        FieldSpec::text("email", "Email").with_placeholder("name@clinic.org"),
        FieldSpec::text("phone", "Phone").with_placeholder("+1 555 123 4567"),
        FieldSpec::select(
            "specialization",
            "Specialization",
            plain_options("Select specialization", SPECIALIZATIONS),
        ),
        FieldSpec::number("experience_years", "Years of Experience").with_max_length(4),
        FieldSpec::date("hire_date", "Hire Date"),
        FieldSpec::select("status", "Status", mapped_options::<TechnicianStatus>()),
    ]
}

pub fn initial_data(existing: Option<&Technician>) -> FormData {
    let t = existing.cloned().unwrap_or_default();
    form_data([
        ("name", t.name),
        ("employee_id", t.employee_id),
        ("email", t.email),
        ("phone", t.phone),
        ("specialization", t.specialization),
        (
            "experience_years",
            t.experience_years.map(|y| y.to_string()).unwrap_or_default(),
        ),
        ("hire_date", t.hire_date.unwrap_or_default()),
        ("status", t.status.backend_value().to_string()),
    ])
}

/// The employee id is locked when editing, so only new ids are checked
pub fn rules(editing: bool) -> Vec<FieldRules> {
    let employee_id = if editing {
        vec![]
    } else {
        vec![Rule::EmployeeId]
    };
    vec![
        FieldRules::new("name", vec![Rule::Name { label: "Full name" }]),
        FieldRules::new("employee_id", employee_id),
        FieldRules::new("email", vec![Rule::Email]),
        FieldRules::new("phone", vec![Rule::Phone]),
        FieldRules::new("specialization", vec![Rule::Required { label: "Specialization" }]),
        FieldRules::new(
            "experience_years",
            vec![Rule::NumberRange { min: 0.0, max: 50.0, label: "Years of experience" }],
        ),
        FieldRules::new("hire_date", vec![Rule::PastDate { label: "Hire date" }]),
    ]
}

pub fn payload(data: &FormData) -> Value {
    json!({
        "name": trimmed(data, "name"),
        "employee_id": trimmed(data, "employee_id"),
        "email": trimmed(data, "email"),
        "phone": trimmed(data, "phone"),
        "specialization": trimmed(data, "specialization"),
        "experience_years": number(data, "experience_years"),
        "hire_date": optional(data, "hire_date"),
        "status": trimmed(data, "status"),
    })
}
