//! Recurring maintenance schedule form

use super::field::{FieldSpec, SelectOption};
use super::helpers::{
    equipment_options, form_data, number, optional, resolve_equipment_id, technician_options,
    trimmed,
};
use super::FormContext;
use crate::validation::{FieldRules, FormData, Rule};
use serde_json::{json, Value};

pub const FREQUENCIES: &[(&str, &str)] = &[
    ("daily", "Daily"),
    ("weekly", "Weekly"),
    ("monthly", "Monthly"),
    ("quarterly", "Quarterly"),
    ("annually", "Annually"),
];

pub fn fields(ctx: &FormContext<'_>) -> Vec<FieldSpec> {
    let frequencies = std::iter::once(SelectOption::new("", "Select frequency"))
        .chain(FREQUENCIES.iter().map(|(v, l)| SelectOption::new(*v, *l)))
        .collect();
    vec![
        FieldSpec::select("equipment", "Equipment", equipment_options(ctx.equipment)),
        FieldSpec::text("task_name", "Task")
            .with_placeholder("e.g. Calibrate sensors")
            .with_max_length(100),
        FieldSpec::select("frequency", "Frequency", frequencies),
        FieldSpec::date("next_due_date", "Next Due Date"),
        FieldSpec::select(
            "assigned_technician",
            "Assigned Technician",
            technician_options(ctx.technicians),
        ),
        FieldSpec::number("estimated_hours", "Estimated Hours")
            .with_help("0.5 to 24")
            .with_max_length(4),
        FieldSpec::textarea("notes", "Notes")
            .with_placeholder("Optional")
            .with_max_length(500),
    ]
}

pub fn initial_data(preselected_equipment: Option<&str>, ctx: &FormContext<'_>) -> FormData {
    form_data([
        (
            "equipment",
            preselected_equipment
                .map(|id| resolve_equipment_id(id, ctx.equipment))
                .unwrap_or_default(),
        ),
        ("task_name", String::new()),
        ("frequency", String::new()),
        ("next_due_date", String::new()),
        ("assigned_technician", String::new()),
        ("estimated_hours", "1".to_string()),
        ("notes", String::new()),
    ])
}

pub fn rules() -> Vec<FieldRules> {
    vec![
        FieldRules::new("equipment", vec![Rule::Required { label: "Equipment" }]),
        FieldRules::new(
            "task_name",
            vec![
                Rule::Required { label: "Task name" },
                Rule::TextLength { min: 3, max: 100, label: "Task name" },
            ],
        ),
        FieldRules::new("frequency", vec![Rule::Required { label: "Frequency" }]),
        FieldRules::new("next_due_date", vec![Rule::FutureDate { label: "Next due date" }]),
        FieldRules::new(
            "estimated_hours",
            vec![Rule::NumberRange { min: 0.5, max: 24.0, label: "Estimated hours" }],
        ),
        FieldRules::new(
            "notes",
            vec![Rule::TextLength { min: 0, max: 500, label: "Notes" }],
        ),
    ]
}

pub fn payload(data: &FormData) -> Value {
    json!({
        "equipment": trimmed(data, "equipment"),
        "task_name": trimmed(data, "task_name"),
        "frequency": trimmed(data, "frequency"),
        "next_due_date": trimmed(data, "next_due_date"),
        "assigned_technician": optional(data, "assigned_technician"),
        "estimated_hours": number(data, "estimated_hours"),
        "notes": optional(data, "notes"),
    })
}
