//! Add/edit equipment form

use super::field::FieldSpec;
use super::helpers::{form_data, mapped_options, optional, plain_options, trimmed};
use crate::state::ids::generate_equipment_id;
use crate::state::{Equipment, EquipmentStatus, Mapped};
use crate::validation::{FieldRules, FormData, Rule};
use serde_json::{json, Value};

pub const CATEGORIES: &[&str] = &[
    "Imaging",
    "Diagnostic",
    "Surgical",
    "Monitoring",
    "Laboratory",
    "Life Support",
    "Therapy",
    "Other",
];

pub fn fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::text("equipment_id", "Equipment ID")
            .with_help("Generated asset tag")
            .read_only(),
        FieldSpec::text("name", "Equipment Name")
            .with_placeholder("e.g. MRI Scanner")
            .with_max_length(100),
        FieldSpec::select("category", "Category", plain_options("Select category", CATEGORIES)),
        FieldSpec::text("manufacturer", "Manufacturer").with_max_length(50),
        FieldSpec::text("model_number", "Model Number")
            .with_placeholder("e.g. MX-500")
            .with_max_length(30),
        FieldSpec::text("serial_number", "Serial Number")
            .with_placeholder("e.g. SN-2024-0001")
            .with_help("Uppercase letters, numbers and hyphens")
            .with_max_length(30),
        FieldSpec::text("location", "Location")
            .with_placeholder("e.g. Radiology, Room 3")
            .with_max_length(100),
        FieldSpec::date("purchase_date", "Purchase Date"),
        FieldSpec::select("status", "Status", mapped_options::<EquipmentStatus>()),
    ]
}

pub fn initial_data(existing: Option<&Equipment>) -> FormData {
    match existing {
        Some(e) => form_data([
            ("equipment_id", e.equipment_id.clone()),
            ("name", e.name.clone()),
            ("category", e.category.clone()),
            ("manufacturer", e.manufacturer.clone()),
            ("model_number", e.model_number.clone()),
            ("serial_number", e.serial_number.clone()),
            ("location", e.location.clone()),
            ("purchase_date", e.purchase_date.clone().unwrap_or_default()),
            ("status", e.status.backend_value().to_string()),
        ]),
        None => form_data([
            ("equipment_id", generate_equipment_id()),
            ("name", String::new()),
            ("category", String::new()),
            ("manufacturer", String::new()),
            ("model_number", String::new()),
            ("serial_number", String::new()),
            ("location", String::new()),
            ("purchase_date", String::new()),
            ("status", EquipmentStatus::default().backend_value().to_string()),
        ]),
    }
}

pub fn rules() -> Vec<FieldRules> {
    vec![
        FieldRules::new(
            "name",
            vec![
                Rule::Required { label: "Equipment name" },
                Rule::TextLength { min: 2, max: 100, label: "Equipment name" },
            ],
        ),
        FieldRules::new("category", vec![Rule::Required { label: "Category" }]),
        FieldRules::new(
            "manufacturer",
            vec![
                Rule::Required { label: "Manufacturer" },
                Rule::TextLength { min: 2, max: 50, label: "Manufacturer" },
            ],
        ),
        FieldRules::new("model_number", vec![Rule::ModelNumber]),
        FieldRules::new("serial_number", vec![Rule::SerialNumber]),
        FieldRules::new("location", vec![Rule::Required { label: "Location" }]),
        FieldRules::new("purchase_date", vec![Rule::PastDate { label: "Purchase date" }]),
        FieldRules::new("status", vec![Rule::Required { label: "Status" }]),
    ]
}

pub fn payload(data: &FormData) -> Value {
    json!({
        "equipment_id": trimmed(data, "equipment_id"),
        "name": trimmed(data, "name"),
        "category": trimmed(data, "category"),
        "manufacturer": trimmed(data, "manufacturer"),
        "model_number": trimmed(data, "model_number"),
        "serial_number": trimmed(data, "serial_number"),
        "location": trimmed(data, "location"),
        "purchase_date": optional(data, "purchase_date"),
        "status": trimmed(data, "status"),
    })
}
