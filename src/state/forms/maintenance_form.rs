//! Maintenance request form (create and edit)

use super::field::FieldSpec;
use super::helpers::{
    equipment_options, form_data, mapped_options, optional, resolve_equipment_id,
    resolve_technician_id, technician_options, trimmed,
};
use super::FormContext;
use crate::state::{MaintenanceRequest, Mapped, Priority, RequestStatus};
use crate::validation::{FieldRules, FormData, Rule};
use serde_json::{json, Value};

pub fn fields(editing: bool, ctx: &FormContext<'_>) -> Vec<FieldSpec> {
    let mut fields = vec![
        FieldSpec::select("equipment", "Equipment", equipment_options(ctx.equipment)),
        FieldSpec::text("title", "Title")
            .with_placeholder("Short summary of the issue")
            .with_max_length(100),
        FieldSpec::textarea("description", "Description")
            .with_placeholder("What is wrong, when it started, error codes")
            .with_max_length(500),
        FieldSpec::select("priority", "Priority", mapped_options::<Priority>()),
    ];
    if editing {
        fields.push(FieldSpec::select(
            "status",
            "Status",
            mapped_options::<RequestStatus>(),
        ));
    }
    fields.push(FieldSpec::select(
        "assigned_technician",
        "Assigned Technician",
        technician_options(ctx.technicians),
    ));
    fields.push(
        FieldSpec::date("scheduled_date", "Scheduled Date").with_help(if editing {
            "Optional"
        } else {
            "Today or later"
        }),
    );
    fields
}

pub fn initial_data(
    existing: Option<&MaintenanceRequest>,
    preselected_equipment: Option<&str>,
    ctx: &FormContext<'_>,
) -> FormData {
    let Some(request) = existing else {
        return form_data([
            (
                "equipment",
                preselected_equipment
                    .map(|id| resolve_equipment_id(id, ctx.equipment))
                    .unwrap_or_default(),
            ),
            ("title", String::new()),
            ("description", String::new()),
            ("priority", Priority::default().backend_value().to_string()),
            ("assigned_technician", String::new()),
            ("scheduled_date", String::new()),
        ]);
    };
    form_data([
        (
            "equipment",
            request
                .equipment
                .as_ref()
                .map(|r| resolve_equipment_id(&r.id, ctx.equipment))
                .unwrap_or_default(),
        ),
        ("title", request.title.clone()),
        ("description", request.description.clone()),
        ("priority", request.priority.backend_value().to_string()),
        ("status", request.status.backend_value().to_string()),
        (
            "assigned_technician",
            request
                .technician
                .as_ref()
                .map(|r| resolve_technician_id(&r.id, ctx.technicians))
                .unwrap_or_default(),
        ),
        ("scheduled_date", request.scheduled_date.clone().unwrap_or_default()),
    ])
}

pub fn rules(editing: bool) -> Vec<FieldRules> {
    let scheduled = if editing {
        Rule::optional(Rule::ValidDate { label: "Scheduled date" })
    } else {
        Rule::FutureDate { label: "Scheduled date" }
    };
    let mut rules = vec![
        FieldRules::new("equipment", vec![Rule::Required { label: "Equipment" }]),
        FieldRules::new(
            "title",
            vec![
                Rule::Required { label: "Title" },
                Rule::TextLength { min: 5, max: 100, label: "Title" },
            ],
        ),
        FieldRules::new(
            "description",
            vec![
                Rule::Required { label: "Description" },
                Rule::TextLength { min: 10, max: 500, label: "Description" },
            ],
        ),
        FieldRules::new("priority", vec![Rule::Required { label: "Priority" }]),
        FieldRules::new("scheduled_date", vec![scheduled]),
    ];
    if editing {
        rules.push(FieldRules::new("status", vec![Rule::Required { label: "Status" }]));
    }
    rules
}

pub fn payload(editing: bool, data: &FormData) -> Value {
    let status = if editing {
        trimmed(data, "status")
    } else {
        Value::String(RequestStatus::Pending.backend_value().to_string())
    };
    json!({
        "equipment": trimmed(data, "equipment"),
        "title": trimmed(data, "title"),
        "description": trimmed(data, "description"),
        "priority": trimmed(data, "priority"),
        "status": status,
        "assigned_technician": optional(data, "assigned_technician"),
        "scheduled_date": optional(data, "scheduled_date"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{EntityRef, Equipment, Technician};
    use crate::validation::validate_form;

    fn equipment() -> Vec<Equipment> {
        vec![Equipment {
            id: "64a1".to_string(),
            equipment_id: "EQ-1001".to_string(),
            name: "Ventilator".to_string(),
            ..Default::default()
        }]
    }

    fn technicians() -> Vec<Technician> {
        vec![Technician {
            id: "t9".to_string(),
            employee_id: "EMP-0009".to_string(),
            name: "Ana Ruiz".to_string(),
            ..Default::default()
        }]
    }

    #[test]
    fn test_status_field_only_on_edit() {
        let eq = equipment();
        let techs = technicians();
        let ctx = FormContext { equipment: &eq, technicians: &techs };
        assert!(!fields(false, &ctx).iter().any(|f| f.name == "status"));
        assert!(fields(true, &ctx).iter().any(|f| f.name == "status"));
    }

    #[test]
    fn test_edit_reconciles_tag_references() {
        let eq = equipment();
        let techs = technicians();
        let ctx = FormContext { equipment: &eq, technicians: &techs };
        let request = MaintenanceRequest {
            id: "r1".to_string(),
            equipment: Some(EntityRef { id: "EQ-1001".to_string(), name: None }),
            technician: Some(EntityRef { id: "EMP-0009".to_string(), name: None }),
            ..Default::default()
        };
        let data = initial_data(Some(&request), None, &ctx);
        assert_eq!(data["equipment"], "64a1");
        assert_eq!(data["assigned_technician"], "t9");
    }

    #[test]
    fn test_create_requires_scheduled_date() {
        let ctx = FormContext { equipment: &[], technicians: &[] };
        let data = initial_data(None, None, &ctx);
        let errors = validate_form(&data, &rules(false));
        assert_eq!(errors["scheduled_date"], "Scheduled date is required");
        assert_eq!(errors["equipment"], "Equipment is required");
    }

    #[test]
    fn test_edit_allows_blank_date() {
        let mut data = FormData::new();
        data.insert("scheduled_date".to_string(), String::new());
        let errors = validate_form(&data, &rules(true));
        assert!(!errors.contains_key("scheduled_date"));
    }

    #[test]
    fn test_create_payload_is_pending_and_unassigned() {
        let eq = equipment();
        let ctx = FormContext { equipment: &eq, technicians: &[] };
        let data = initial_data(None, Some("EQ-1001"), &ctx);
        let body = payload(false, &data);
        assert_eq!(body["equipment"], "64a1");
        assert_eq!(body["status"], "pending");
        assert_eq!(body["assigned_technician"], Value::Null);
    }
}
