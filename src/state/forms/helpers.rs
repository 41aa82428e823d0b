//! Small helpers shared by the per-entity form definitions

use super::field::SelectOption;
use crate::state::status::Mapped;
use crate::state::{Equipment, Technician};
use crate::validation::FormData;
use serde_json::Value;

/// Select options for a mapped enum: backend value, display label
pub fn mapped_options<T: Mapped>() -> Vec<SelectOption> {
    T::TABLE
        .iter()
        .map(|(_, backend, label)| SelectOption::new(*backend, *label))
        .collect()
}

/// Options whose value is the label itself, led by an empty placeholder
pub fn plain_options(placeholder: &str, labels: &[&str]) -> Vec<SelectOption> {
    std::iter::once(SelectOption::new("", placeholder))
        .chain(labels.iter().map(|l| SelectOption::new(*l, *l)))
        .collect()
}

pub fn equipment_options(equipment: &[Equipment]) -> Vec<SelectOption> {
    std::iter::once(SelectOption::new("", "Select equipment"))
        .chain(
            equipment
                .iter()
                .map(|e| SelectOption::new(e.id.clone(), e.display_name())),
        )
        .collect()
}

pub fn technician_options(technicians: &[Technician]) -> Vec<SelectOption> {
    std::iter::once(SelectOption::new("", "Unassigned"))
        .chain(technicians.iter().map(|t| {
            let label = if t.employee_id.is_empty() {
                t.name.clone()
            } else {
                format!("{} ({})", t.name, t.employee_id)
            };
            SelectOption::new(t.id.clone(), label)
        }))
        .collect()
}

/// Map a reference that may be a record id or a human-facing tag to the record id
pub fn resolve_equipment_id(reference: &str, equipment: &[Equipment]) -> String {
    equipment
        .iter()
        .find(|e| e.id == reference || (!e.equipment_id.is_empty() && e.equipment_id == reference))
        .map(|e| e.id.clone())
        .unwrap_or_else(|| reference.to_string())
}

pub fn resolve_technician_id(reference: &str, technicians: &[Technician]) -> String {
    technicians
        .iter()
        .find(|t| t.id == reference || (!t.employee_id.is_empty() && t.employee_id == reference))
        .map(|t| t.id.clone())
        .unwrap_or_else(|| reference.to_string())
}

pub fn value<'a>(data: &'a FormData, key: &str) -> &'a str {
    data.get(key).map(String::as_str).unwrap_or("")
}

pub fn trimmed(data: &FormData, key: &str) -> Value {
    Value::String(value(data, key).trim().to_string())
}

/// `null` when blank
pub fn optional(data: &FormData, key: &str) -> Value {
    match value(data, key).trim() {
        "" => Value::Null,
        v => Value::String(v.to_string()),
    }
}

/// Number when parseable, `null` otherwise
pub fn number(data: &FormData, key: &str) -> Value {
    value(data, key)
        .trim()
        .parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

pub fn form_data<const N: usize>(pairs: [(&str, String); N]) -> FormData {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Priority;

    #[test]
    fn test_mapped_options_use_backend_values() {
        let options = mapped_options::<Priority>();
        assert_eq!(options[0], SelectOption::new("low", "Low"));
        assert_eq!(options.len(), 4);
    }

    #[test]
    fn test_plain_options_lead_with_placeholder() {
        let options = plain_options("Select", &["Biomedical"]);
        assert_eq!(options[0].value, "");
        assert_eq!(options[1], SelectOption::new("Biomedical", "Biomedical"));
    }

    #[test]
    fn test_resolve_equipment_by_tag() {
        let equipment = vec![Equipment {
            id: "abc".to_string(),
            equipment_id: "EQ-1234".to_string(),
            ..Default::default()
        }];
        assert_eq!(resolve_equipment_id("EQ-1234", &equipment), "abc");
        assert_eq!(resolve_equipment_id("abc", &equipment), "abc");
        assert_eq!(resolve_equipment_id("zzz", &equipment), "zzz");
    }

    #[test]
    fn test_number_and_optional_values() {
        let data = form_data([("a", "2.5".to_string()), ("b", " ".to_string())]);
        assert_eq!(number(&data, "a"), serde_json::json!(2.5));
        assert_eq!(number(&data, "b"), Value::Null);
        assert_eq!(optional(&data, "b"), Value::Null);
        assert_eq!(optional(&data, "a"), Value::String("2.5".to_string()));
    }
}
