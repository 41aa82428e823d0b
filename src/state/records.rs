//! Canonical domain records and the adapters that build them from backend payloads
//!
//! The backend is inconsistent about field naming (`name` vs
//! `equipment_name` vs `equipmentName`, `_id` vs `id`) and about how it
//! embeds references (plain id string or populated object). The
//! `from_api` constructors are the only place those variants are handled.

use super::status::{EquipmentStatus, Mapped, Priority, RequestStatus, TechnicianStatus, UserRole};
use crate::validation::validators::parse_date;
use serde_json::Value;

/// First non-empty string (or number, rendered) among `keys`
fn pick(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match value.get(*key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn pick_or_empty(value: &Value, keys: &[&str]) -> String {
    pick(value, keys).unwrap_or_default()
}

/// Like [`pick`], normalised to `YYYY-MM-DD`
fn pick_date(value: &Value, keys: &[&str]) -> Option<String> {
    pick(value, keys).and_then(|s| normalize_date(&s))
}

fn pick_number(value: &Value, keys: &[&str]) -> Option<f64> {
    pick(value, keys).and_then(|s| s.parse::<f64>().ok())
}

fn record_id(value: &Value) -> Option<String> {
    pick(value, &["_id", "id"])
}

/// ISO date or timestamp to the `YYYY-MM-DD` form date inputs use
pub fn normalize_date(value: &str) -> Option<String> {
    parse_date(value).map(|d| d.format("%Y-%m-%d").to_string())
}

/// A reference to another record, either a bare id or a populated object
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntityRef {
    pub id: String,
    pub name: Option<String>,
}

fn pick_ref(value: &Value, keys: &[&str], name_keys: &[&str]) -> Option<EntityRef> {
    keys.iter().find_map(|key| match value.get(*key)? {
        Value::String(s) if !s.trim().is_empty() => Some(EntityRef {
            id: s.trim().to_string(),
            name: None,
        }),
        obj @ Value::Object(_) => record_id(obj).map(|id| EntityRef {
            id,
            name: pick(obj, name_keys),
        }),
        _ => None,
    })
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Equipment {
    pub id: String,
    /// Human-facing asset tag (`EQ-####`)
    pub equipment_id: String,
    pub name: String,
    pub category: String,
    pub manufacturer: String,
    pub model_number: String,
    pub serial_number: String,
    pub location: String,
    pub status: EquipmentStatus,
    pub purchase_date: Option<String>,
    pub last_maintenance: Option<String>,
    pub next_maintenance: Option<String>,
}

impl Equipment {
    pub fn from_api(value: &Value) -> Option<Self> {
        Some(Self {
            id: record_id(value)?,
            equipment_id: pick_or_empty(value, &["equipment_id", "equipmentId", "assetTag"]),
            name: pick_or_empty(value, &["name", "equipment_name", "equipmentName"]),
            category: pick_or_empty(value, &["category", "type", "equipment_type", "equipmentType"]),
            manufacturer: pick_or_empty(value, &["manufacturer"]),
            model_number: pick_or_empty(value, &["model_number", "modelNumber", "model"]),
            serial_number: pick_or_empty(value, &["serial_number", "serialNumber"]),
            location: pick_or_empty(value, &["location", "department"]),
            status: pick(value, &["status"])
                .and_then(|s| EquipmentStatus::parse(&s))
                .unwrap_or_default(),
            purchase_date: pick_date(value, &["purchase_date", "purchaseDate"]),
            last_maintenance: pick_date(
                value,
                &["last_maintenance", "lastMaintenance", "last_maintenance_date", "lastMaintenanceDate"],
            ),
            next_maintenance: pick_date(
                value,
                &["next_maintenance", "nextMaintenance", "next_maintenance_date", "nextMaintenanceDate"],
            ),
        })
    }

    /// Label used in select options and list rows
    pub fn display_name(&self) -> String {
        if self.equipment_id.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.equipment_id)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Technician {
    pub id: String,
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub specialization: String,
    pub experience_years: Option<f64>,
    pub hire_date: Option<String>,
    pub status: TechnicianStatus,
}

impl Technician {
    pub fn from_api(value: &Value) -> Option<Self> {
        let name = pick(value, &["name", "full_name", "fullName"]).unwrap_or_else(|| {
            let first = pick_or_empty(value, &["first_name", "firstName"]);
            let last = pick_or_empty(value, &["last_name", "lastName"]);
            format!("{first} {last}").trim().to_string()
        });
        Some(Self {
            id: record_id(value)?,
            employee_id: pick_or_empty(value, &["employee_id", "employeeId"]),
            name,
            email: pick_or_empty(value, &["email"]),
            phone: pick_or_empty(value, &["phone", "phone_number", "phoneNumber"]),
            specialization: pick_or_empty(value, &["specialization", "specialty"]),
            experience_years: pick_number(
                value,
                &["experience_years", "experienceYears", "experience"],
            ),
            hire_date: pick_date(value, &["hire_date", "hireDate"]),
            status: pick(value, &["status", "availability"])
                .and_then(|s| TechnicianStatus::parse(&s))
                .unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct User {
    pub id: String,
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: UserRole,
    pub department: String,
}

impl User {
    pub fn from_api(value: &Value) -> Option<Self> {
        Some(Self {
            id: record_id(value)?,
            employee_id: pick_or_empty(value, &["employee_id", "employeeId"]),
            name: pick_or_empty(value, &["name", "full_name", "fullName", "username"]),
            email: pick_or_empty(value, &["email"]),
            phone: pick_or_empty(value, &["phone", "phone_number", "phoneNumber"]),
            role: pick(value, &["role"])
                .and_then(|s| UserRole::parse(&s))
                .unwrap_or_default(),
            department: pick_or_empty(value, &["department"]),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MaintenanceRequest {
    pub id: String,
    pub title: String,
    pub description: String,
    pub equipment: Option<EntityRef>,
    pub technician: Option<EntityRef>,
    pub priority: Priority,
    pub status: RequestStatus,
    pub scheduled_date: Option<String>,
    pub created_at: Option<String>,
}

const EQUIPMENT_NAME_KEYS: &[&str] = &["name", "equipment_name", "equipmentName"];
const PERSON_NAME_KEYS: &[&str] = &["name", "full_name", "fullName"];

impl MaintenanceRequest {
    pub fn from_api(value: &Value) -> Option<Self> {
        let mut equipment = pick_ref(
            value,
            &["equipment", "equipment_id", "equipmentId"],
            EQUIPMENT_NAME_KEYS,
        );
        if let Some(eq) = equipment.as_mut() {
            if eq.name.is_none() {
                eq.name = pick(value, &["equipment_name", "equipmentName"]);
            }
        }
        Some(Self {
            id: record_id(value)?,
            title: pick_or_empty(value, &["title", "issue", "subject"]),
            description: pick_or_empty(value, &["description", "details"]),
            equipment,
            technician: pick_ref(
                value,
                &[
                    "assigned_technician",
                    "assignedTechnician",
                    "assigned_to",
                    "assignedTo",
                    "technician",
                ],
                PERSON_NAME_KEYS,
            ),
            priority: pick(value, &["priority"])
                .and_then(|s| Priority::parse(&s))
                .unwrap_or_default(),
            status: pick(value, &["status"])
                .and_then(|s| RequestStatus::parse(&s))
                .unwrap_or_default(),
            scheduled_date: pick_date(value, &["scheduled_date", "scheduledDate", "due_date", "dueDate"]),
            created_at: pick_date(value, &["created_at", "createdAt"]),
        })
    }

    /// Equipment name, falling back to whatever the known equipment list says
    pub fn equipment_label(&self, known: &[Equipment]) -> String {
        match &self.equipment {
            None => "-".to_string(),
            Some(r) => r
                .name
                .clone()
                .or_else(|| known.iter().find(|e| e.id == r.id).map(|e| e.name.clone()))
                .unwrap_or_else(|| r.id.clone()),
        }
    }

    pub fn technician_label(&self, known: &[Technician]) -> String {
        match &self.technician {
            None => "Unassigned".to_string(),
            Some(r) => r
                .name
                .clone()
                .or_else(|| known.iter().find(|t| t.id == r.id).map(|t| t.name.clone()))
                .unwrap_or_else(|| r.id.clone()),
        }
    }
}

/// Map a list payload, dropping entries without an id
pub fn from_api_list<T>(value: &Value, convert: fn(&Value) -> Option<T>) -> Vec<T> {
    value
        .as_array()
        .map(|items| items.iter().filter_map(convert).collect())
        .unwrap_or_default()
}
