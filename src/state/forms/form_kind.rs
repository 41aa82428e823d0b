//! Which modal form is open, and what it edits

use super::field::FieldSpec;
use super::{equipment_form, maintenance_form, schedule_form, technician_form, user_form};
use crate::api::{ApiRequest, Resource};
use crate::state::{Equipment, MaintenanceRequest, Technician, User};
use crate::validation::{FieldRules, FormData};
use serde_json::Value;

/// Reference lists used to build select options and reconcile ids
#[derive(Debug, Clone, Copy)]
pub struct FormContext<'a> {
    pub equipment: &'a [Equipment],
    pub technicians: &'a [Technician],
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormKind {
    AddEquipment,
    EditEquipment(Equipment),
    AddTechnician,
    EditTechnician(Technician),
    AddUser,
    EditUser(User),
    AddMaintenanceRequest { equipment_id: Option<String> },
    EditMaintenanceRequest(MaintenanceRequest),
    ScheduleMaintenance { equipment_id: Option<String> },
}

impl FormKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::AddEquipment => "Add Equipment",
            Self::EditEquipment(_) => "Edit Equipment",
            Self::AddTechnician => "Add Technician",
            Self::EditTechnician(_) => "Edit Technician",
            Self::AddUser => "Add User",
            Self::EditUser(_) => "Edit User",
            Self::AddMaintenanceRequest { .. } => "New Maintenance Request",
            Self::EditMaintenanceRequest(_) => "Edit Maintenance Request",
            Self::ScheduleMaintenance { .. } => "Schedule Maintenance",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::ScheduleMaintenance { .. } => "Schedule",
            _ if self.is_edit() => "Save Changes",
            _ => "Create",
        }
    }

    pub fn is_edit(&self) -> bool {
        self.record_id().is_some()
    }

    fn record_id(&self) -> Option<&str> {
        match self {
            Self::EditEquipment(e) => Some(&e.id),
            Self::EditTechnician(t) => Some(&t.id),
            Self::EditUser(u) => Some(&u.id),
            Self::EditMaintenanceRequest(r) => Some(&r.id),
            _ => None,
        }
    }

    pub fn resource(&self) -> Resource {
        match self {
            Self::AddEquipment | Self::EditEquipment(_) => Resource::Equipment,
            Self::AddTechnician | Self::EditTechnician(_) => Resource::Technicians,
            Self::AddUser | Self::EditUser(_) => Resource::Users,
            Self::AddMaintenanceRequest { .. } | Self::EditMaintenanceRequest(_) => {
                Resource::MaintenanceRequests
            }
            Self::ScheduleMaintenance { .. } => Resource::ScheduledMaintenance,
        }
    }

    pub fn fields(&self, ctx: &FormContext<'_>) -> Vec<FieldSpec> {
        match self {
            Self::AddEquipment | Self::EditEquipment(_) => equipment_form::fields(),
            Self::AddTechnician => technician_form::fields(false),
            Self::EditTechnician(_) => technician_form::fields(true),
            Self::AddUser => user_form::fields(false),
            Self::EditUser(_) => user_form::fields(true),
            Self::AddMaintenanceRequest { .. } => maintenance_form::fields(false, ctx),
            Self::EditMaintenanceRequest(_) => maintenance_form::fields(true, ctx),
            Self::ScheduleMaintenance { .. } => schedule_form::fields(ctx),
        }
    }

    pub fn initial_data(&self, ctx: &FormContext<'_>) -> FormData {
        match self {
            Self::AddEquipment => equipment_form::initial_data(None),
            Self::EditEquipment(e) => equipment_form::initial_data(Some(e)),
            Self::AddTechnician => technician_form::initial_data(None),
            Self::EditTechnician(t) => technician_form::initial_data(Some(t)),
            Self::AddUser => user_form::initial_data(None),
            Self::EditUser(u) => user_form::initial_data(Some(u)),
            Self::AddMaintenanceRequest { equipment_id } => {
                maintenance_form::initial_data(None, equipment_id.as_deref(), ctx)
            }
            Self::EditMaintenanceRequest(r) => maintenance_form::initial_data(Some(r), None, ctx),
            Self::ScheduleMaintenance { equipment_id } => {
                schedule_form::initial_data(equipment_id.as_deref(), ctx)
            }
        }
    }

    pub fn rules(&self, data: &FormData) -> Vec<FieldRules> {
        match self {
            Self::AddEquipment | Self::EditEquipment(_) => equipment_form::rules(),
            Self::AddTechnician => technician_form::rules(false),
            Self::EditTechnician(_) => technician_form::rules(true),
            Self::AddUser => user_form::rules(false, data),
            Self::EditUser(_) => user_form::rules(true, data),
            Self::AddMaintenanceRequest { .. } => maintenance_form::rules(false),
            Self::EditMaintenanceRequest(_) => maintenance_form::rules(true),
            Self::ScheduleMaintenance { .. } => schedule_form::rules(),
        }
    }

    pub fn payload(&self, data: &FormData) -> Value {
        match self {
            Self::AddEquipment | Self::EditEquipment(_) => equipment_form::payload(data),
            Self::AddTechnician | Self::EditTechnician(_) => technician_form::payload(data),
            Self::AddUser => user_form::payload(false, data),
            Self::EditUser(_) => user_form::payload(true, data),
            Self::AddMaintenanceRequest { .. } => maintenance_form::payload(false, data),
            Self::EditMaintenanceRequest(_) => maintenance_form::payload(true, data),
            Self::ScheduleMaintenance { .. } => schedule_form::payload(data),
        }
    }

    /// POST for new records, PUT to `/{resource}/{id}` for edits
    pub fn request(&self, data: &FormData) -> ApiRequest {
        let body = self.payload(data);
        match self.record_id() {
            Some(id) => ApiRequest::update(self.resource(), id, body),
            None => ApiRequest::create(self.resource(), body),
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            Self::AddEquipment => "Equipment added",
            Self::EditEquipment(_) => "Equipment updated",
            Self::AddTechnician => "Technician added",
            Self::EditTechnician(_) => "Technician updated",
            Self::AddUser => "User created",
            Self::EditUser(_) => "User updated",
            Self::AddMaintenanceRequest { .. } => "Maintenance request created",
            Self::EditMaintenanceRequest(_) => "Maintenance request updated",
            Self::ScheduleMaintenance { .. } => "Maintenance scheduled",
        }
    }
}
