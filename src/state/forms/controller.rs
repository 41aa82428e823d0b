//! Generic modal form controller
//!
//! Owns the form data, per-field errors and touched flags, and the submit
//! lifecycle for whichever [`FormKind`] is open:
//!
//! ```text
//! Pristine -> Editing -> Submitting -> Succeeded
//!                ^            |
//!                +-- Error <--+
//! ```
//!
//! Errors are only shown for touched fields. Typing into a touched field
//! that is currently in error re-validates it; leaving a field (blur)
//! always validates it. Submit validates everything and refuses to produce
//! a request while any rule fails.

use super::field::{FieldKind, FieldSpec, FieldVisualState};
use super::form_kind::{FormContext, FormKind};
use crate::api::{ApiError, ApiRequest};
use crate::validation::{self, calculate_password_strength, FormData, PasswordStrength, Rule};
use serde_json::Value;
use std::collections::BTreeMap;

/// Trait for common form focus operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalPhase {
    #[default]
    Pristine,
    Editing,
    Submitting,
    Error,
    Succeeded,
}

/// Why `begin_submit` did not produce a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    AlreadySubmitting,
    /// Number of fields failing validation
    Invalid(usize),
}

#[derive(Debug, Clone)]
pub struct FormController {
    kind: FormKind,
    fields: Vec<FieldSpec>,
    data: FormData,
    errors: BTreeMap<String, Option<String>>,
    touched: BTreeMap<String, bool>,
    phase: ModalPhase,
    banner: Vec<String>,
    active: usize,
    password_visible: bool,
    strength: PasswordStrength,
}

impl FormController {
    pub fn open(kind: FormKind, ctx: &FormContext<'_>) -> Self {
        let fields = kind.fields(ctx);
        let data = kind.initial_data(ctx);
        let active = fields.iter().position(|f| !f.read_only).unwrap_or(0);
        let strength = fields
            .iter()
            .find(|f| f.shows_strength_meter())
            .map(|f| calculate_password_strength(data.get(f.name).map(String::as_str).unwrap_or("")))
            .unwrap_or_default();
        tracing::debug!(form = kind.title(), "modal opened");
        Self {
            kind,
            fields,
            data,
            errors: BTreeMap::new(),
            touched: BTreeMap::new(),
            phase: ModalPhase::Pristine,
            banner: Vec::new(),
            active,
            password_visible: false,
            strength,
        }
    }

    pub fn kind(&self) -> &FormKind {
        &self.kind
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == ModalPhase::Submitting
    }

    pub fn banner(&self) -> &[String] {
        &self.banner
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn password_strength(&self) -> &PasswordStrength {
        &self.strength
    }

    pub fn value(&self, field: &str) -> &str {
        self.data.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.get(field).copied().unwrap_or(false)
    }

    /// Current error regardless of touched state
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).and_then(|e| e.as_deref())
    }

    /// Error as the user should see it: only once the field is touched
    pub fn visible_error(&self, field: &str) -> Option<&str> {
        if self.is_touched(field) {
            self.error(field)
        } else {
            None
        }
    }

    pub fn visual_state(&self, field: &str) -> FieldVisualState {
        FieldVisualState::of(self.is_touched(field), self.error(field), self.value(field))
    }

    pub fn active_spec(&self) -> Option<&FieldSpec> {
        self.fields.get(self.active)
    }

    /// Run this field's rules against the current data and record the result
    pub fn validate_field(&mut self, field: &str) -> Option<String> {
        let error = self
            .kind
            .rules(&self.data)
            .into_iter()
            .find(|r| r.field == field)
            .and_then(|r| r.check(&self.data));
        self.errors.insert(field.to_string(), error.clone());
        error
    }

    pub fn on_change(&mut self, field: &str, value: String) {
        if self.is_submitting() {
            return;
        }
        self.data.insert(field.to_string(), value);
        if self.phase == ModalPhase::Pristine {
            self.phase = ModalPhase::Editing;
        }

        if self.is_touched(field) && self.error(field).is_some() {
            self.validate_field(field);
        }

        // Fields that compare against this one (password confirmation)
        let dependents: Vec<&'static str> = self
            .kind
            .rules(&self.data)
            .into_iter()
            .filter(|r| {
                r.rules
                    .iter()
                    .any(|rule| matches!(rule, Rule::PasswordConfirm { other } if *other == field))
            })
            .map(|r| r.field)
            .collect();
        for dependent in dependents {
            if self.is_touched(dependent) {
                self.validate_field(dependent);
            }
        }

        if self
            .fields
            .iter()
            .any(|f| f.name == field && f.shows_strength_meter())
        {
            self.strength = calculate_password_strength(self.value(field));
        }
    }

    pub fn on_blur(&mut self, field: &str) {
        self.touched.insert(field.to_string(), true);
        self.validate_field(field);
    }

    /// Validate every relevant field and mark all fields touched.
    /// Returns the number of failing fields.
    pub fn validate_form(&mut self) -> usize {
        let rules = self.kind.rules(&self.data);
        let failures = validation::validate_form(&self.data, &rules);
        for spec in &self.fields {
            self.touched.insert(spec.name.to_string(), true);
            self.errors
                .insert(spec.name.to_string(), failures.get(spec.name).cloned());
        }
        failures.len()
    }

    /// Start a submission. On success the controller is `Submitting` and the
    /// returned request should be sent; otherwise nothing is sent.
    pub fn begin_submit(&mut self) -> Result<ApiRequest, SubmitBlocked> {
        if self.is_submitting() {
            return Err(SubmitBlocked::AlreadySubmitting);
        }
        let invalid = self.validate_form();
        if invalid > 0 {
            if let Some(first) = self.fields.iter().position(|f| self.error(f.name).is_some()) {
                self.active = first;
            }
            tracing::debug!(form = self.kind.title(), invalid, "submit blocked by validation");
            return Err(SubmitBlocked::Invalid(invalid));
        }
        self.phase = ModalPhase::Submitting;
        self.banner.clear();
        Ok(self.kind.request(&self.data))
    }

    /// Apply the outcome of a submission. Returns the saved record on success.
    pub fn finish_submit(&mut self, result: Result<Value, ApiError>) -> Option<Value> {
        if !self.is_submitting() {
            return None;
        }
        match result {
            Ok(record) => {
                self.phase = ModalPhase::Succeeded;
                Some(record)
            }
            Err(e) if e.is_cancelled() => {
                self.phase = ModalPhase::Editing;
                None
            }
            Err(e) => {
                tracing::warn!(form = self.kind.title(), error = %e, "submit failed");
                self.phase = ModalPhase::Error;
                self.banner = e.user_messages();
                None
            }
        }
    }

    /// Returns false when there was no banner to dismiss
    pub fn dismiss_banner(&mut self) -> bool {
        if self.banner.is_empty() {
            return false;
        }
        self.banner.clear();
        if self.phase == ModalPhase::Error {
            self.phase = ModalPhase::Editing;
        }
        true
    }

    pub fn toggle_password_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    fn active_name(&self) -> Option<&'static str> {
        self.active_spec().map(|f| f.name)
    }

    pub fn input_char(&mut self, c: char) {
        let Some(spec) = self.active_spec() else {
            return;
        };
        let name = spec.name;
        let current = self.value(name);
        if !spec.accepts_char(c, current.chars().count()) {
            return;
        }
        let mut value = current.to_string();
        value.push(c);
        self.on_change(name, value);
    }

    pub fn backspace(&mut self) {
        let Some(spec) = self.active_spec() else {
            return;
        };
        if spec.read_only || matches!(spec.kind, FieldKind::Select(_)) {
            return;
        }
        let name = spec.name;
        let mut value = self.value(name).to_string();
        if value.pop().is_some() {
            self.on_change(name, value);
        }
    }

    pub fn insert_newline(&mut self) {
        if self.active_spec().is_some_and(FieldSpec::is_multiline) {
            self.input_char('\n');
        }
    }

    /// Move a select field to the next or previous option
    pub fn cycle_option(&mut self, forward: bool) {
        let Some(spec) = self.active_spec() else {
            return;
        };
        let options = spec.options();
        if spec.read_only || options.is_empty() {
            return;
        }
        let current = self.value(spec.name);
        let len = options.len();
        let next = match options.iter().position(|o| o.value == current) {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None => 0,
        };
        let name = spec.name;
        let value = options[next].value.clone();
        self.on_change(name, value);
    }
}

impl Form for FormController {
    fn field_count(&self) -> usize {
        self.fields.len()
    }

    fn active_field(&self) -> usize {
        self.active
    }

    /// Moving focus away from a field counts as a blur
    fn set_active_field(&mut self, index: usize) {
        if index == self.active || index >= self.fields.len() {
            return;
        }
        if let Some(name) = self.active_name() {
            self.on_blur(name);
        }
        self.active = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiMethod;
    use crate::state::{Technician, User, UserRole};
    use crate::validation::Strength;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn ctx() -> FormContext<'static> {
        FormContext {
            equipment: &[],
            technicians: &[],
        }
    }

    fn focus(form: &mut FormController, field: &str) {
        let index = form
            .fields()
            .iter()
            .position(|f| f.name == field)
            .unwrap();
        form.active = index;
    }

    fn type_text(form: &mut FormController, field: &str, text: &str) {
        focus(form, field);
        for c in text.chars() {
            form.input_char(c);
        }
    }

    fn fill_valid_equipment(form: &mut FormController) {
        form.on_change("name", "MRI Scanner".to_string());
        form.on_change("category", "Imaging".to_string());
        form.on_change("manufacturer", "Siemens".to_string());
        form.on_change("model_number", "MX-500".to_string());
        form.on_change("serial_number", "SN-2024-0001".to_string());
        form.on_change("location", "Radiology".to_string());
        form.on_change("purchase_date", "2020-01-15".to_string());
    }

    #[test]
    fn test_opens_pristine_on_first_editable_field() {
        let form = FormController::open(FormKind::AddEquipment, &ctx());
        assert_eq!(form.phase(), ModalPhase::Pristine);
        assert_eq!(form.active_spec().map(|f| f.name), Some("name"));
        assert_eq!(form.visual_state("name"), FieldVisualState::Neutral);
    }

    #[test]
    fn test_blur_shows_required_error() {
        let mut form = FormController::open(FormKind::AddEquipment, &ctx());
        form.on_blur("name");
        assert_eq!(form.visible_error("name"), Some("Equipment name is required"));
        assert_eq!(form.visual_state("name"), FieldVisualState::Invalid);
    }

    #[test]
    fn test_change_revalidates_touched_erroring_field() {
        let mut form = FormController::open(FormKind::AddEquipment, &ctx());
        form.on_blur("name");
        form.on_change("name", "MRI Scanner".to_string());
        assert_eq!(form.visible_error("name"), None);
        assert_eq!(form.visual_state("name"), FieldVisualState::Valid);
        assert_eq!(form.phase(), ModalPhase::Editing);
    }

    #[test]
    fn test_change_does_not_validate_untouched_field() {
        let mut form = FormController::open(FormKind::AddEquipment, &ctx());
        form.on_change("name", "M".to_string());
        assert_eq!(form.error("name"), None);
        form.on_blur("name");
        assert_eq!(
            form.visible_error("name"),
            Some("Equipment name must be at least 2 characters")
        );
    }

    #[test]
    fn test_tab_blurs_previous_field() {
        let mut form = FormController::open(FormKind::AddEquipment, &ctx());
        form.next_field();
        assert!(form.is_touched("name"));
        assert_eq!(form.visible_error("name"), Some("Equipment name is required"));
        assert!(!form.is_touched("category"));
    }

    #[test]
    fn test_submit_blocked_until_location_filled() {
        let mut form = FormController::open(FormKind::AddEquipment, &ctx());
        fill_valid_equipment(&mut form);
        form.on_change("location", String::new());

        assert_eq!(form.begin_submit(), Err(SubmitBlocked::Invalid(1)));
        assert_eq!(form.visible_error("location"), Some("Location is required"));
        assert_eq!(form.active_spec().map(|f| f.name), Some("location"));
        assert_eq!(form.phase(), ModalPhase::Editing);

        form.on_change("location", "Radiology".to_string());
        let request = form.begin_submit().unwrap();
        assert_eq!(request.method, ApiMethod::Post);
        assert_eq!(request.body["location"], "Radiology");
        assert_eq!(form.phase(), ModalPhase::Submitting);
    }

    #[test]
    fn test_second_submit_rejected_while_in_flight() {
        let mut form = FormController::open(FormKind::AddEquipment, &ctx());
        fill_valid_equipment(&mut form);
        assert!(form.begin_submit().is_ok());
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::AlreadySubmitting));
    }

    #[test]
    fn test_input_ignored_while_submitting() {
        let mut form = FormController::open(FormKind::AddEquipment, &ctx());
        fill_valid_equipment(&mut form);
        form.begin_submit().unwrap();
        type_text(&mut form, "name", "X");
        assert_eq!(form.value("name"), "MRI Scanner");
    }

    #[test]
    fn test_server_error_shows_banner_and_stays_editable() {
        let mut form = FormController::open(FormKind::AddEquipment, &ctx());
        fill_valid_equipment(&mut form);
        form.begin_submit().unwrap();

        let saved = form.finish_submit(Err(ApiError::Server {
            status: 400,
            message: "Validation failed".to_string(),
            details: vec!["Serial number already exists".to_string()],
        }));
        assert_eq!(saved, None);
        assert_eq!(form.phase(), ModalPhase::Error);
        assert_eq!(
            form.banner(),
            ["Validation failed".to_string(), "Serial number already exists".to_string()]
        );

        form.on_change("serial_number", "SN-2024-0002".to_string());
        assert_eq!(form.value("serial_number"), "SN-2024-0002");
        assert!(form.dismiss_banner());
        assert_eq!(form.phase(), ModalPhase::Editing);
        assert!(!form.dismiss_banner());
    }

    #[test]
    fn test_success_returns_record() {
        let mut form = FormController::open(FormKind::AddEquipment, &ctx());
        fill_valid_equipment(&mut form);
        form.begin_submit().unwrap();
        let saved = form.finish_submit(Ok(json!({"_id": "e1"})));
        assert_eq!(saved, Some(json!({"_id": "e1"})));
        assert_eq!(form.phase(), ModalPhase::Succeeded);
    }

    #[test]
    fn test_cancelled_submit_returns_to_editing_silently() {
        let mut form = FormController::open(FormKind::AddEquipment, &ctx());
        fill_valid_equipment(&mut form);
        form.begin_submit().unwrap();
        assert_eq!(form.finish_submit(Err(ApiError::Cancelled)), None);
        assert_eq!(form.phase(), ModalPhase::Editing);
        assert!(form.banner().is_empty());
    }

    #[test]
    fn test_stale_result_ignored_when_not_submitting() {
        let mut form = FormController::open(FormKind::AddEquipment, &ctx());
        assert_eq!(form.finish_submit(Ok(json!({}))), None);
        assert_eq!(form.phase(), ModalPhase::Pristine);
    }

    #[test]
    fn test_password_strength_tracks_keystrokes() {
        let mut form = FormController::open(FormKind::AddUser, &ctx());
        assert_eq!(form.password_strength().strength, Strength::None);
        type_text(&mut form, "password", "Abcdefgh1!");
        assert_eq!(form.password_strength().score, 90);
        assert_eq!(form.password_strength().strength, Strength::Strong);
    }

    #[test]
    fn test_confirm_revalidates_when_password_changes() {
        let mut form = FormController::open(FormKind::AddUser, &ctx());
        form.on_change("password", "Str0ngPass".to_string());
        form.on_change("confirm_password", "Str0ngPass".to_string());
        form.on_blur("confirm_password");
        assert_eq!(form.visible_error("confirm_password"), None);

        form.on_change("password", "Str0ngPass2".to_string());
        assert_eq!(
            form.visible_error("confirm_password"),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn test_edit_user_omits_blank_password() {
        let user = User {
            id: "u1".to_string(),
            employee_id: "EMP1700000000000042".to_string(),
            name: "Sam Lee".to_string(),
            email: "sam@clinic.org".to_string(),
            role: UserRole::Manager,
            ..Default::default()
        };
        let mut form = FormController::open(FormKind::EditUser(user), &ctx());
        let request = form.begin_submit().unwrap();
        assert_eq!(request.method, ApiMethod::Put);
        assert_eq!(request.path(), "users/u1");
        assert!(request.body.get("password").is_none());
        assert_eq!(request.body["role"], "manager");
    }

    #[test]
    fn test_edit_technician_with_legacy_employee_id_saves() {
        let tech = Technician {
            id: "t1".to_string(),
            employee_id: "EMP1700000000000042".to_string(),
            name: "Ana Ruiz".to_string(),
            email: "ana@clinic.org".to_string(),
            phone: "555-123-4567".to_string(),
            specialization: "Biomedical".to_string(),
            experience_years: Some(4.0),
            hire_date: Some("2020-03-01".to_string()),
            ..Default::default()
        };
        let mut form = FormController::open(FormKind::EditTechnician(tech), &ctx());
        let request = form.begin_submit().unwrap();
        assert_eq!(form.error("employee_id"), None);
        assert_eq!(request.method, ApiMethod::Put);
        assert_eq!(request.path(), "technicians/t1");
        assert_eq!(request.body["employee_id"], "EMP1700000000000042");
    }

    #[test]
    fn test_cycle_option_wraps() {
        let mut form = FormController::open(FormKind::AddEquipment, &ctx());
        focus(&mut form, "status");
        form.cycle_option(false);
        assert_eq!(form.value("status"), "retired");
        form.cycle_option(true);
        assert_eq!(form.value("status"), "operational");
    }

    #[test]
    fn test_read_only_field_rejects_input() {
        let mut form = FormController::open(FormKind::AddEquipment, &ctx());
        let tag = form.value("equipment_id").to_string();
        type_text(&mut form, "equipment_id", "9");
        form.backspace();
        assert_eq!(form.value("equipment_id"), tag);
    }

    #[test]
    fn test_newline_only_in_textarea() {
        let mut form = FormController::open(
            FormKind::AddMaintenanceRequest { equipment_id: None },
            &ctx(),
        );
        focus(&mut form, "title");
        form.insert_newline();
        assert_eq!(form.value("title"), "");
        focus(&mut form, "description");
        form.insert_newline();
        assert_eq!(form.value("description"), "\n");
    }

    #[test]
    fn test_password_visibility_toggle() {
        let mut form = FormController::open(FormKind::AddUser, &ctx());
        assert!(!form.password_visible());
        form.toggle_password_visibility();
        assert!(form.password_visible());
    }
}
