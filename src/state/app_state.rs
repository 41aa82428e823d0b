//! Application state definitions

use super::forms::{FormContext, FormController};
use super::records::{Equipment, MaintenanceRequest, Technician, User};
use super::status::{EquipmentStatus, Mapped, Priority, TechnicianStatus};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long a status bar message stays visible
pub const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(4);

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Equipment,
    Technicians,
    Maintenance,
    Users,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Dashboard,
        View::Equipment,
        View::Technicians,
        View::Maintenance,
        View::Users,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Equipment => "Equipment",
            Self::Technicians => "Technicians",
            Self::Maintenance => "Maintenance",
            Self::Users => "Users",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|v| v == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Tracks whether any modal is showing so the layout can hide the sidebar.
///
/// Counted rather than boolean: an error dialog can stack on top of a form
/// modal, and closing one must not reveal the sidebar under the other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalVisibility {
    open_count: usize,
}

impl ModalVisibility {
    pub fn set_modal_open(&mut self, open: bool) {
        if open {
            self.open_count += 1;
        } else {
            self.open_count = self.open_count.saturating_sub(1);
        }
    }

    pub fn is_modal_open(&self) -> bool {
        self.open_count > 0
    }
}

/// One queued error dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorNotice {
    pub title: String,
    pub messages: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub shown_at: Instant,
}

/// Counts shown on the dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    pub equipment_by_status: Vec<(EquipmentStatus, usize)>,
    /// Highest priority first
    pub open_requests_by_priority: Vec<(Priority, usize)>,
    pub available_technicians: usize,
    pub total_technicians: usize,
    pub total_users: usize,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,

    // Data
    pub equipment: Vec<Equipment>,
    pub technicians: Vec<Technician>,
    pub maintenance_requests: Vec<MaintenanceRequest>,
    pub users: Vec<User>,

    // Selection
    pub selected_index: usize,

    // Filters
    pub show_retired_equipment: bool,

    // UI state
    pub api_connected: bool,
    pub loading: bool,
    pub modal: Option<FormController>,
    pub modal_visibility: ModalVisibility,
    errors: VecDeque<ErrorNotice>,
    status: Option<StatusMessage>,
}

impl AppState {
    /// Empty state with the saved retired-equipment preference applied
    pub fn with_retired_equipment(show: bool) -> Self {
        Self {
            show_retired_equipment: show,
            ..Default::default()
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Reset selection
    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
    }

    /// Keep the selection inside the current list after a reload
    pub fn clamp_selection(&mut self) {
        let len = self.current_list_len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    pub fn switch_view(&mut self, view: View) {
        if self.current_view != view {
            self.current_view = view;
            self.reset_selection();
        }
    }

    pub fn toggle_retired_equipment(&mut self) {
        self.show_retired_equipment = !self.show_retired_equipment;
        self.clamp_selection();
    }

    /// Equipment rows honoring the retired filter
    pub fn visible_equipment(&self) -> Vec<&Equipment> {
        self.equipment
            .iter()
            .filter(|e| self.show_retired_equipment || e.status != EquipmentStatus::Retired)
            .collect()
    }

    /// Open requests first, then by priority (highest first)
    pub fn sorted_requests(&self) -> Vec<&MaintenanceRequest> {
        let mut requests: Vec<_> = self.maintenance_requests.iter().collect();
        requests.sort_by(|a, b| {
            b.status
                .is_open()
                .cmp(&a.status.is_open())
                .then_with(|| b.priority.cmp(&a.priority))
        });
        requests
    }

    pub fn current_list_len(&self) -> usize {
        match self.current_view {
            View::Dashboard => 0,
            View::Equipment => self.visible_equipment().len(),
            View::Technicians => self.technicians.len(),
            View::Maintenance => self.maintenance_requests.len(),
            View::Users => self.users.len(),
        }
    }

    pub fn selected_equipment(&self) -> Option<&Equipment> {
        self.visible_equipment().get(self.selected_index).copied()
    }

    pub fn selected_technician(&self) -> Option<&Technician> {
        self.technicians.get(self.selected_index)
    }

    pub fn selected_request(&self) -> Option<&MaintenanceRequest> {
        self.sorted_requests().get(self.selected_index).copied()
    }

    pub fn selected_user(&self) -> Option<&User> {
        self.users.get(self.selected_index)
    }

    pub fn form_context(&self) -> FormContext<'_> {
        FormContext {
            equipment: &self.equipment,
            technicians: &self.technicians,
        }
    }

    pub fn dashboard_summary(&self) -> DashboardSummary {
        let equipment_by_status = EquipmentStatus::all()
            .into_iter()
            .map(|s| (s, self.equipment.iter().filter(|e| e.status == s).count()))
            .collect();
        let open_requests_by_priority = Priority::all()
            .into_iter()
            .rev()
            .map(|p| {
                let count = self
                    .maintenance_requests
                    .iter()
                    .filter(|r| r.priority == p && r.status.is_open())
                    .count();
                (p, count)
            })
            .collect();
        DashboardSummary {
            equipment_by_status,
            open_requests_by_priority,
            available_technicians: self
                .technicians
                .iter()
                .filter(|t| t.status == TechnicianStatus::Available)
                .count(),
            total_technicians: self.technicians.len(),
            total_users: self.users.len(),
        }
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_visibility.is_modal_open()
    }

    pub fn push_error(&mut self, title: impl Into<String>, messages: Vec<String>) {
        self.errors.push_back(ErrorNotice {
            title: title.into(),
            messages,
        });
        self.modal_visibility.set_modal_open(true);
    }

    pub fn current_error(&self) -> Option<&ErrorNotice> {
        self.errors.front()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn dismiss_error(&mut self) {
        if self.errors.pop_front().is_some() {
            self.modal_visibility.set_modal_open(false);
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            shown_at: Instant::now(),
        });
    }

    /// The status message, if it has not expired
    pub fn status_text(&self) -> Option<&str> {
        self.status
            .as_ref()
            .filter(|s| s.shown_at.elapsed() < STATUS_MESSAGE_TTL)
            .map(|s| s.text.as_str())
    }
}
