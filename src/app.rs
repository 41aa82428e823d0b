//! Application state and core logic

use crate::api::{ApiError, ClinicApi};
use crate::config::TuiConfig;
use crate::platform;
use crate::state::{AppState, FieldKind, Form, FormController, FormKind, SubmitBlocked, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Results reported back to the UI loop by background tasks
#[derive(Debug)]
pub enum AppEvent {
    SubmitFinished {
        ticket: u64,
        result: Result<Value, ApiError>,
    },
}

/// The one submission that may be in flight
#[derive(Debug)]
struct PendingSubmit {
    ticket: u64,
    cancel: CancellationToken,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Backend client
    api: Arc<dyn ClinicApi>,
    config: TuiConfig,
    /// Where preference changes are written; `None` disables persistence
    config_path: Option<PathBuf>,
    events_tx: mpsc::UnboundedSender<AppEvent>,
    events_rx: mpsc::UnboundedReceiver<AppEvent>,
    pending: Option<PendingSubmit>,
    next_ticket: u64,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(api: Arc<dyn ClinicApi>, config: TuiConfig, config_path: Option<PathBuf>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let state =
            AppState::with_retired_equipment(config.show_retired_equipment.unwrap_or(false));
        Self {
            state,
            api,
            config,
            config_path,
            events_tx,
            events_rx,
            pending: None,
            next_ticket: 0,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Load every list. Each failure is queued as its own error dialog.
    pub async fn load_all(&mut self) {
        self.state.loading = true;
        let api = Arc::clone(&self.api);
        let (equipment, technicians, requests, users) = tokio::join!(
            api.list_equipment(),
            api.list_technicians(),
            api.list_maintenance_requests(),
            api.list_users(),
        );
        self.state.loading = false;

        let mut failures = Vec::new();
        match equipment {
            Ok(list) => {
                tracing::info!(count = list.len(), "loaded equipment");
                self.state.equipment = list;
            }
            Err(e) => failures.push(("equipment", e)),
        }
        match technicians {
            Ok(list) => {
                tracing::info!(count = list.len(), "loaded technicians");
                self.state.technicians = list;
            }
            Err(e) => failures.push(("technicians", e)),
        }
        match requests {
            Ok(list) => {
                tracing::info!(count = list.len(), "loaded maintenance requests");
                self.state.maintenance_requests = list;
            }
            Err(e) => failures.push(("maintenance requests", e)),
        }
        match users {
            Ok(list) => {
                tracing::info!(count = list.len(), "loaded users");
                self.state.users = list;
            }
            Err(e) => failures.push(("users", e)),
        }

        // Disconnected only when nothing could be reached at all
        self.state.api_connected = failures.len() < 4
            || !failures
                .iter()
                .all(|(_, e)| matches!(e, ApiError::Network(_)));
        for (what, error) in failures {
            self.report_load_error(what, &error);
        }
        self.state.clamp_selection();
    }

    fn report_load_error(&mut self, what: &str, error: &ApiError) {
        tracing::warn!(error = %error, "failed to load {what}");
        self.state
            .push_error(format!("Failed to load {what}"), error.user_messages());
    }

    /// Open a modal form unless one is already showing
    pub fn open_modal(&mut self, kind: FormKind) {
        if self.state.modal.is_some() {
            return;
        }
        let form = FormController::open(kind, &self.state.form_context());
        self.state.modal = Some(form);
        self.state.modal_visibility.set_modal_open(true);
    }

    /// Close the modal, cancelling any submission still in flight
    pub fn close_modal(&mut self) {
        if let Some(pending) = self.pending.take() {
            tracing::debug!(ticket = pending.ticket, "cancelling in-flight submit");
            pending.cancel.cancel();
        }
        if self.state.modal.take().is_some() {
            self.state.modal_visibility.set_modal_open(false);
        }
    }

    /// Validate the open form and, if valid, send it in the background
    pub fn submit_modal(&mut self) {
        let Some(form) = self.state.modal.as_mut() else {
            return;
        };
        match form.begin_submit() {
            Ok(request) => {
                let ticket = self.next_ticket;
                self.next_ticket += 1;
                let cancel = CancellationToken::new();
                tracing::info!(form = form.kind().title(), path = %request.path(), ticket, "submitting");

                let api = Arc::clone(&self.api);
                let tx = self.events_tx.clone();
                let token = cancel.clone();
                tokio::spawn(async move {
                    let result = api.send(request, token).await;
                    // Receiver only goes away on shutdown
                    let _ = tx.send(AppEvent::SubmitFinished { ticket, result });
                });
                self.pending = Some(PendingSubmit { ticket, cancel });
            }
            Err(SubmitBlocked::AlreadySubmitting) => {}
            Err(SubmitBlocked::Invalid(count)) => {
                let noun = if count == 1 { "field needs" } else { "fields need" };
                self.state.set_status(format!("{count} {noun} attention"));
            }
        }
    }

    /// Drain background results without blocking
    pub async fn process_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event).await;
        }
    }

    async fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SubmitFinished { ticket, result } => {
                if self.pending.as_ref().map(|p| p.ticket) != Some(ticket) {
                    tracing::debug!(ticket, "dropping result for closed modal");
                    return;
                }
                self.pending = None;
                let Some(form) = self.state.modal.as_mut() else {
                    return;
                };
                if form.finish_submit(result).is_some() {
                    let message = form.kind().success_message();
                    tracing::info!(ticket, "{message}");
                    self.close_modal();
                    self.state.set_status(message);
                    self.load_all().await;
                }
            }
        }
    }

    /// Handle keyboard input
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Error dialog sits above everything else
        if self.state.current_error().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        if self.state.modal.is_some() {
            self.handle_modal_key(key);
            return Ok(());
        }

        self.handle_view_key(key).await
    }

    fn handle_modal_key(&mut self, key: KeyEvent) {
        if platform::is_shortcut(key.modifiers) {
            match key.code {
                KeyCode::Char('s') => self.submit_modal(),
                KeyCode::Char('t') => {
                    if let Some(form) = self.state.modal.as_mut() {
                        form.toggle_password_visibility();
                    }
                }
                _ => {}
            }
            return;
        }

        if key.code == KeyCode::Esc {
            let dismissed = self
                .state
                .modal
                .as_mut()
                .is_some_and(FormController::dismiss_banner);
            if !dismissed {
                self.close_modal();
            }
            return;
        }

        let Some(form) = self.state.modal.as_mut() else {
            return;
        };
        let is_select = form
            .active_spec()
            .is_some_and(|f| matches!(f.kind, FieldKind::Select(_)));
        let is_multiline = form.active_spec().is_some_and(|f| f.is_multiline());

        match key.code {
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Left if is_select => form.cycle_option(false),
            KeyCode::Right if is_select => form.cycle_option(true),
            KeyCode::Char(' ') if is_select => form.cycle_option(true),
            KeyCode::Enter if is_multiline => form.insert_newline(),
            KeyCode::Enter => form.next_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => form.input_char(c),
            _ => {}
        }
    }

    async fn handle_view_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char(c @ '1'..='5') => {
                let index = (c as usize) - ('1' as usize);
                self.state.switch_view(View::ALL[index]);
            }
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
                self.state.switch_view(self.state.current_view.next());
            }
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
                self.state.switch_view(self.state.current_view.prev());
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let len = self.state.current_list_len();
                self.state.move_selection_down(len);
            }
            KeyCode::Up | KeyCode::Char('k') => self.state.move_selection_up(),
            KeyCode::Char('r') => {
                self.load_all().await;
                self.state.set_status("Refreshed");
            }
            KeyCode::Char('n') => self.open_modal(self.new_form_kind()),
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(kind) = self.edit_form_kind() {
                    self.open_modal(kind);
                }
            }
            KeyCode::Char('m') => {
                let equipment_id = self.selected_equipment_id();
                self.open_modal(FormKind::ScheduleMaintenance { equipment_id });
            }
            KeyCode::Char('o') if self.state.current_view == View::Equipment => {
                let equipment_id = self.selected_equipment_id();
                self.open_modal(FormKind::AddMaintenanceRequest { equipment_id });
            }
            KeyCode::Char('a') if self.state.current_view == View::Equipment => {
                self.state.toggle_retired_equipment();
                self.persist_preferences();
            }
            _ => {}
        }
        Ok(())
    }

    fn selected_equipment_id(&self) -> Option<String> {
        if self.state.current_view != View::Equipment {
            return None;
        }
        self.state.selected_equipment().map(|e| e.id.clone())
    }

    fn new_form_kind(&self) -> FormKind {
        match self.state.current_view {
            View::Equipment => FormKind::AddEquipment,
            View::Technicians => FormKind::AddTechnician,
            View::Users => FormKind::AddUser,
            View::Dashboard | View::Maintenance => {
                FormKind::AddMaintenanceRequest { equipment_id: None }
            }
        }
    }

    fn edit_form_kind(&self) -> Option<FormKind> {
        match self.state.current_view {
            View::Dashboard => None,
            View::Equipment => self.state.selected_equipment().cloned().map(FormKind::EditEquipment),
            View::Technicians => self
                .state
                .selected_technician()
                .cloned()
                .map(FormKind::EditTechnician),
            View::Maintenance => self
                .state
                .selected_request()
                .cloned()
                .map(FormKind::EditMaintenanceRequest),
            View::Users => self.state.selected_user().cloned().map(FormKind::EditUser),
        }
    }

    fn persist_preferences(&mut self) {
        self.config.show_retired_equipment = Some(self.state.show_retired_equipment);
        let Some(path) = self.config_path.as_ref() else {
            return;
        };
        if let Err(e) = self.config.save_to(path) {
            tracing::warn!(error = %e, "failed to save config");
        }
    }

    /// Wait for the next background result; tests use this instead of the UI loop
    #[cfg(test)]
    async fn next_event(&mut self) {
        if let Some(event) = self.events_rx.recv().await {
            self.handle_event(event).await;
        }
    }
}
