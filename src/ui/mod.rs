//! UI module for rendering the TUI

mod components;
mod dashboard;
mod equipment;
mod forms;
mod layout;
mod maintenance;
mod technicians;
mod users;
mod widgets;

use crate::app::App;
use crate::state::View;
use components::render_error_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // The sidebar hides whenever a modal or error dialog is showing
    let main_area = if app.state.is_modal_open() {
        layout::create_layout_no_sidebar(area)
    } else {
        let (sidebar_area, main_area) = layout::create_layout(area);
        layout::draw_sidebar(frame, sidebar_area, app);
        main_area
    };

    match app.state.current_view {
        View::Dashboard => dashboard::draw(frame, main_area, app),
        View::Equipment => equipment::draw(frame, main_area, app),
        View::Technicians => technicians::draw(frame, main_area, app),
        View::Maintenance => maintenance::draw(frame, main_area, app),
        View::Users => users::draw(frame, main_area, app),
    }

    if let Some(form) = &app.state.modal {
        forms::draw_modal(frame, main_area, form);
    }

    // Errors stack above everything else
    if let Some(notice) = app.state.current_error() {
        render_error_dialog(frame, notice, app.state.error_count());
    }

    layout::draw_status_bar(frame, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockClinicApi;
    use crate::config::TuiConfig;
    use crate::state::{Equipment, EquipmentStatus, FormKind};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn app() -> App {
        App::new(Arc::new(MockClinicApi::new()), TuiConfig::default(), None)
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_sidebar_lists_views() {
        let screen = render(&app());
        assert!(screen.contains("1 Dashboard"));
        assert!(screen.contains("5 Users"));
    }

    #[test]
    fn test_modal_hides_sidebar_and_shows_title() {
        let mut app = app();
        app.state.current_view = View::Equipment;
        app.state.equipment.push(Equipment {
            id: "1".to_string(),
            name: "Ventilator".to_string(),
            status: EquipmentStatus::Operational,
            ..Default::default()
        });
        app.open_modal(FormKind::AddEquipment);
        let screen = render(&app);
        assert!(screen.contains(FormKind::AddEquipment.title()));
        assert!(!screen.contains("1 Dashboard"));
    }

    #[test]
    fn test_error_dialog_rendered_over_view() {
        let mut app = app();
        app.state
            .push_error("Failed to load users", vec!["Network error".to_string()]);
        let screen = render(&app);
        assert!(screen.contains("Failed to load users"));
        assert!(screen.contains("Network error"));
    }
}
