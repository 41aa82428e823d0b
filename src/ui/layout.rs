//! Layout components (sidebar, status bar)

use super::components::{render_sidebar_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::platform::{SAVE_SHORTCUT, TOGGLE_PASSWORD_SHORTCUT};
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20), // Sidebar
            Constraint::Min(0),     // Main content
        ])
        .split(area);

    // Reserve bottom line for status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(chunks[1]);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(chunks[0]);

    (sidebar_chunks[0], main_chunks[0])
}

/// Full-width layout used while a modal is open
pub fn create_layout_no_sidebar(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Draw the sidebar with one boxed button per view
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints = vec![Constraint::Min(0)];
    constraints.extend(View::ALL.iter().map(|_| Constraint::Length(BUTTON_HEIGHT)));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (idx, view) in View::ALL.iter().enumerate() {
        let key = (idx + 1).to_string();
        render_sidebar_button(
            frame,
            chunks[idx + 1],
            &key,
            view.label(),
            *view == app.state.current_view,
        );
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Connection status
    let conn_status = if app.state.api_connected {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Red))
    };
    spans.push(conn_status);

    spans.push(Span::styled(hints(app), Style::default().fg(Color::Gray)));

    if app.state.loading {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled("Loading…", Style::default().fg(Color::Yellow)));
    }

    if let Some(msg) = app.state.status_text() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for whatever currently has focus
fn hints(app: &App) -> String {
    if app.state.current_error().is_some() {
        return "Enter/Esc:dismiss".to_string();
    }
    if let Some(modal) = &app.state.modal {
        let password = if modal.fields().iter().any(|f| f.is_password()) {
            format!("  {TOGGLE_PASSWORD_SHORTCUT}:show password")
        } else {
            String::new()
        };
        return format!("Tab:next  ←/→:choose  {SAVE_SHORTCUT}:save{password}  Esc:cancel");
    }
    view_hints(app.state.current_view).to_string()
}

fn view_hints(view: View) -> &'static str {
    match view {
        View::Dashboard => "1-5:views  n:request  m:schedule  r:refresh  q:quit",
        View::Equipment => "j/k:nav  n:new  e:edit  o:request  m:schedule  a:retired  r:refresh",
        View::Technicians => "j/k:nav  n:new  e:edit  r:refresh",
        View::Maintenance => "j/k:nav  n:new  e:edit  m:schedule  r:refresh",
        View::Users => "j/k:nav  n:new  e:edit  r:refresh",
    }
}
