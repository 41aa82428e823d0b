//! Reusable UI widget helpers

use crate::state::{EquipmentStatus, Priority, RequestStatus, TechnicianStatus};
use ratatui::{
    layout::Rect,
    style::Color,
    widgets::{List, ListState},
    Frame,
};

/// Render a scrollable list that automatically keeps the selected item visible.
///
/// # Example
/// ```ignore
/// let list = List::new(items).block(block);
/// render_scrollable_list(frame, area, list, app.state.selected_index);
/// ```
pub fn render_scrollable_list(frame: &mut Frame, area: Rect, list: List, selected_index: usize) {
    let mut list_state = ListState::default().with_selected(Some(selected_index));
    frame.render_stateful_widget(list, area, &mut list_state);
}

pub fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::Critical => Color::Red,
        Priority::High => Color::LightRed,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::Green,
    }
}

pub fn equipment_status_color(status: EquipmentStatus) -> Color {
    match status {
        EquipmentStatus::Operational => Color::Green,
        EquipmentStatus::UnderMaintenance => Color::Yellow,
        EquipmentStatus::OutOfService => Color::Red,
        EquipmentStatus::Retired => Color::DarkGray,
    }
}

pub fn request_status_color(status: RequestStatus) -> Color {
    match status {
        RequestStatus::Pending => Color::Cyan,
        RequestStatus::InProgress => Color::Yellow,
        RequestStatus::Completed => Color::Green,
        RequestStatus::Cancelled => Color::DarkGray,
    }
}

pub fn technician_status_color(status: TechnicianStatus) -> Color {
    match status {
        TechnicianStatus::Available => Color::Green,
        TechnicianStatus::Busy => Color::Yellow,
        TechnicianStatus::OffDuty => Color::DarkGray,
    }
}

/// Truncate to `width` characters, marking the cut with an ellipsis
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{kept}…")
}

/// Left-align `text` in a fixed-width column
pub fn column(text: &str, width: usize) -> String {
    format!("{:<width$}", truncate(text, width))
}
