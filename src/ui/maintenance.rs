//! Maintenance requests view, open and urgent first

use super::widgets::{column, priority_color, render_scrollable_list, request_status_color};
use crate::app::App;
use crate::state::Mapped;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let requests = app.state.sorted_requests();
    let open = requests.iter().filter(|r| r.status.is_open()).count();
    let block = Block::default()
        .title(format!(" Maintenance ({open} open) "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if requests.is_empty() {
        let content = Paragraph::new(
            "No maintenance requests.\nPress 'n' to file one or 'm' to schedule maintenance.",
        )
        .style(Style::default().fg(Color::DarkGray))
        .block(block);
        frame.render_widget(content, area);
        return;
    }

    let items: Vec<ListItem> = requests
        .iter()
        .enumerate()
        .map(|(idx, request)| {
            let is_selected = idx == app.state.selected_index;
            let prefix = if is_selected { "▸" } else { " " };
            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(
                    column(&format!("[{}]", request.priority.label()), 11),
                    Style::default().fg(priority_color(request.priority)),
                ),
                Span::styled(
                    column(request.status.label(), 12),
                    Style::default().fg(request_status_color(request.status)),
                ),
                Span::styled(column(&request.title, 28), style),
                Span::styled(
                    column(&request.equipment_label(&app.state.equipment), 20),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    column(&request.technician_label(&app.state.technicians), 16),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    request.scheduled_date.clone().unwrap_or_default(),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(block);
    render_scrollable_list(frame, area, list, app.state.selected_index);
}
