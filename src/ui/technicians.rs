//! Technicians list view

use super::widgets::{column, render_scrollable_list, technician_status_color};
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
    let technicians = &app.state.technicians;
    let block = Block::default()
        .title(format!(" Technicians ({}) ", technicians.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if technicians.is_empty() {
        let content = Paragraph::new("No technicians found.\nPress 'n' to add a technician.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(content, area);
        return;
    }

    let items: Vec<ListItem> = technicians
        .iter()
        .enumerate()
        .map(|(idx, tech)| {
            let is_selected = idx == app.state.selected_index;
            let prefix = if is_selected { "▸" } else { " " };
            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };
            let experience = tech
                .experience_years
                .map(|y| format!("{y} yrs"))
                .unwrap_or_default();

            ListItem::new(Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(column(&tech.employee_id, 10), Style::default().fg(Color::Cyan)),
                Span::raw(" "),
                Span::styled(
                    column(tech.status.label(), 10),
                    Style::default().fg(technician_status_color(tech.status)),
                ),
                Span::styled(column(&tech.name, 24), style),
                Span::styled(column(&tech.specialization, 20), Style::default().fg(Color::Gray)),
                Span::styled(experience, Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let list = List::new(items).block(block);
    render_scrollable_list(frame, area, list, app.state.selected_index);
}
