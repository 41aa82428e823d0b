//! Equipment list view

use super::widgets::{column, equipment_status_color, render_scrollable_list};
use crate::app::App;
use crate::state::{EquipmentStatus, Mapped};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let visible = app.state.visible_equipment();
    let retired_count = app
        .state
        .equipment
        .iter()
        .filter(|e| e.status == EquipmentStatus::Retired)
        .count();
    let filter_label = if retired_count == 0 {
        String::new()
    } else if app.state.show_retired_equipment {
        format!("({retired_count} retired)")
    } else {
        format!("(hiding {retired_count} retired)")
    };

    let block = Block::default()
        .title(format!(" Equipment ({}) ", visible.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if visible.is_empty() {
        let message = if retired_count > 0 && !app.state.show_retired_equipment {
            "No active equipment. Press 'a' to show retired equipment.\nPress 'n' to add equipment."
        } else {
            "No equipment found.\nPress 'n' to add equipment."
        };
        let content = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(content, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let header = Paragraph::new(Line::from(vec![
        Span::styled(filter_label, Style::default().fg(Color::DarkGray)),
        Span::styled(" [a]toggle retired", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(header, chunks[0]);

    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(idx, equipment)| {
            let is_selected = idx == app.state.selected_index;
            let prefix = if is_selected { "▸" } else { " " };
            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };
            let next = equipment
                .next_maintenance
                .as_deref()
                .map(|d| format!("next {d}"))
                .unwrap_or_default();

            ListItem::new(Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(column(&equipment.equipment_id, 10), Style::default().fg(Color::Cyan)),
                Span::raw(" "),
                Span::styled(
                    column(equipment.status.label(), 18),
                    Style::default().fg(equipment_status_color(equipment.status)),
                ),
                Span::styled(column(&equipment.name, 28), style),
                Span::styled(column(&equipment.location, 16), Style::default().fg(Color::Gray)),
                Span::styled(next, Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let list = List::new(items).block(block);
    render_scrollable_list(frame, chunks[1], list, app.state.selected_index);
}
