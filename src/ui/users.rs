//! User accounts view

use super::widgets::{column, render_scrollable_list};
use crate::app::App;
use crate::state::{Mapped, UserRole};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

fn role_color(role: UserRole) -> Color {
    match role {
        UserRole::Admin => Color::Magenta,
        UserRole::Manager => Color::Blue,
        UserRole::Technician => Color::Yellow,
        UserRole::Staff => Color::Gray,
    }
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let users = &app.state.users;
    let block = Block::default()
        .title(format!(" Users ({}) ", users.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if users.is_empty() {
        let content = Paragraph::new("No user accounts.\nPress 'n' to add a user.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(content, area);
        return;
    }

    let items: Vec<ListItem> = users
        .iter()
        .enumerate()
        .map(|(idx, user)| {
            let is_selected = idx == app.state.selected_index;
            let prefix = if is_selected { "▸" } else { " " };
            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(column(&user.employee_id, 18), Style::default().fg(Color::Cyan)),
                Span::raw(" "),
                Span::styled(
                    column(user.role.label(), 11),
                    Style::default().fg(role_color(user.role)),
                ),
                Span::styled(column(&user.name, 24), style),
                Span::styled(column(&user.email, 28), Style::default().fg(Color::Gray)),
                Span::styled(user.department.clone(), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let list = List::new(items).block(block);
    render_scrollable_list(frame, area, list, app.state.selected_index);
}
