//! Dashboard view: counts at a glance

use super::widgets::{equipment_status_color, priority_color};
use crate::app::App;
use crate::state::Mapped;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let summary = app.state.dashboard_summary();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let equipment_lines: Vec<Line> = summary
        .equipment_by_status
        .iter()
        .map(|(status, count)| {
            count_line(status.label(), *count, equipment_status_color(*status))
        })
        .collect();
    frame.render_widget(
        Paragraph::new(equipment_lines).block(panel(" Equipment ")),
        top[0],
    );

    let request_lines: Vec<Line> = summary
        .open_requests_by_priority
        .iter()
        .map(|(priority, count)| count_line(priority.label(), *count, priority_color(*priority)))
        .collect();
    frame.render_widget(
        Paragraph::new(request_lines).block(panel(" Open Requests ")),
        top[1],
    );

    let staff_lines = vec![
        count_line(
            &format!("Technicians available (of {})", summary.total_technicians),
            summary.available_technicians,
            Color::Green,
        ),
        count_line("User accounts", summary.total_users, Color::Cyan),
        Line::from(""),
        Line::from(Span::styled(
            "Press 'n' to file a maintenance request, 'm' to schedule maintenance.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(staff_lines).block(panel(" Staff ")), rows[1]);
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

fn count_line(label: &str, count: usize, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {count:>4} "),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(label.to_string()),
    ])
}
