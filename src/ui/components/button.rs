//! Boxed buttons for the sidebar and modal actions

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Sidebar entry: the view's number key, then its label
pub fn render_sidebar_button(
    frame: &mut Frame,
    area: Rect,
    key: &str,
    label: &str,
    is_selected: bool,
) {
    let accent = if is_selected {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let label_style = if is_selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(key.to_string(), Style::default().fg(accent)),
        Span::raw(" "),
        Span::styled(label.to_string(), label_style),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Render a form action button; `accent` colors the label when enabled
pub fn render_action_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    shortcut: &str,
    is_enabled: bool,
    accent: Option<Color>,
) {
    let color = match (is_enabled, accent) {
        (false, _) => Color::DarkGray,
        (true, Some(c)) => c,
        (true, None) => Color::White,
    };
    let paragraph = Paragraph::new(format!("{label} ({shortcut})"))
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    frame.render_widget(paragraph.block(block), area);
}
