//! Error dialog component

use super::base::{render_dialog, DialogConfig};
use crate::state::ErrorNotice;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the front of the error queue centered on the screen
pub fn render_error_dialog(frame: &mut Frame, notice: &ErrorNotice, queued: usize) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ];
    if queued > 1 {
        hint.push(Span::styled(
            format!("  ({} more)", queued - 1),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let paragraphs = if notice.messages.is_empty() {
        vec!["Something went wrong.".to_string()]
    } else {
        notice.messages.clone()
    };

    render_dialog(
        frame,
        DialogConfig {
            title: &notice.title,
            accent: Color::Red,
            paragraphs,
            hint: Some(hint),
            max_width: 60,
        },
    );
}
