//! Password strength meter shown under password fields

use crate::validation::{PasswordStrength, Strength};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Rows the meter occupies: bar plus feedback
pub const METER_HEIGHT: u16 = 2;

pub fn strength_color(strength: Strength) -> Color {
    match strength {
        Strength::None => Color::DarkGray,
        Strength::Weak => Color::Red,
        Strength::Medium => Color::Yellow,
        Strength::Strong => Color::Green,
    }
}

/// Number of filled cells for `score` out of `width`
pub fn filled_cells(score: u8, width: usize) -> usize {
    (score.min(100) as usize * width) / 100
}

/// Hint line under the bar, empty when nothing is missing
pub fn feedback_line(feedback: &str) -> String {
    if feedback.is_empty() {
        String::new()
    } else {
        format!(" Add {feedback}")
    }
}

pub fn render_strength_meter(frame: &mut Frame, area: Rect, strength: &PasswordStrength) {
    if strength.strength == Strength::None {
        return;
    }
    let color = strength_color(strength.strength);
    let label = format!(" {} ({}%)", strength.strength.label(), strength.score);
    let bar_width = (area.width as usize)
        .saturating_sub(label.chars().count() + 1)
        .max(1);
    let filled = filled_cells(strength.score, bar_width);

    let mut lines = vec![Line::from(vec![
        Span::raw(" "),
        Span::styled("█".repeat(filled), Style::default().fg(color)),
        Span::styled(
            "░".repeat(bar_width - filled),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(label, Style::default().fg(color)),
    ])];
    if !strength.feedback.is_empty() {
        lines.push(Line::from(Span::styled(
            feedback_line(&strength.feedback),
            Style::default().fg(Color::DarkGray),
        )));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_cells_scale_with_score() {
        assert_eq!(filled_cells(0, 20), 0);
        assert_eq!(filled_cells(50, 20), 10);
        assert_eq!(filled_cells(100, 20), 20);
    }

    #[test]
    fn test_feedback_line_prefixes_missing_hints() {
        let strength = crate::validation::calculate_password_strength("Abcdefg1");
        assert_eq!(feedback_line(&strength.feedback), " Add special character");
        assert_eq!(feedback_line(""), "");
    }

    #[test]
    fn test_strength_color() {
        assert_eq!(strength_color(Strength::Weak), Color::Red);
        assert_eq!(strength_color(Strength::Strong), Color::Green);
    }
}
