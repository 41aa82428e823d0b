//! Validated input primitives
//!
//! Inputs render whatever the form controller tells them: the value, the
//! visual state and the (already touched-filtered) error. They never
//! validate anything themselves.

use crate::state::{FieldKind, FieldSpec, FieldVisualState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Everything an input needs to draw itself
pub struct InputProps<'a> {
    pub spec: &'a FieldSpec,
    pub value: &'a str,
    /// Error to show, `None` while untouched
    pub error: Option<&'a str>,
    pub state: FieldVisualState,
    pub is_active: bool,
    /// Show password characters instead of bullets
    pub reveal_password: bool,
}

const TEXTAREA_ROWS: u16 = 4;
const CURSOR: &str = "▌";

/// Rows taken by a field: bordered box plus one message line
pub fn field_height(spec: &FieldSpec) -> u16 {
    let inner = if spec.is_multiline() { TEXTAREA_ROWS } else { 1 };
    inner + 2 + 1
}

pub fn border_color(state: FieldVisualState, is_active: bool) -> Color {
    match state {
        FieldVisualState::Invalid => Color::Red,
        FieldVisualState::Valid => Color::Green,
        FieldVisualState::Neutral if is_active => Color::Cyan,
        FieldVisualState::Neutral => Color::DarkGray,
    }
}

/// `n/max` character counter for length-limited fields
pub fn counter(spec: &FieldSpec, value: &str) -> Option<String> {
    spec.max_length
        .map(|max| format!("{}/{}", value.chars().count(), max))
}

/// Text shown inside the box
pub fn display_value(spec: &FieldSpec, value: &str, reveal_password: bool) -> String {
    match &spec.kind {
        FieldKind::Password { .. } if !reveal_password => "•".repeat(value.chars().count()),
        FieldKind::Select(_) => spec.option_label(value).to_string(),
        _ => value.to_string(),
    }
}

fn title<'a>(props: &InputProps<'a>) -> Line<'a> {
    let mut spans = vec![Span::raw(format!(" {} ", props.spec.label))];
    if props.spec.read_only {
        spans.push(Span::styled("(read-only) ", Style::default().fg(Color::DarkGray)));
    }
    Line::from(spans)
}

fn block<'a>(props: &InputProps<'a>) -> Block<'a> {
    let color = border_color(props.state, props.is_active);
    let mut block = Block::default()
        .title(title(props))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    if let Some(count) = counter(props.spec, props.value) {
        block = block.title_bottom(Line::from(format!(" {count} ")).right_aligned());
    }
    if props.spec.is_password() {
        let hint = if props.reveal_password { " hide " } else { " show " };
        block = block.title_top(Line::from(hint).right_aligned());
    }
    block
}

/// Error in red when present, otherwise help text
fn message_line<'a>(props: &InputProps<'a>) -> Line<'a> {
    match (props.error, props.spec.help) {
        (Some(error), _) => Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red),
        )),
        (None, Some(help)) => Line::from(Span::styled(
            format!(" {help}"),
            Style::default().fg(Color::DarkGray),
        )),
        (None, None) => Line::from(""),
    }
}

fn split(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

fn value_style(props: &InputProps<'_>) -> Style {
    if props.spec.read_only {
        Style::default().fg(Color::DarkGray)
    } else if props.is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    }
}

/// Single-line text, password, date and number inputs
pub fn render_validated_input(frame: &mut Frame, area: Rect, props: &InputProps<'_>) {
    let (box_area, message_area) = split(area);
    let shown = display_value(props.spec, props.value, props.reveal_password);

    let mut spans = Vec::new();
    if shown.is_empty() && !props.is_active {
        if let Some(placeholder) = props.spec.placeholder {
            spans.push(Span::styled(placeholder, Style::default().fg(Color::DarkGray)));
        }
    } else {
        spans.push(Span::styled(shown, value_style(props)));
    }
    if props.is_active && !props.spec.read_only {
        spans.push(Span::styled(CURSOR, Style::default().fg(Color::Cyan)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block(props)), box_area);
    frame.render_widget(Paragraph::new(message_line(props)), message_area);
}

/// Multi-line input with wrapping
pub fn render_validated_textarea(frame: &mut Frame, area: Rect, props: &InputProps<'_>) {
    let (box_area, message_area) = split(area);

    let mut lines: Vec<Line> = if props.value.is_empty() && !props.is_active {
        props
            .spec
            .placeholder
            .map(|p| vec![Line::from(Span::styled(p, Style::default().fg(Color::DarkGray)))])
            .unwrap_or_default()
    } else {
        props
            .value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), value_style(props))))
            .collect()
    };
    if props.is_active {
        let cursor = Span::styled(CURSOR, Style::default().fg(Color::Cyan));
        match lines.last_mut() {
            Some(last) => last.spans.push(cursor),
            None => lines.push(Line::from(cursor)),
        }
    }

    // Keep the cursor line in view
    let inner_rows = box_area.height.saturating_sub(2);
    let scroll = (lines.len() as u16).saturating_sub(inner_rows);

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(block(props));
    frame.render_widget(paragraph, box_area);
    frame.render_widget(Paragraph::new(message_line(props)), message_area);
}

/// Select rendered as `◀ label ▶`; Left/Right cycle the options
pub fn render_validated_select(frame: &mut Frame, area: Rect, props: &InputProps<'_>) {
    let (box_area, message_area) = split(area);
    let label = display_value(props.spec, props.value, false);
    let arrow_style = if props.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let label_style = if props.value.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        value_style(props).add_modifier(Modifier::BOLD)
    };
    let line = Line::from(vec![
        Span::styled("◀ ", arrow_style),
        Span::styled(label, label_style),
        Span::styled(" ▶", arrow_style),
    ]);
    frame.render_widget(Paragraph::new(line).block(block(props)), box_area);
    frame.render_widget(Paragraph::new(message_line(props)), message_area);
}

/// Pick the primitive for the field's kind
pub fn render_field(frame: &mut Frame, area: Rect, props: &InputProps<'_>) {
    match props.spec.kind {
        FieldKind::Textarea => render_validated_textarea(frame, area, props),
        FieldKind::Select(_) => render_validated_select(frame, area, props),
        _ => render_validated_input(frame, area, props),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SelectOption;

    #[test]
    fn test_border_color_follows_visual_state() {
        assert_eq!(border_color(FieldVisualState::Invalid, true), Color::Red);
        assert_eq!(border_color(FieldVisualState::Valid, false), Color::Green);
        assert_eq!(border_color(FieldVisualState::Neutral, true), Color::Cyan);
        assert_eq!(border_color(FieldVisualState::Neutral, false), Color::DarkGray);
    }

    #[test]
    fn test_password_is_masked_until_revealed() {
        let spec = FieldSpec::password("password", "Password", true);
        assert_eq!(display_value(&spec, "abc", false), "•••");
        assert_eq!(display_value(&spec, "abc", true), "abc");
    }

    #[test]
    fn test_select_shows_option_label() {
        let spec = FieldSpec::select(
            "priority",
            "Priority",
            vec![SelectOption::new("high", "High")],
        );
        assert_eq!(display_value(&spec, "high", false), "High");
    }

    #[test]
    fn test_counter_only_with_max_length() {
        let plain = FieldSpec::text("location", "Location");
        assert_eq!(counter(&plain, "ICU"), None);
        let limited = FieldSpec::textarea("description", "Description").with_max_length(500);
        assert_eq!(counter(&limited, "Leaking"), Some("7/500".to_string()));
    }

    #[test]
    fn test_textarea_taller_than_input() {
        let input = FieldSpec::text("title", "Title");
        let area = FieldSpec::textarea("description", "Description");
        assert_eq!(field_height(&input), 4);
        assert_eq!(field_height(&area), 7);
    }
}
