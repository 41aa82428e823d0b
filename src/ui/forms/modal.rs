//! Centered modal hosting a [`FormController`]
//!
//! Layout:
//! +---------------- Title ----------------+
//! | ! server error banner (when present)  |
//! | field                                 |
//! | field                                 |
//! | ...scrolls to keep focus in view...   |
//! | [ Save (Ctrl+S) ]   [ Cancel (Esc) ]  |
//! +---------------------------------------+

use crate::platform::SAVE_SHORTCUT;
use crate::state::{Form, FormController, ModalPhase};
use crate::ui::components::{
    centered_rect, field_height, render_action_button, render_field, render_strength_meter,
    InputProps, BUTTON_HEIGHT, METER_HEIGHT,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const MODAL_WIDTH: u16 = 72;

/// Index of the first field to draw so that `active` fits in `available` rows
pub fn first_visible(heights: &[u16], active: usize, available: u16) -> usize {
    let mut start = 0;
    while start < active {
        let used: u16 = heights[start..=active.min(heights.len().saturating_sub(1))]
            .iter()
            .sum();
        if used <= available {
            break;
        }
        start += 1;
    }
    start
}

fn row_height(form: &FormController, idx: usize) -> u16 {
    let spec = &form.fields()[idx];
    let meter = if spec.shows_strength_meter() {
        METER_HEIGHT
    } else {
        0
    };
    field_height(spec) + meter
}

pub fn draw_modal(frame: &mut Frame, area: Rect, form: &FormController) {
    let modal_area = centered_rect(
        area,
        MODAL_WIDTH.min(area.width.saturating_sub(4)),
        area.height.saturating_sub(2),
    );
    frame.render_widget(Clear, modal_area);

    let accent = if form.phase() == ModalPhase::Error {
        Color::Red
    } else {
        Color::Cyan
    };
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", form.kind().title()),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let banner_height = if form.banner().is_empty() {
        0
    } else {
        form.banner().len() as u16 + 3
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner_height),
            Constraint::Min(0),
            Constraint::Length(BUTTON_HEIGHT),
        ])
        .split(inner);

    if banner_height > 0 {
        draw_banner(frame, chunks[0], form.banner());
    }
    draw_fields(frame, chunks[1], form);
    draw_actions(frame, chunks[2], form);
}

fn draw_banner(frame: &mut Frame, area: Rect, messages: &[String]) {
    let mut lines: Vec<Line> = messages
        .iter()
        .map(|m| {
            Line::from(Span::styled(
                format!("• {m}"),
                Style::default().fg(Color::Red),
            ))
        })
        .collect();
    lines.push(Line::from(Span::styled(
        "Esc to dismiss",
        Style::default().fg(Color::DarkGray),
    )));
    let banner = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(" Could not save ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(banner, area);
}

fn draw_fields(frame: &mut Frame, area: Rect, form: &FormController) {
    let heights: Vec<u16> = (0..form.field_count()).map(|i| row_height(form, i)).collect();
    let active = form.active_field();
    let start = first_visible(&heights, active, area.height);

    let mut y = area.y;
    let bottom = area.y + area.height;
    for (idx, spec) in form.fields().iter().enumerate().skip(start) {
        let height = heights[idx];
        if y + height > bottom {
            break;
        }
        let field_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height: field_height(spec),
        };
        let props = InputProps {
            spec,
            value: form.value(spec.name),
            error: form.visible_error(spec.name),
            state: form.visual_state(spec.name),
            is_active: idx == active,
            reveal_password: form.password_visible(),
        };
        render_field(frame, field_area, &props);

        if spec.shows_strength_meter() {
            let meter_area = Rect {
                x: area.x,
                y: y + field_area.height,
                width: area.width,
                height: METER_HEIGHT,
            };
            render_strength_meter(frame, meter_area, form.password_strength());
        }
        y += height;
    }
}

fn draw_actions(frame: &mut Frame, area: Rect, form: &FormController) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let submitting = form.is_submitting();
    let label = if submitting {
        "Saving…"
    } else {
        form.kind().submit_label()
    };
    render_action_button(
        frame,
        chunks[0],
        label,
        SAVE_SHORTCUT,
        !submitting,
        Some(Color::Green),
    );
    render_action_button(frame, chunks[1], "Cancel", "Esc", true, None);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_visible_keeps_everything_when_it_fits() {
        assert_eq!(first_visible(&[4, 4, 7], 2, 20), 0);
    }

    #[test]
    fn test_first_visible_scrolls_to_active() {
        assert_eq!(first_visible(&[4, 4, 4, 4], 3, 8), 2);
        assert_eq!(first_visible(&[4, 4, 4, 4], 0, 8), 0);
    }
}
