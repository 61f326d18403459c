//! Field rendering utilities for forms

use crate::state::{FormField, Hobby};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by a field: bordered input plus one error line
pub const FIELD_HEIGHT: u16 = 4;

/// How a field is drawn this frame
#[derive(Debug, Clone, Copy)]
pub struct FieldView<'a> {
    pub is_active: bool,
    pub is_disabled: bool,
    pub error: Option<&'a str>,
}

fn border_style(view: &FieldView) -> Style {
    if view.error.is_some() {
        Style::default().fg(Color::Red)
    } else if view.is_active && !view.is_disabled {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn field_block<'a>(field: &FormField, view: &FieldView) -> Block<'a> {
    let title = if view.is_disabled {
        format!(" {} (loading) ", field.label)
    } else {
        format!(" {} ", field.label)
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(view))
}

/// Split a field area into input and error rows, drawing the error line
fn split_and_draw_error(frame: &mut Frame, area: Rect, error: Option<&str>) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    if let Some(message) = error {
        let line = Paragraph::new(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(line, chunks[1]);
    }
    chunks[0]
}

/// Draw a text or number field
pub fn draw_input_field(frame: &mut Frame, area: Rect, field: &FormField, view: FieldView) {
    let input_area = split_and_draw_error(frame, area, view.error);

    let value = field.display_value();
    let content = if view.is_disabled {
        Line::from(Span::styled(
            "Loading...",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
    } else if value.is_empty() && !view.is_active {
        Line::from(Span::styled(
            "(empty)",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let style = if view.is_active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let cursor = if view.is_active { "▌" } else { "" };
        Line::from(vec![
            Span::styled(value, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };

    frame.render_widget(
        Paragraph::new(content).block(field_block(field, &view)),
        input_area,
    );
}

/// Draw the hobby multi-select as a row of checkboxes
pub fn draw_choice_field(frame: &mut Frame, area: Rect, field: &FormField, view: FieldView) {
    let input_area = split_and_draw_error(frame, area, view.error);
    let selected = field.as_choices();

    let mut spans = Vec::with_capacity(Hobby::ALL.len() * 2);
    for (idx, hobby) in Hobby::ALL.iter().enumerate() {
        let mark = if selected.contains(hobby) { "[x]" } else { "[ ]" };
        let mut style = if view.is_disabled {
            Style::default().fg(Color::DarkGray)
        } else if selected.contains(hobby) {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        };
        if view.is_active && !view.is_disabled && idx == field.highlighted {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(format!("{mark} {hobby}"), style));
        spans.push(Span::raw("  "));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(field_block(field, &view)),
        input_area,
    );
}
