//! User information form rendering

use super::field_renderer::{draw_choice_field, draw_input_field, FieldView, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{FieldName, FormPage, FormPhase, UserForm};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Draw the mounted form page
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(page) = app.page.as_ref() else {
        return;
    };
    let form = &page.form;

    let block = Block::default()
        .title(format!(" {} ", page.kind.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Heading
            Constraint::Length(1),             // Loading gauge
            Constraint::Length(FIELD_HEIGHT),  // Name
            Constraint::Length(FIELD_HEIGHT),  // Age
            Constraint::Length(FIELD_HEIGHT),  // Hobbies
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Min(0),                // Remaining space
        ])
        .horizontal_margin(1)
        .split(inner);

    draw_heading(frame, chunks[0]);
    draw_loading(frame, chunks[1], page);

    for name in FieldName::ALL {
        let field = form.field(name);
        let error = form.visible_error(name);
        let view = FieldView {
            is_active: form.active_field_name() == Some(name),
            is_disabled: form.is_disabled(),
            error: error.as_deref(),
        };
        let area = chunks[2 + name.index()];
        if field.is_choice() {
            draw_choice_field(frame, area, field, view);
        } else {
            draw_input_field(frame, area, field, view);
        }
    }

    draw_submit(frame, chunks[5], form);
}

fn draw_heading(frame: &mut Frame, area: Rect) {
    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            "User Information",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Please fill in your details",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(heading, area);
}

fn draw_loading(frame: &mut Frame, area: Rect, page: &FormPage) {
    let Some(progress) = page.loading_progress() else {
        return;
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Yellow))
        .ratio(f64::from(progress.clamp(0.0, 1.0)))
        .label("Loading default values (Esc to skip)");
    frame.render_widget(gauge, area);
}

fn draw_submit(frame: &mut Frame, area: Rect, form: &UserForm) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(20), Constraint::Min(0)])
        .split(area);

    let accent = match form.phase() {
        FormPhase::Invalid => Color::Red,
        FormPhase::Submitted => Color::Green,
        _ => Color::Gray,
    };
    render_button(
        frame,
        chunks[0],
        "Submit",
        form.is_submit_row_active(),
        true,
        Some(accent),
    );

    let summary = Paragraph::new(Line::from(vec![
        Span::styled(form.phase().label(), Style::default().fg(accent)),
        Span::styled(
            format!("  submits: {}", form.submit_count()),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    let summary_area = Rect {
        y: chunks[1].y + 1,
        height: 1,
        ..chunks[1]
    }
    .intersection(chunks[1]);
    frame.render_widget(summary, summary_area);
}
