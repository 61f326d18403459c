//! Form state inspector: live value and meta of every field

use crate::app::App;
use crate::state::{FieldMeta, FieldName, FormSnapshot};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

fn flag(set: bool) -> Cell<'static> {
    if set {
        Cell::from("yes").style(Style::default().fg(Color::Yellow))
    } else {
        Cell::from("no").style(Style::default().fg(Color::DarkGray))
    }
}

fn field_row(name: FieldName, meta: &FieldMeta) -> Row<'static> {
    let error = match &meta.error {
        Some(message) => Cell::from(message.clone()).style(Style::default().fg(Color::Red)),
        None => Cell::from("-").style(Style::default().fg(Color::DarkGray)),
    };
    Row::new(vec![
        Cell::from(name.as_str()),
        Cell::from(meta.value.to_string()),
        flag(meta.dirty),
        flag(meta.touched),
        error,
    ])
}

fn snapshot_table(snapshot: &FormSnapshot) -> Table<'static> {
    let header = Row::new(vec!["Field", "Value", "Dirty", "Touched", "Error"]).style(
        Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD),
    );
    let rows: Vec<Row> = FieldName::ALL
        .into_iter()
        .filter_map(|name| snapshot.field(name).map(|meta| field_row(name, meta)))
        .collect();

    Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Fill(2),
            Constraint::Length(5),
            Constraint::Length(7),
            Constraint::Fill(3),
        ],
    )
    .header(header)
}

/// Draw the inspector from the last observed snapshot
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let title = match app.form_snapshot() {
        Some(snapshot) => format!(
            " Form State ({}, submits: {}) ",
            snapshot.phase.label(),
            snapshot.submit_count
        ),
        None => " Form State ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    match app.form_snapshot() {
        Some(snapshot) => frame.render_widget(snapshot_table(snapshot).block(block), area),
        None => frame.render_widget(
            Paragraph::new("Waiting for form state")
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            area,
        ),
    }
}
