//! Console panel: where submitted form data is logged

use crate::app::App;
use crate::state::ConsoleLevel;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Console height in rows including borders
pub const CONSOLE_HEIGHT: u16 = 8;

/// Draw the console, scrolled so the newest entry is visible
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .state
        .console
        .iter()
        .map(|entry| {
            let color = match entry.level {
                ConsoleLevel::Log => Color::White,
                ConsoleLevel::Warn => Color::Yellow,
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    entry.timestamp.format("%H:%M:%S ").to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(entry.message.clone(), Style::default().fg(color)),
            ]))
        })
        .collect();

    let title = format!(" Console ({}) ", app.state.console.len());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    let last = app.state.console.len().checked_sub(1);
    let mut list_state = ListState::default().with_selected(last);
    frame.render_stateful_widget(list, area, &mut list_state);
}
