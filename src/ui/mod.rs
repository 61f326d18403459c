//! UI module for rendering the TUI

mod components;
mod console;
mod forms;
mod inspector;
mod layout;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Draw the main layout with sidebar
    let (sidebar_area, main_area) = layout::create_layout(area);
    layout::draw_sidebar(frame, sidebar_area, app);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                        // Form
            Constraint::Length(console::CONSOLE_HEIGHT), // Console
        ])
        .split(main_area);

    forms::draw(frame, chunks[0], app);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);
    console::draw(frame, bottom[0], app);
    inspector::draw(frame, bottom[1], app);

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Errors are modal and drawn last
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message);
    }
}
