//! Modal dialog components

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Widest a dialog may grow
const MAX_DIALOG_WIDTH: u16 = 60;

/// Horizontal padding inside the border
const PADDING: u16 = 4;

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = Line::from(vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ]);

    render_dialog(frame, "Error", Color::Red, error_message, hint);
}

/// Render a centered dialog with a title, wrapped message and hint line
fn render_dialog(frame: &mut Frame, title: &str, color: Color, message: &str, hint: Line) {
    let area = frame.area();
    let wrapped = wrap_text(message, (MAX_DIALOG_WIDTH - PADDING) as usize);

    let content_width = wrapped
        .iter()
        .map(|l| l.chars().count())
        .chain([title.chars().count(), hint.width()])
        .max()
        .unwrap_or(0) as u16;
    // +2 for borders
    let width = (content_width + PADDING + 2).min(MAX_DIALOG_WIDTH).min(area.width);
    // title + blank + message + blank + hint + borders
    let height = (wrapped.len() as u16 + 6).min(area.height);

    let dialog_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    let mut content = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(wrapped.into_iter().map(Line::from));
    content.push(Line::from(""));
    content.push(hint);

    let dialog = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(Clear, dialog_area);
    frame.render_widget(dialog, dialog_area);
}

/// Word-wrap text to a maximum width in characters
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let needed = current.chars().count() + word.chars().count() + 1;
            if needed > max_width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn test_error_dialog_shows_dismiss_hint_inside_border() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| render_error_dialog(frame, "Something broke"))
            .unwrap();

        // 1 message line: title, blank, message, blank, hint plus borders
        let height = 1 + 6;
        let top = (24 - height) / 2;
        let hint_row = row_text(&terminal, top + height - 2);
        assert!(hint_row.contains("to dismiss"), "hint row was {hint_row:?}");
        let bottom = row_text(&terminal, top + height - 1);
        assert!(bottom.contains('─'));
        assert!(!bottom.contains("dismiss"));
    }

    #[test]
    fn test_wrap_short_text() {
        assert_eq!(wrap_text("hello world", 40), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_breaks_on_words() {
        assert_eq!(
            wrap_text("one two three", 8),
            vec!["one two", "three"]
        );
    }

    #[test]
    fn test_wrap_keeps_paragraphs() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
    }
}
