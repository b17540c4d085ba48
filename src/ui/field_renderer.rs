//! Field rendering utilities for the attendance form

use crate::state::{FieldValue, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a form field block with label, value, and focus highlight
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let is_choice = matches!(field.value, FieldValue::Choice(_));

    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value();

    let content = if is_choice {
        // Selector: show cycle arrows while focused instead of a cursor
        let line = if is_active {
            Line::from(vec![
                Span::styled("◂ ", Style::default().fg(Color::Cyan)),
                Span::styled(display_value, style),
                Span::styled(" ▸", Style::default().fg(Color::Cyan)),
            ])
        } else {
            Line::from(Span::styled(display_value, style))
        };
        Paragraph::new(line)
    } else {
        let cursor = if is_active { "▌" } else { "" };
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.id.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.block(block), area);
}

/// Draw the inline error line under a field (empty when there is no error)
pub fn draw_field_error(frame: &mut Frame, area: Rect, message: Option<&str>) {
    if let Some(message) = message {
        let error = Paragraph::new(Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(error, area);
    }
}
