//! Attendance form rendering

use super::components::{render_button, BUTTON_HEIGHT};
use super::field_renderer::{draw_field, draw_field_error};
use crate::app::App;
use crate::state::{validation, FieldId};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Banner
            Constraint::Length(1), // Spacing
            Constraint::Length(3), // Full name
            Constraint::Length(1), // Full name error
            Constraint::Length(3), // Email
            Constraint::Length(1), // Email error
            Constraint::Length(3), // Phone
            Constraint::Length(1), // Phone error
            Constraint::Length(3), // Major
            Constraint::Length(1), // Major error
            Constraint::Length(BUTTON_HEIGHT), // Submit button
            Constraint::Length(1), // Help text
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let title = Paragraph::new(Span::styled(
        "Attendance",
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_banner(frame, chunks[1], app);

    let field_areas = [
        (FieldId::FullName, chunks[3], chunks[4]),
        (FieldId::Email, chunks[5], chunks[6]),
        (FieldId::PhoneNumber, chunks[7], chunks[8]),
        (FieldId::Major, chunks[9], chunks[10]),
    ];

    for (id, field_area, error_area) in field_areas {
        let is_active = app.state.form.active_field_id() == Some(id);
        draw_field(frame, field_area, app.state.form.field(id), is_active);

        // Error text renders only once the field has been interacted with
        if app.state.form.is_touched(id) {
            let message = validation::field_error(&app.state.form, id);
            draw_field_error(frame, error_area, message);
        }
    }

    draw_submit_button(frame, chunks[11], app);
    draw_help(frame, chunks[12]);
}

/// Draw the top-level error or success banner
fn draw_banner(frame: &mut Frame, area: Rect, app: &App) {
    let (message, color) = if let Some(error) = &app.state.error {
        (error.as_str(), Color::Red)
    } else if let Some(success) = &app.state.success {
        (success.as_str(), Color::Green)
    } else {
        return;
    };

    let banner = Paragraph::new(Span::styled(
        format!(" {message} "),
        Style::default()
            .fg(Color::White)
            .bg(color)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(banner, area);
}

fn draw_submit_button(frame: &mut Frame, area: Rect, app: &App) {
    // Fixed-width button centered in the row
    let button_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(16),
            Constraint::Min(0),
        ])
        .split(area)[1];

    let label = if app.state.submitting {
        "Submitting"
    } else {
        "Submit"
    };
    render_button(
        frame,
        button_area,
        label,
        app.state.form.is_button_row_active(),
        !app.state.submitting,
    );
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled("◂ ▸", Style::default().fg(Color::Cyan)),
        Span::raw(": choose major  "),
        Span::styled("Ctrl+S", Style::default().fg(Color::Cyan)),
        Span::raw(": submit  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": quit"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
