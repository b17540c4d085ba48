//! UI module for rendering the TUI

mod components;
mod field_renderer;
mod form;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    form::draw(frame, frame.area(), app);
}
