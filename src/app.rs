//! Application state and core logic

use crate::backend::{AttendanceApi, AttendanceClient, SubmitError};
use crate::config::TuiConfig;
use crate::state::{validation, AppState, FieldId, SubmissionRecord};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Outcome of one submission request
type SubmitOutcome = Result<String, SubmitError>;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the attendance service
    backend: Arc<dyn AttendanceApi>,
    /// Delivers submission outcomes back to the event loop
    outcome_tx: mpsc::UnboundedSender<SubmitOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<SubmitOutcome>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &TuiConfig) -> Self {
        Self::with_backend(Arc::new(AttendanceClient::from_config(config)))
    }

    /// Create an App with an explicit backend
    pub fn with_backend(backend: Arc<dyn AttendanceApi>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            backend,
            outcome_tx,
            outcome_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        let on_button_row = self.state.form.is_button_row_active();
        let on_major = self.state.form.active_field_id() == Some(FieldId::Major);

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            // Submit shortcut (works from anywhere)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit();
            }
            KeyCode::Enter if on_button_row => self.submit(),
            // Enter on a field advances to the next one
            KeyCode::Enter => self.state.form.next_field(),
            KeyCode::Left if on_major => {
                self.state.form.major.prev_choice();
                self.state.form.touch(FieldId::Major);
            }
            KeyCode::Right if on_major => {
                self.state.form.major.next_choice();
                self.state.form.touch(FieldId::Major);
            }
            KeyCode::Char(c) if !on_button_row && !on_major => {
                self.form_input_char(c, key.modifiers);
            }
            KeyCode::Backspace if !on_button_row && !on_major => {
                if let Some(id) = self.state.form.active_field_id() {
                    self.state.form.field_mut(id).pop_char();
                    self.state.form.touch(id);
                }
            }
            _ => {}
        }
    }

    fn form_input_char(&mut self, c: char, modifiers: KeyModifiers) {
        let ch = if modifiers.contains(KeyModifiers::SHIFT) {
            c.to_ascii_uppercase()
        } else {
            c
        };
        if let Some(id) = self.state.form.active_field_id() {
            self.state.form.field_mut(id).push_char(ch);
            self.state.form.touch(id);
        }
    }

    /// Attempt a submission; spawns the network call on success
    pub fn submit(&mut self) {
        let Some(record) = self.begin_submit() else {
            return;
        };

        let backend = Arc::clone(&self.backend);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = backend.submit(record).await;
            let _ = tx.send(outcome);
        });
    }

    /// Validation gate and in-flight guard.
    ///
    /// Returns the frozen record when a network call should be issued.
    fn begin_submit(&mut self) -> Option<SubmissionRecord> {
        if self.state.submitting {
            return None;
        }

        // A blocked submit reveals every field's error
        self.state.form.touch_all();
        if let Some((field, message)) = validation::first_error(&self.state.form) {
            tracing::debug!(field = field.label(), message, "submission blocked");
            return None;
        }

        let record = self.state.form.to_record()?;
        self.state.error = None;
        self.state.submitting = true;
        Some(record)
    }

    /// Drain any finished submissions delivered by the background task
    pub fn poll_submission(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.finish_submit(outcome);
        }
    }

    /// Apply a submission outcome: banner, reset, back to idle
    fn finish_submit(&mut self, outcome: SubmitOutcome) {
        self.state.submitting = false;
        match outcome {
            Ok(message) => {
                self.state.error = None;
                self.state.success = Some(message);
            }
            Err(err) => {
                self.state.success = None;
                self.state.error = Some(err.to_string());
            }
        }
        // Fields are discarded whether the call succeeded or not
        self.state.form.reset();
    }
}
