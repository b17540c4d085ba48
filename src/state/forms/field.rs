//! Form field value objects

use crate::state::Major;

/// Identifies one of the four attendance form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FullName,
    Email,
    PhoneNumber,
    Major,
}

impl FieldId {
    /// All fields in form order
    pub const ALL: [FieldId; 4] = [
        FieldId::FullName,
        FieldId::Email,
        FieldId::PhoneNumber,
        FieldId::Major,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::FullName => "Full name",
            FieldId::Email => "Email",
            FieldId::PhoneNumber => "Phone",
            FieldId::Major => "Major",
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    Choice(Option<Major>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: FieldId,
    pub value: FieldValue,
}

impl FormField {
    /// Create a new text field
    pub fn text(id: FieldId) -> Self {
        Self {
            id,
            value: FieldValue::Text(String::new()),
        }
    }

    /// Create a new choice field with no selection
    pub fn choice(id: FieldId) -> Self {
        Self {
            id,
            value: FieldValue::Choice(None),
        }
    }

    /// Get the raw text value (wire value for choice fields, empty if unselected)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choice(Some(m)) => m.as_str(),
            FieldValue::Choice(None) => "",
        }
    }

    /// Get the selected choice, if any
    pub fn as_choice(&self) -> Option<Major> {
        match &self.value {
            FieldValue::Choice(c) => *c,
            FieldValue::Text(_) => None,
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Choice(_) => {
                // Choice fields don't take text input
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Choice(_) => {}
        }
    }

    /// Advance a choice field to the next option (wraps around)
    pub fn next_choice(&mut self) {
        if let FieldValue::Choice(c) = &mut self.value {
            *c = Some(match c {
                None => Major::ALL[0],
                Some(m) => m.next(),
            });
        }
    }

    /// Move a choice field to the previous option (wraps around)
    pub fn prev_choice(&mut self) {
        if let FieldValue::Choice(c) = &mut self.value {
            *c = Some(match c {
                None => Major::ALL[Major::ALL.len() - 1],
                Some(m) => m.prev(),
            });
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Choice(c) => *c = None,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice(Some(m)) => m.label().to_string(),
            FieldValue::Choice(None) => "Select a major".to_string(),
        }
    }
}
