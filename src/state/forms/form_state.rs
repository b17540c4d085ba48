//! Attendance form state

use super::field::{FieldId, FormField};
use crate::state::SubmissionRecord;
use std::collections::HashSet;

/// Index of the submit button row (after the four fields)
pub const BUTTON_ROW: usize = FieldId::ALL.len();

/// State for the attendance registration form
#[derive(Debug, Clone)]
pub struct AttendanceForm {
    pub full_name: FormField,
    pub email: FormField,
    pub phone_number: FormField,
    pub major: FormField,
    pub active_field_index: usize,
    /// Fields the user has edited at least once; gates inline error display
    touched: HashSet<FieldId>,
}

impl AttendanceForm {
    pub fn new() -> Self {
        Self {
            full_name: FormField::text(FieldId::FullName),
            email: FormField::text(FieldId::Email),
            phone_number: FormField::text(FieldId::PhoneNumber),
            major: FormField::choice(FieldId::Major),
            active_field_index: 0,
            touched: HashSet::new(),
        }
    }

    /// Number of focus stops: four fields plus the button row
    pub fn field_count(&self) -> usize {
        BUTTON_ROW + 1
    }

    /// Returns true if the submit button row is currently active
    pub fn is_button_row_active(&self) -> bool {
        self.active_field_index == BUTTON_ROW
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.field_count();
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.field_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// Id of the active field, or None on the button row
    pub fn active_field_id(&self) -> Option<FieldId> {
        FieldId::ALL.get(self.active_field_index).copied()
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        match id {
            FieldId::FullName => &self.full_name,
            FieldId::Email => &self.email,
            FieldId::PhoneNumber => &self.phone_number,
            FieldId::Major => &self.major,
        }
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        match id {
            FieldId::FullName => &mut self.full_name,
            FieldId::Email => &mut self.email,
            FieldId::PhoneNumber => &mut self.phone_number,
            FieldId::Major => &mut self.major,
        }
    }

    /// Raw text value of a field, as seen by the validation rules
    pub fn value_of(&self, id: FieldId) -> &str {
        self.field(id).as_text()
    }

    /// Mark a field as edited
    pub fn touch(&mut self, id: FieldId) {
        self.touched.insert(id);
    }

    pub fn is_touched(&self, id: FieldId) -> bool {
        self.touched.contains(&id)
    }

    /// Mark every field as edited (used when a submit attempt is blocked)
    pub fn touch_all(&mut self) {
        self.touched.extend(FieldId::ALL);
    }

    /// Clear all values, touched state, and the focus position
    pub fn reset(&mut self) {
        for id in FieldId::ALL {
            self.field_mut(id).clear();
        }
        self.touched.clear();
        self.active_field_index = 0;
    }

    /// Freeze the current values into a submission record.
    ///
    /// Returns None if no major is selected; callers validate first.
    pub fn to_record(&self) -> Option<SubmissionRecord> {
        Some(SubmissionRecord {
            full_name: self.full_name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            phone_number: self.phone_number.as_text().to_string(),
            major: self.major.as_choice()?,
        })
    }
}

impl Default for AttendanceForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Major;

    fn filled_form() -> AttendanceForm {
        let mut form = AttendanceForm::new();
        for c in "Ada Lovelace".chars() {
            form.full_name.push_char(c);
        }
        for c in "ada@example.com".chars() {
            form.email.push_char(c);
        }
        for c in "0541234567".chars() {
            form.phone_number.push_char(c);
        }
        form.major.next_choice();
        form
    }

    mod navigation {
        use super::*;

        #[test]
        fn test_new_starts_on_first_field() {
            let form = AttendanceForm::new();
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.active_field_id(), Some(FieldId::FullName));
        }

        #[test]
        fn test_field_count_includes_button_row() {
            let form = AttendanceForm::new();
            assert_eq!(form.field_count(), 5);
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = AttendanceForm::new();
            for _ in 0..form.field_count() {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0); // wrapped back
        }

        #[test]
        fn test_prev_field_wraps_to_button_row() {
            let mut form = AttendanceForm::new();
            form.prev_field();
            assert!(form.is_button_row_active());
            assert!(form.active_field_id().is_none());
        }

        #[test]
        fn test_button_row_follows_last_field() {
            let mut form = AttendanceForm::new();
            for _ in 0..FieldId::ALL.len() {
                form.next_field();
            }
            assert!(form.is_button_row_active());
        }
    }

    mod touched {
        use super::*;

        #[test]
        fn test_fields_start_untouched() {
            let form = AttendanceForm::new();
            for id in FieldId::ALL {
                assert!(!form.is_touched(id));
            }
        }

        #[test]
        fn test_touch_single_field() {
            let mut form = AttendanceForm::new();
            form.touch(FieldId::Email);
            assert!(form.is_touched(FieldId::Email));
            assert!(!form.is_touched(FieldId::FullName));
        }

        #[test]
        fn test_touch_all_marks_every_field() {
            let mut form = AttendanceForm::new();
            form.touch_all();
            for id in FieldId::ALL {
                assert!(form.is_touched(id));
            }
        }
    }

    mod reset {
        use super::*;

        #[test]
        fn test_reset_clears_values_and_touched() {
            let mut form = filled_form();
            form.touch_all();
            form.active_field_index = BUTTON_ROW;

            form.reset();

            for id in FieldId::ALL {
                assert_eq!(form.value_of(id), "");
                assert!(!form.is_touched(id));
            }
            assert_eq!(form.active_field_index, 0);
            assert!(form.major.as_choice().is_none());
        }
    }

    mod record {
        use super::*;

        #[test]
        fn test_to_record_freezes_field_values() {
            let form = filled_form();
            let record = form.to_record().unwrap();
            assert_eq!(record.full_name, "Ada Lovelace");
            assert_eq!(record.email, "ada@example.com");
            assert_eq!(record.phone_number, "0541234567");
            assert_eq!(record.major, Major::ComputerScience);
        }

        #[test]
        fn test_to_record_requires_major() {
            let mut form = filled_form();
            form.major.clear();
            assert!(form.to_record().is_none());
        }
    }
}
