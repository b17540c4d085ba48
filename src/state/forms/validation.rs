//! Declarative validation rules for the attendance form
//!
//! Each field maps to an ordered list of predicate+message pairs; the first
//! failing rule supplies the field's error text. Evaluation is independent
//! of any UI binding.

use super::field::FieldId;
use super::form_state::AttendanceForm;
use validator::ValidateEmail;

/// A single validation rule: predicate over the field's raw text value
pub struct Rule {
    pub check: fn(&str) -> bool,
    pub message: &'static str,
}

const FULL_NAME_RULES: &[Rule] = &[Rule {
    check: not_empty,
    message: "Full name is required",
}];

const EMAIL_RULES: &[Rule] = &[
    Rule {
        check: not_empty,
        message: "Email is required",
    },
    Rule {
        check: email_grammar,
        message: "Invalid email address",
    },
];

const PHONE_RULES: &[Rule] = &[
    Rule {
        check: not_empty,
        message: "Phone number is required",
    },
    Rule {
        check: ten_digits,
        message: "Phone number should consist of ten digits in the format 054XXXXXXX",
    },
];

const MAJOR_RULES: &[Rule] = &[Rule {
    check: not_empty,
    message: "Major is required",
}];

fn not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

fn email_grammar(value: &str) -> bool {
    value.validate_email()
}

fn ten_digits(value: &str) -> bool {
    value.len() == 10 && value.chars().all(|c| c.is_ascii_digit())
}

/// Ordered rules for a field
pub fn rules(field: FieldId) -> &'static [Rule] {
    match field {
        FieldId::FullName => FULL_NAME_RULES,
        FieldId::Email => EMAIL_RULES,
        FieldId::PhoneNumber => PHONE_RULES,
        FieldId::Major => MAJOR_RULES,
    }
}

/// First failing rule's message for a field, if any
pub fn field_error(form: &AttendanceForm, field: FieldId) -> Option<&'static str> {
    let value = form.value_of(field);
    rules(field)
        .iter()
        .find(|rule| !(rule.check)(value))
        .map(|rule| rule.message)
}

/// First invalid field across the whole form, in form order
pub fn first_error(form: &AttendanceForm) -> Option<(FieldId, &'static str)> {
    FieldId::ALL
        .into_iter()
        .find_map(|field| field_error(form, field).map(|message| (field, message)))
}
