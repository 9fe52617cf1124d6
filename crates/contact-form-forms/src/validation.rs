//! Field validation rules.
//!
//! Validation is table-driven: [`RULES`] lists every rule as a
//! `(field, code, message, check)` row, and both per-field and whole-form
//! validation walk the same table. For a given field the first failing
//! rule wins, so rule order within a field is significant.

use once_cell::sync::Lazy;
use regex::Regex;

use contact_form_core::ValidationError;

use crate::fields::Field;
use crate::state::{ErrorSet, FormFields};

/// Minimum number of characters the first name must have.
pub const FIRST_NAME_MIN_LENGTH: usize = 5;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$").expect("valid regex")
});

/// A single validation rule for one field.
///
/// `check` returns `true` when the value satisfies the rule.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// The field this rule applies to.
    pub field: Field,
    /// Machine-readable rule identifier.
    pub code: &'static str,
    /// The exact message shown when the rule fails.
    pub message: &'static str,
    check: fn(&str) -> bool,
}

impl Rule {
    /// Whether `value` satisfies this rule.
    pub fn passes(&self, value: &str) -> bool {
        (self.check)(value)
    }

    /// The error produced when this rule fails.
    pub fn to_error(&self) -> ValidationError {
        ValidationError::new(self.message, self.code)
    }
}

fn first_name_long_enough(value: &str) -> bool {
    value.chars().count() >= FIRST_NAME_MIN_LENGTH
}

fn is_present(value: &str) -> bool {
    !value.is_empty()
}

fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Every validation rule, grouped by field in declaration order.
///
/// The first name carries only the length rule, so a blank first name
/// reports the length message rather than a missing-field one. The email
/// rules are ordered so a blank email reports `required`, not `invalid`.
/// The message field has no rules.
static RULES: [Rule; 4] = [
    Rule {
        field: Field::FirstName,
        code: "min_length",
        message: "Error: firstName must have at least 5 characters.",
        check: first_name_long_enough,
    },
    Rule {
        field: Field::LastName,
        code: "required",
        message: "Error: lastName is a required field.",
        check: is_present,
    },
    Rule {
        field: Field::Email,
        code: "required",
        message: "Error: email is a required field.",
        check: is_present,
    },
    Rule {
        field: Field::Email,
        code: "invalid",
        message: "Error: email must be a valid email address.",
        check: is_email,
    },
];

/// All rules in table order.
pub fn rules() -> &'static [Rule] {
    &RULES
}

/// Validates a single value against `field`'s rules.
///
/// Returns the error of the first failing rule, or `None` when every
/// rule passes. Fields without rules always validate.
pub fn validate_field(field: Field, value: &str) -> Option<ValidationError> {
    RULES
        .iter()
        .filter(|rule| rule.field == field)
        .find(|rule| !rule.passes(value))
        .map(Rule::to_error)
}

/// Validates every field, collecting at most one error per field.
pub fn validate_all(fields: &FormFields) -> ErrorSet {
    let mut errors = ErrorSet::new();
    for field in Field::all() {
        errors.set(field, validate_field(field, fields.get(field)));
    }
    errors
}
