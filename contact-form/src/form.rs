//! The contact form component.
//!
//! [`ContactForm`] owns the full component state: the live field values,
//! the current validation errors, and the snapshot captured by the last
//! successful submission. User interactions arrive through [`change`],
//! [`blur`], and [`submit`]; rendering reads the state back out through
//! [`bound_fields`] and the accessors.
//!
//! [`change`]: ContactForm::change
//! [`blur`]: ContactForm::blur
//! [`submit`]: ContactForm::submit
//! [`bound_fields`]: ContactForm::bound_fields

use std::fmt;

use contact_form_core::logging::form_span;
use contact_form_core::{FormError, FormResult};
use contact_form_forms::{
    contact_fields, validate_all, validate_field, BoundField, ErrorSet, Field, FieldDef,
    FormFields, SubmittedResult,
};

/// What the component is currently doing.
///
/// `Submitted` only means the most recent submit succeeded; the captured
/// result outlives the state and stays available while the user edits
/// again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    /// The user is filling in the form.
    Editing,
    /// The most recent submit succeeded and nothing has changed since.
    Submitted,
}

impl fmt::Display for DisplayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Editing => "editing",
            Self::Submitted => "submitted",
        };
        write!(f, "{name}")
    }
}

/// The contact form component state machine.
pub struct ContactForm {
    defs: Vec<FieldDef>,
    fields: FormFields,
    errors: ErrorSet,
    submitted: Option<SubmittedResult>,
    state: DisplayState,
}

impl ContactForm {
    /// Creates an empty contact form in the editing state.
    pub fn new() -> Self {
        Self {
            defs: contact_fields(),
            fields: FormFields::new(),
            errors: ErrorSet::new(),
            submitted: None,
            state: DisplayState::Editing,
        }
    }

    /// Records a new value for `field` and revalidates it immediately.
    ///
    /// Only the changed field is revalidated, so errors on other fields
    /// are left alone. Any edit returns the component to the editing
    /// state; a previously captured submission stays available.
    pub fn change(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        tracing::debug!("Field {field} changed ({} chars)", value.chars().count());
        let error = validate_field(field, &value);
        self.fields.set(field, value);
        self.errors.set(field, error);
        self.state = DisplayState::Editing;
    }

    /// Revalidates `field` against its current value.
    ///
    /// Mirrors the focus leaving an input. The value and the display
    /// state are untouched.
    pub fn blur(&mut self, field: Field) {
        let error = validate_field(field, self.fields.get(field));
        self.errors.set(field, error);
    }

    /// Attempts to submit the form. Returns `true` on success.
    ///
    /// Every field is validated. On success the current values are
    /// captured into a [`SubmittedResult`], the inputs and errors are
    /// cleared, and the component enters the submitted state. On failure
    /// the errors are recorded, the values are kept, and any previously
    /// captured result is preserved.
    pub fn submit(&mut self) -> bool {
        let span = form_span("contact");
        let _guard = span.enter();

        let errors = validate_all(&self.fields);
        if errors.is_empty() {
            tracing::info!("Form submitted");
            self.submitted = Some(SubmittedResult::from_fields(&self.fields));
            self.fields.clear();
            self.errors.clear();
            self.state = DisplayState::Submitted;
            true
        } else {
            tracing::debug!("Form rejected with {} error(s)", errors.len());
            self.errors = errors;
            self.state = DisplayState::Editing;
            false
        }
    }

    /// The live field values.
    pub fn values(&self) -> &FormFields {
        &self.fields
    }

    /// The current value of one field.
    pub fn value(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    /// The current validation errors.
    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    /// The snapshot captured by the last successful submission, if any.
    pub fn submitted(&self) -> Option<&SubmittedResult> {
        self.submitted.as_ref()
    }

    /// The current display state.
    pub fn display_state(&self) -> DisplayState {
        self.state
    }

    /// The form's field definitions, in rendering order.
    pub fn field_defs(&self) -> &[FieldDef] {
        &self.defs
    }

    /// Returns bound fields for rendering, in definition order.
    pub fn bound_fields(&self) -> Vec<BoundField> {
        self.defs
            .iter()
            .map(|def| {
                BoundField::new(
                    def,
                    self.fields.get(def.field),
                    self.errors.get(def.field).cloned(),
                )
            })
            .collect()
    }

    /// Serializes the full component state as a JSON value.
    ///
    /// The shape is `{"fields", "errors", "submitted", "state"}`, with
    /// errors keyed by wire name and `submitted` null until a submission
    /// succeeds.
    pub fn as_json(&self) -> FormResult<serde_json::Value> {
        let mut errors = serde_json::Map::new();
        for (field, error) in self.errors.iter() {
            let value = serde_json::to_value(error)
                .map_err(|e| FormError::Serialization(e.to_string()))?;
            errors.insert(field.name().to_string(), value);
        }

        let fields = serde_json::to_value(&self.fields)
            .map_err(|e| FormError::Serialization(e.to_string()))?;
        let submitted = serde_json::to_value(&self.submitted)
            .map_err(|e| FormError::Serialization(e.to_string()))?;

        Ok(serde_json::json!({
            "fields": fields,
            "errors": errors,
            "submitted": submitted,
            "state": self.state.to_string(),
        }))
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.change(Field::FirstName, "nicholas");
        form.change(Field::LastName, "samples");
        form.change(Field::Email, "nick@nick.com");
        form
    }

    #[test]
    fn test_new_form_is_blank_and_editing() {
        let form = ContactForm::new();
        assert_eq!(form.value(Field::FirstName), "");
        assert!(form.errors().is_empty());
        assert_eq!(form.submitted(), None);
        assert_eq!(form.display_state(), DisplayState::Editing);
    }

    #[test]
    fn test_change_records_value() {
        let mut form = ContactForm::new();
        form.change(Field::LastName, "samples");
        assert_eq!(form.value(Field::LastName), "samples");
        assert!(!form.errors().contains(Field::LastName));
    }

    #[test]
    fn test_change_validates_immediately() {
        let mut form = ContactForm::new();
        form.change(Field::FirstName, "nick");
        let error = form.errors().get(Field::FirstName).unwrap();
        assert_eq!(error.message, "Error: firstName must have at least 5 characters.");
    }

    #[test]
    fn test_change_clears_error_once_fixed() {
        let mut form = ContactForm::new();
        form.change(Field::FirstName, "nick");
        assert!(form.errors().contains(Field::FirstName));

        form.change(Field::FirstName, "nicholas");
        assert!(!form.errors().contains(Field::FirstName));
    }

    #[test]
    fn test_change_leaves_other_fields_alone() {
        let mut form = ContactForm::new();
        form.submit();
        assert_eq!(form.errors().len(), 3);

        form.change(Field::FirstName, "nicholas");
        assert!(!form.errors().contains(Field::FirstName));
        assert!(form.errors().contains(Field::LastName));
        assert!(form.errors().contains(Field::Email));
    }

    #[test]
    fn test_blur_revalidates_current_value() {
        let mut form = ContactForm::new();
        form.blur(Field::Email);
        let error = form.errors().get(Field::Email).unwrap();
        assert_eq!(error.code, "required");

        form.change(Field::Email, "nick@nick.com");
        form.blur(Field::Email);
        assert!(!form.errors().contains(Field::Email));
    }

    #[test]
    fn test_submit_empty_form_fails_with_three_errors() {
        let mut form = ContactForm::new();
        assert!(!form.submit());
        assert_eq!(form.errors().len(), 3);
        assert_eq!(form.submitted(), None);
        assert_eq!(form.display_state(), DisplayState::Editing);
    }

    #[test]
    fn test_submit_success_captures_and_clears() {
        let mut form = valid_form();
        form.change(Field::Message, "hello from the message");

        assert!(form.submit());
        assert_eq!(form.display_state(), DisplayState::Submitted);

        let result = form.submitted().unwrap();
        assert_eq!(result.first_name, "nicholas");
        assert_eq!(result.message.as_deref(), Some("hello from the message"));

        for field in Field::all() {
            assert_eq!(form.value(field), "", "{field} should be cleared");
        }
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_submit_without_message_succeeds() {
        let mut form = valid_form();
        assert!(form.submit());
        assert_eq!(form.submitted().unwrap().message, None);
    }

    #[test]
    fn test_failed_submit_keeps_values_and_previous_result() {
        let mut form = valid_form();
        form.submit();

        form.change(Field::Email, "not-an-email");
        assert!(!form.submit());
        assert_eq!(form.value(Field::Email), "not-an-email");
        // The earlier capture survives the rejected attempt.
        assert_eq!(form.submitted().unwrap().first_name, "nicholas");
    }

    #[test]
    fn test_change_after_submit_returns_to_editing() {
        let mut form = valid_form();
        form.submit();
        assert_eq!(form.display_state(), DisplayState::Submitted);

        form.change(Field::FirstName, "n");
        assert_eq!(form.display_state(), DisplayState::Editing);
        assert!(form.submitted().is_some());
    }

    #[test]
    fn test_second_submit_replaces_result() {
        let mut form = valid_form();
        form.submit();

        form.change(Field::FirstName, "margaret");
        form.change(Field::LastName, "hamilton");
        form.change(Field::Email, "margaret@nasa.gov");
        assert!(form.submit());
        assert_eq!(form.submitted().unwrap().first_name, "margaret");
    }

    #[test]
    fn test_bound_fields_reflect_state() {
        let mut form = ContactForm::new();
        form.change(Field::FirstName, "nick");

        let bound = form.bound_fields();
        assert_eq!(bound.len(), 4);
        assert_eq!(bound[0].value, "nick");
        assert!(bound[0].has_error());
        assert!(!bound[1].has_error());
    }

    #[test]
    fn test_as_json_shape() {
        let mut form = ContactForm::new();
        form.change(Field::FirstName, "nick");

        let json = form.as_json().unwrap();
        assert_eq!(json["fields"]["firstName"], "nick");
        assert_eq!(
            json["errors"]["firstName"]["code"],
            "min_length"
        );
        assert_eq!(json["submitted"], serde_json::Value::Null);
        assert_eq!(json["state"], "editing");
    }

    #[test]
    fn test_as_json_after_submit() {
        let mut form = valid_form();
        form.submit();

        let json = form.as_json().unwrap();
        assert_eq!(json["submitted"]["email"], "nick@nick.com");
        assert_eq!(json["state"], "submitted");
        assert!(json["errors"].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_display_state_names() {
        assert_eq!(DisplayState::Editing.to_string(), "editing");
        assert_eq!(DisplayState::Submitted.to_string(), "submitted");
    }
}
