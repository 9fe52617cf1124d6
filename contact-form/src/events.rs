//! Form events and the event reducer.
//!
//! [`FormEvent`] is the serialized form of a user interaction. Events can
//! be parsed from JSON and replayed onto a [`ContactForm`] with
//! [`FormEvent::apply`], which makes recorded interaction sequences
//! exact scripts for driving the component.

use serde::{Deserialize, Serialize};

use contact_form_core::{FormError, FormResult};
use contact_form_forms::Field;

use crate::form::ContactForm;

/// A single user interaction with the form.
///
/// The JSON representation is tagged by `type`, for example
/// `{"type":"change","field":"firstName","value":"nick"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FormEvent {
    /// The value of one input changed.
    Change { field: Field, value: String },
    /// Focus left one input.
    Blur { field: Field },
    /// The submit button was pressed.
    Submit,
}

impl FormEvent {
    /// Applies this event to `form`.
    ///
    /// The outcome of a `Submit` is observable on the form afterwards
    /// through [`ContactForm::submitted`] and [`ContactForm::errors`].
    pub fn apply(self, form: &mut ContactForm) {
        match self {
            Self::Change { field, value } => form.change(field, value),
            Self::Blur { field } => form.blur(field),
            Self::Submit => {
                form.submit();
            }
        }
    }

    /// Parses an event from its JSON representation.
    pub fn from_json(json: &str) -> FormResult<Self> {
        serde_json::from_str(json).map_err(|e| FormError::Serialization(e.to_string()))
    }

    /// Serializes this event to JSON.
    pub fn to_json(&self) -> FormResult<String> {
        serde_json::to_string(self).map_err(|e| FormError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::DisplayState;

    #[test]
    fn test_parse_change_event() {
        let event =
            FormEvent::from_json(r#"{"type":"change","field":"firstName","value":"nick"}"#)
                .unwrap();
        assert_eq!(
            event,
            FormEvent::Change {
                field: Field::FirstName,
                value: "nick".to_string()
            }
        );
    }

    #[test]
    fn test_parse_blur_and_submit_events() {
        let blur = FormEvent::from_json(r#"{"type":"blur","field":"email"}"#).unwrap();
        assert_eq!(blur, FormEvent::Blur { field: Field::Email });

        let submit = FormEvent::from_json(r#"{"type":"submit"}"#).unwrap();
        assert_eq!(submit, FormEvent::Submit);
    }

    #[test]
    fn test_parse_rejects_unknown_event_type() {
        let err = FormEvent::from_json(r#"{"type":"hover","field":"email"}"#).unwrap_err();
        assert!(err.to_string().starts_with("Serialization error:"));
    }

    #[test]
    fn test_parse_rejects_unknown_field() {
        let result = FormEvent::from_json(r#"{"type":"blur","field":"nickname"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_event_to_json() {
        let event = FormEvent::Change {
            field: Field::Email,
            value: "nick@nick.com".to_string(),
        };
        let json = event.to_json().unwrap();
        assert_eq!(
            json,
            r#"{"type":"change","field":"email","value":"nick@nick.com"}"#
        );
    }

    #[test]
    fn test_apply_event_sequence_drives_form() {
        let script = [
            r#"{"type":"change","field":"firstName","value":"nicholas"}"#,
            r#"{"type":"change","field":"lastName","value":"samples"}"#,
            r#"{"type":"change","field":"email","value":"nick@nick.com"}"#,
            r#"{"type":"blur","field":"email"}"#,
            r#"{"type":"submit"}"#,
        ];

        let mut form = ContactForm::new();
        for line in script {
            FormEvent::from_json(line).unwrap().apply(&mut form);
        }

        assert_eq!(form.display_state(), DisplayState::Submitted);
        assert_eq!(form.submitted().unwrap().email, "nick@nick.com");
    }

    #[test]
    fn test_apply_failed_submit_records_errors() {
        let mut form = ContactForm::new();
        FormEvent::Submit.apply(&mut form);

        assert_eq!(form.display_state(), DisplayState::Editing);
        assert_eq!(form.errors().len(), 3);
    }
}
