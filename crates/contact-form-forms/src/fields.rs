//! Field identity and definitions.
//!
//! [`Field`] is the typed identifier for the four contact-form fields.
//! Every per-field lookup (wire name, label, result test id, rule set)
//! goes through this enum, so field access is total and checked at compile
//! time. [`FieldDef`] describes how a single field is labeled and rendered;
//! validation rules live in [`crate::validation`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use contact_form_core::FormError;

use crate::validation::FIRST_NAME_MIN_LENGTH;
use crate::widgets::WidgetKind;

/// Identifies one of the contact form's fields.
///
/// Variants are listed in declaration order, which fixes the iteration
/// order of [`ErrorSet`](crate::state::ErrorSet) and the rendering order
/// of form rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// The first-name input. Mandatory, minimum five characters.
    FirstName,
    /// The last-name input. Mandatory.
    LastName,
    /// The email input. Mandatory, must look like an email address.
    Email,
    /// The free-form message textarea. Optional.
    Message,
}

impl Field {
    /// All fields in declaration order.
    pub const fn all() -> [Self; 4] {
        [Self::FirstName, Self::LastName, Self::Email, Self::Message]
    }

    /// The wire name used in HTML `name` attributes and JSON payloads.
    pub const fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// The identifier of this field's element in the submitted-result block.
    ///
    /// Distinct from the input element ids so the result values can be
    /// addressed independently of the inputs.
    pub const fn display_test_id(self) -> &'static str {
        match self {
            Self::FirstName => "firstnameDisplay",
            Self::LastName => "lastnameDisplay",
            Self::Email => "emailDisplay",
            Self::Message => "messageDisplay",
        }
    }

    /// Whether this field must be valid for a submission to succeed.
    pub const fn is_required(self) -> bool {
        !matches!(self, Self::Message)
    }

    /// The position of this field in declaration order.
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::FirstName => 0,
            Self::LastName => 1,
            Self::Email => 2,
            Self::Message => 3,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "firstName" => Ok(Self::FirstName),
            "lastName" => Ok(Self::LastName),
            "email" => Ok(Self::Email),
            "message" => Ok(Self::Message),
            other => Err(FormError::UnknownField(other.to_string())),
        }
    }
}

/// Describes how a single form field is labeled and rendered.
///
/// A `FieldDef` carries presentation metadata only: the label text, the
/// required marker, the advertised minimum length, and the widget used
/// for rendering.
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// The field this definition describes.
    pub field: Field,
    /// Human-readable label, without the required marker.
    pub label: String,
    /// Whether the displayed label carries the `*` required marker.
    pub required: bool,
    /// Minimum length (characters) advertised on the control.
    pub min_length: Option<usize>,
    /// The widget used for rendering.
    pub widget: WidgetKind,
}

impl FieldDef {
    /// Creates a new `FieldDef` with defaults taken from the field itself.
    ///
    /// The label defaults to the wire name, the required marker to
    /// [`Field::is_required`], and the widget to [`default_widget_for`].
    pub fn new(field: Field) -> Self {
        Self {
            field,
            label: field.name().to_string(),
            required: field.is_required(),
            min_length: None,
            widget: default_widget_for(field),
        }
    }

    /// Sets the label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets whether the displayed label carries the required marker.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the minimum length advertised on the control.
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Sets the widget kind.
    pub fn widget(mut self, widget: WidgetKind) -> Self {
        self.widget = widget;
        self
    }

    /// The label text as displayed, with `*` appended for required fields.
    pub fn display_label(&self) -> String {
        if self.required {
            format!("{}*", self.label)
        } else {
            self.label.clone()
        }
    }
}

/// Returns the default widget kind for a field.
pub const fn default_widget_for(field: Field) -> WidgetKind {
    match field {
        Field::FirstName | Field::LastName => WidgetKind::TextInput,
        Field::Email => WidgetKind::EmailInput,
        Field::Message => WidgetKind::Textarea,
    }
}

/// The contact form's field definitions, in declaration order.
pub fn contact_fields() -> Vec<FieldDef> {
    vec![
        FieldDef::new(Field::FirstName)
            .label("First Name")
            .min_length(FIRST_NAME_MIN_LENGTH),
        FieldDef::new(Field::LastName).label("Last Name"),
        FieldDef::new(Field::Email).label("Email"),
        FieldDef::new(Field::Message).label("Message"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names() {
        assert_eq!(Field::FirstName.name(), "firstName");
        assert_eq!(Field::LastName.name(), "lastName");
        assert_eq!(Field::Email.name(), "email");
        assert_eq!(Field::Message.name(), "message");
    }

    #[test]
    fn test_field_display_test_ids() {
        assert_eq!(Field::FirstName.display_test_id(), "firstnameDisplay");
        assert_eq!(Field::LastName.display_test_id(), "lastnameDisplay");
        assert_eq!(Field::Email.display_test_id(), "emailDisplay");
        assert_eq!(Field::Message.display_test_id(), "messageDisplay");
    }

    #[test]
    fn test_field_required_flags() {
        assert!(Field::FirstName.is_required());
        assert!(Field::LastName.is_required());
        assert!(Field::Email.is_required());
        assert!(!Field::Message.is_required());
    }

    #[test]
    fn test_field_all_declaration_order() {
        assert_eq!(
            Field::all(),
            [Field::FirstName, Field::LastName, Field::Email, Field::Message]
        );
    }

    #[test]
    fn test_field_from_str() {
        assert_eq!("firstName".parse::<Field>().unwrap(), Field::FirstName);
        assert_eq!("message".parse::<Field>().unwrap(), Field::Message);

        let err = "nickname".parse::<Field>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown field: nickname");
    }

    #[test]
    fn test_field_display_uses_wire_name() {
        assert_eq!(Field::FirstName.to_string(), "firstName");
    }

    #[test]
    fn test_field_serializes_as_wire_name() {
        let json = serde_json::to_string(&Field::FirstName).unwrap();
        assert_eq!(json, r#""firstName""#);

        let field: Field = serde_json::from_str(r#""lastName""#).unwrap();
        assert_eq!(field, Field::LastName);
    }

    #[test]
    fn test_field_def_defaults() {
        let def = FieldDef::new(Field::Email);
        assert_eq!(def.label, "email");
        assert!(def.required);
        assert_eq!(def.min_length, None);
        assert_eq!(def.widget, WidgetKind::EmailInput);
    }

    #[test]
    fn test_field_def_builder_chain() {
        let def = FieldDef::new(Field::FirstName)
            .label("First Name")
            .min_length(5)
            .required(true)
            .widget(WidgetKind::TextInput);
        assert_eq!(def.label, "First Name");
        assert_eq!(def.min_length, Some(5));
        assert!(def.required);
        assert_eq!(def.widget, WidgetKind::TextInput);
    }

    #[test]
    fn test_display_label_marks_required_fields() {
        let def = FieldDef::new(Field::LastName).label("Last Name");
        assert_eq!(def.display_label(), "Last Name*");

        let def = FieldDef::new(Field::Message).label("Message");
        assert_eq!(def.display_label(), "Message");
    }

    #[test]
    fn test_default_widget_for_field() {
        assert_eq!(default_widget_for(Field::FirstName), WidgetKind::TextInput);
        assert_eq!(default_widget_for(Field::LastName), WidgetKind::TextInput);
        assert_eq!(default_widget_for(Field::Email), WidgetKind::EmailInput);
        assert_eq!(default_widget_for(Field::Message), WidgetKind::Textarea);
    }

    #[test]
    fn test_contact_fields_declaration_order_and_labels() {
        let defs = contact_fields();
        assert_eq!(defs.len(), 4);
        assert_eq!(defs[0].field, Field::FirstName);
        assert_eq!(defs[0].display_label(), "First Name*");
        assert_eq!(defs[0].min_length, Some(FIRST_NAME_MIN_LENGTH));
        assert_eq!(defs[1].display_label(), "Last Name*");
        assert_eq!(defs[2].display_label(), "Email*");
        assert_eq!(defs[3].display_label(), "Message");
        assert_eq!(defs[3].widget, WidgetKind::Textarea);
    }
}
