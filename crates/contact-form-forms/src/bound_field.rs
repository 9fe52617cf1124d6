//! Bound fields, field definitions paired with data and errors.
//!
//! A [`BoundField`] combines a field definition, its current value, any
//! validation error, and the widget used for rendering. It is the unit
//! the form renderer iterates over when producing form rows.

use std::collections::HashMap;

use contact_form_core::ValidationError;

use crate::fields::FieldDef;
use crate::widgets::{self, escape_html, Widget};

/// A form field bound to its current value and validation state.
pub struct BoundField {
    /// Owned snapshot of the field definition.
    pub def: FieldDef,
    /// The current input value.
    pub value: String,
    /// The current validation error, if any.
    pub error: Option<ValidationError>,
    /// The widget instance used for rendering.
    pub widget: Box<dyn Widget>,
}

impl BoundField {
    /// Creates a new `BoundField` from a field definition and current state.
    pub fn new(def: &FieldDef, value: impl Into<String>, error: Option<ValidationError>) -> Self {
        let widget = widgets::create_widget(def.widget);
        Self {
            def: def.clone(),
            value: value.into(),
            error,
            widget,
        }
    }

    /// Returns the auto-generated HTML `id` for this field's control.
    pub fn auto_id(&self) -> String {
        format!("id_{}", self.def.field.name())
    }

    /// Renders a `<label>` element wired to this field's control.
    pub fn label_tag(&self) -> String {
        let label_id = self.widget.id_for_label(&self.auto_id());
        format!(
            r#"<label for="{label_id}">{}</label>"#,
            escape_html(&self.def.display_label())
        )
    }

    /// Renders the widget HTML for this bound field.
    ///
    /// The control's `id`, `minlength`, and `required` attributes are
    /// derived from the definition; `extra_attrs` can add to or override
    /// everything except `id`.
    pub fn render(&self, extra_attrs: &HashMap<String, String>) -> String {
        let mut attrs = extra_attrs.clone();
        attrs.entry("id".to_string()).or_insert_with(|| self.auto_id());
        if let Some(min) = self.def.min_length {
            attrs.insert("minlength".to_string(), min.to_string());
        }
        if self.def.required {
            attrs.insert("required".to_string(), "required".to_string());
        }
        self.widget.render(self.def.field.name(), &self.value, &attrs)
    }

    /// Returns `true` if this field currently has an error.
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Renders the error as an HTML `<ul>` element, or nothing.
    pub fn errors_as_ul(&self) -> String {
        match &self.error {
            Some(error) => format!(
                r#"<ul class="errorlist"><li>{}</li></ul>"#,
                escape_html(&error.message)
            ),
            None => String::new(),
        }
    }

    /// Renders the full form row: label, control, and error list.
    pub fn as_row(&self) -> String {
        format!(
            r#"<div class="field">{}{}{}</div>"#,
            self.label_tag(),
            self.render(&HashMap::new()),
            self.errors_as_ul()
        )
    }
}
