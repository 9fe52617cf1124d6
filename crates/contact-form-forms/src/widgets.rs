//! Widgets for rendering HTML form controls.
//!
//! Widgets are the bridge between form fields and their HTML
//! representation. Each widget knows how to render itself as HTML and
//! how to generate an appropriate `id` attribute for its `<label>`
//! element. All user-provided text is escaped on the way out.

use std::collections::HashMap;
use std::fmt;

/// Enumerates the built-in widget types.
///
/// Each variant corresponds to a distinct HTML form control. Widgets are
/// matched by this enum for default widget selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    /// `<input type="text">`.
    TextInput,
    /// `<input type="email">`.
    EmailInput,
    /// `<textarea>`.
    Textarea,
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TextInput => "TextInput",
            Self::EmailInput => "EmailInput",
            Self::Textarea => "Textarea",
        };
        write!(f, "{name}")
    }
}

/// A trait for HTML form widgets.
///
/// Widgets are responsible for:
/// - Rendering an HTML control for a given field name and value
/// - Generating the `id` attribute for an associated `<label>` element
///
/// All widgets must be `Send + Sync` so forms can move across threads.
pub trait Widget: Send + Sync + fmt::Debug {
    /// Returns the widget kind enum variant.
    fn kind(&self) -> WidgetKind;

    /// Renders the widget as an HTML string.
    ///
    /// # Arguments
    /// - `name` - The HTML `name` attribute
    /// - `value` - The current value to display
    /// - `attrs` - Additional HTML attributes
    fn render(&self, name: &str, value: &str, attrs: &HashMap<String, String>) -> String;

    /// Returns the HTML `id` attribute value for a label targeting this widget.
    fn id_for_label(&self, id: &str) -> String;
}

/// Escapes HTML special characters in a string.
///
/// Replaces `&`, `<`, `>`, `"`, and `'` with their HTML entity equivalents.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Formats an HTML attributes map into a string like ` key="value" key2="value2"`.
///
/// Attribute values are escaped.
fn render_attrs(attrs: &HashMap<String, String>) -> String {
    if attrs.is_empty() {
        return String::new();
    }
    let mut parts: Vec<String> = attrs
        .iter()
        .map(|(k, v)| format!(r#" {k}="{}""#, escape_html(v)))
        .collect();
    parts.sort(); // deterministic output for testing
    parts.join("")
}

// ---------------------------------------------------------------------------
// Built-in widgets
// ---------------------------------------------------------------------------

/// A basic `<input type="text">` widget.
#[derive(Debug, Clone)]
pub struct TextInput;

impl Widget for TextInput {
    fn kind(&self) -> WidgetKind {
        WidgetKind::TextInput
    }

    fn render(&self, name: &str, value: &str, attrs: &HashMap<String, String>) -> String {
        format!(
            r#"<input type="text" name="{name}" value="{}"{} />"#,
            escape_html(value),
            render_attrs(attrs)
        )
    }

    fn id_for_label(&self, id: &str) -> String {
        id.to_string()
    }
}

/// A `<input type="email">` widget.
#[derive(Debug, Clone)]
pub struct EmailInput;

impl Widget for EmailInput {
    fn kind(&self) -> WidgetKind {
        WidgetKind::EmailInput
    }

    fn render(&self, name: &str, value: &str, attrs: &HashMap<String, String>) -> String {
        format!(
            r#"<input type="email" name="{name}" value="{}"{} />"#,
            escape_html(value),
            render_attrs(attrs)
        )
    }

    fn id_for_label(&self, id: &str) -> String {
        id.to_string()
    }
}

/// A `<textarea>` widget.
#[derive(Debug, Clone)]
pub struct Textarea;

impl Widget for Textarea {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Textarea
    }

    fn render(&self, name: &str, value: &str, attrs: &HashMap<String, String>) -> String {
        format!(
            r#"<textarea name="{name}"{}>{}</textarea>"#,
            render_attrs(attrs),
            escape_html(value)
        )
    }

    fn id_for_label(&self, id: &str) -> String {
        id.to_string()
    }
}

/// Creates a boxed widget from a `WidgetKind` enum.
pub fn create_widget(kind: WidgetKind) -> Box<dyn Widget> {
    match kind {
        WidgetKind::TextInput => Box::new(TextInput),
        WidgetKind::EmailInput => Box::new(EmailInput),
        WidgetKind::Textarea => Box::new(Textarea),
    }
}
