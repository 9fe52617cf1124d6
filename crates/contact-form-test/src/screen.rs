//! Query-based inspection of rendered form markup.
//!
//! This module provides [`Screen`] for querying a rendered [`ContactForm`]
//! the way a user would perceive it: by visible text, by label, by role,
//! or by test id. Queries that should find exactly one element return an
//! error when they find none or several, which keeps test assertions
//! honest about what the markup actually contains.
//!
//! ## Usage
//!
//! ```
//! use contact_form::ContactForm;
//! use contact_form_test::Screen;
//!
//! let form = ContactForm::new();
//! let screen = Screen::of(&form);
//!
//! let heading = screen.get_by_text("(?i)contact form").unwrap();
//! assert_eq!(heading.tag(), "h1");
//! assert!(screen.query_by_test_id("messageDisplay").unwrap().is_none());
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use contact_form::{render, ContactForm};

/// Errors raised by screen queries.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A `get_*` query matched nothing.
    #[error("Unable to find an element matching {0}")]
    NotFound(String),
    /// A single-element query matched more than one element.
    #[error("Found multiple elements matching {0}")]
    MultipleFound(String),
    /// A label matched but is not wired to any control.
    #[error("Found a label with the text {0}, however no form control is associated with it")]
    LabelWithoutControl(String),
    /// A role query used a role this harness does not know.
    #[error("Unknown role: {0}")]
    UnknownRole(String),
    /// A text query used an invalid regular expression.
    #[error("Invalid match pattern {pattern}: {source}")]
    BadPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// One element of the parsed markup.
///
/// `text` holds the element's direct text only, with entities decoded
/// and whitespace normalized. Text inside child elements belongs to the
/// children, so a query for error text finds the `<li>` that shows it,
/// not every ancestor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    text: String,
}

impl Element {
    /// The lowercase tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The element's direct text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The value of an attribute, with entities decoded.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// The `id` attribute.
    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    /// The `data-testid` attribute.
    pub fn test_id(&self) -> Option<&str> {
        self.attr("data-testid")
    }

    /// The control's current value.
    ///
    /// Inputs report their `value` attribute, textareas their text.
    pub fn value(&self) -> &str {
        match self.tag.as_str() {
            "input" => self.attr("value").unwrap_or(""),
            "textarea" => &self.text,
            _ => "",
        }
    }
}

/// A parsed snapshot of rendered form markup.
///
/// Construct one with [`Screen::of`] after every interaction, the way a
/// browser would re-render after every state change.
pub struct Screen {
    elements: Vec<Element>,
}

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^<>]+>").expect("valid regex"));

static ATTR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"([a-zA-Z][a-zA-Z0-9-]*)="([^"]*)""#).expect("valid regex"));

const KNOWN_ROLES: [&str; 3] = ["button", "heading", "textbox"];

impl Screen {
    /// Renders `form` and parses the result.
    pub fn of(form: &ContactForm) -> Self {
        Self::from_html(&render(form))
    }

    /// Parses an HTML string directly.
    pub fn from_html(html: &str) -> Self {
        Self {
            elements: parse(html),
        }
    }

    /// All parsed elements, in document order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Finds the single element whose text matches `pattern`.
    ///
    /// `pattern` is a regular expression; use `(?i)` for case-insensitive
    /// matching. Exactly one element must match.
    pub fn get_by_text(&self, pattern: &str) -> Result<&Element, QueryError> {
        single(self.text_matches(pattern)?, format!("text: {pattern}"))
    }

    /// Like [`get_by_text`](Self::get_by_text), but absence is not an error.
    ///
    /// Returns `Ok(None)` when nothing matches and still fails when more
    /// than one element matches.
    pub fn query_by_text(&self, pattern: &str) -> Result<Option<&Element>, QueryError> {
        optional(self.text_matches(pattern)?, format!("text: {pattern}"))
    }

    /// Finds every element whose text matches `pattern`, in document order.
    ///
    /// At least one element must match.
    pub fn get_all_by_text(&self, pattern: &str) -> Result<Vec<&Element>, QueryError> {
        let matches = self.text_matches(pattern)?;
        if matches.is_empty() {
            return Err(QueryError::NotFound(format!("text: {pattern}")));
        }
        Ok(matches)
    }

    /// Finds the form control wired to the label with exactly `label` as text.
    pub fn get_by_label_text(&self, label: &str) -> Result<&Element, QueryError> {
        let labels: Vec<&Element> = self
            .elements
            .iter()
            .filter(|e| e.tag() == "label" && e.text() == label)
            .collect();
        let found = single(labels, format!("label text: {label}"))?;

        let target = found
            .attr("for")
            .ok_or_else(|| QueryError::LabelWithoutControl(label.to_string()))?;
        let controls: Vec<&Element> = self
            .elements
            .iter()
            .filter(|e| e.id() == Some(target))
            .collect();
        if controls.is_empty() {
            return Err(QueryError::LabelWithoutControl(label.to_string()));
        }
        single(controls, format!("label text: {label}"))
    }

    /// Finds the single element with the given ARIA role.
    ///
    /// Supported roles: `button`, `heading`, and `textbox`.
    pub fn get_by_role(&self, role: &str) -> Result<&Element, QueryError> {
        single(self.role_matches(role)?, format!("role: {role}"))
    }

    /// Finds every element with the given ARIA role, in document order.
    pub fn get_all_by_role(&self, role: &str) -> Result<Vec<&Element>, QueryError> {
        let matches = self.role_matches(role)?;
        if matches.is_empty() {
            return Err(QueryError::NotFound(format!("role: {role}")));
        }
        Ok(matches)
    }

    /// Finds the single element with the given `data-testid`.
    pub fn get_by_test_id(&self, id: &str) -> Result<&Element, QueryError> {
        single(self.test_id_matches(id), format!("test id: {id}"))
    }

    /// Like [`get_by_test_id`](Self::get_by_test_id), but absence is not an error.
    pub fn query_by_test_id(&self, id: &str) -> Result<Option<&Element>, QueryError> {
        optional(self.test_id_matches(id), format!("test id: {id}"))
    }

    fn text_matches(&self, pattern: &str) -> Result<Vec<&Element>, QueryError> {
        let re = Regex::new(pattern).map_err(|source| QueryError::BadPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(self
            .elements
            .iter()
            .filter(|e| !e.text().is_empty() && re.is_match(e.text()))
            .collect())
    }

    fn role_matches(&self, role: &str) -> Result<Vec<&Element>, QueryError> {
        if !KNOWN_ROLES.contains(&role) {
            return Err(QueryError::UnknownRole(role.to_string()));
        }
        Ok(self.elements.iter().filter(|e| has_role(e, role)).collect())
    }

    fn test_id_matches(&self, id: &str) -> Vec<&Element> {
        self.elements
            .iter()
            .filter(|e| e.test_id() == Some(id))
            .collect()
    }
}

fn single(mut matches: Vec<&Element>, description: String) -> Result<&Element, QueryError> {
    match matches.len() {
        0 => Err(QueryError::NotFound(description)),
        1 => Ok(matches.remove(0)),
        _ => Err(QueryError::MultipleFound(description)),
    }
}

fn optional(
    mut matches: Vec<&Element>,
    description: String,
) -> Result<Option<&Element>, QueryError> {
    match matches.len() {
        0 => Ok(None),
        1 => Ok(Some(matches.remove(0))),
        _ => Err(QueryError::MultipleFound(description)),
    }
}

fn has_role(element: &Element, role: &str) -> bool {
    match role {
        "button" => element.tag() == "button",
        "heading" => matches!(element.tag(), "h1" | "h2" | "h3" | "h4" | "h5" | "h6"),
        "textbox" => {
            element.tag() == "textarea"
                || (element.tag() == "input"
                    && matches!(element.attr("type"), None | Some("text" | "email")))
        }
        _ => false,
    }
}

/// Decodes the HTML entities produced by form rendering.
pub fn unescape_html(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}

fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parses markup into a flat element list in document order.
///
/// Text is credited to the innermost open element, so every `Element`
/// carries its direct text only.
fn parse(html: &str) -> Vec<Element> {
    let mut elements: Vec<Element> = Vec::new();
    let mut stack: Vec<usize> = Vec::new();
    let mut cursor = 0;

    for m in TAG_RE.find_iter(html) {
        let text = &html[cursor..m.start()];
        if !text.trim().is_empty() {
            if let Some(&top) = stack.last() {
                elements[top].text.push_str(&unescape_html(text));
            }
        }
        cursor = m.end();

        let inner = &html[m.start() + 1..m.end() - 1];
        if let Some(name) = inner.strip_prefix('/') {
            let name = name.trim();
            if let Some(pos) = stack.iter().rposition(|&i| elements[i].tag == name) {
                stack.truncate(pos);
            }
        } else {
            let self_closing = inner.ends_with('/');
            let body = inner.trim_end_matches('/');
            let Some(name) = body.split_whitespace().next() else {
                continue;
            };
            let attrs = ATTR_RE
                .captures_iter(body)
                .map(|caps| (caps[1].to_string(), unescape_html(&caps[2])))
                .collect();
            elements.push(Element {
                tag: name.to_string(),
                attrs,
                text: String::new(),
            });
            if !self_closing {
                stack.push(elements.len() - 1);
            }
        }
    }

    for element in &mut elements {
        element.text = normalize_ws(&element.text);
    }
    elements
}
