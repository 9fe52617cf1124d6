//! # contact-form-forms
//!
//! Forms machinery for the contact form component. Provides typed field
//! definitions, state containers, table-driven validation, widgets for
//! HTML rendering, and bound fields that tie the three together.
//!
//! ## Modules
//!
//! - [`fields`]: Field identity, definitions, and the contact-form field set
//! - [`state`]: Live values, error set, and submitted-result snapshot
//! - [`validation`]: The rule table and per-field/whole-form validation
//! - [`widgets`]: HTML form controls and escaping
//! - [`bound_field`]: A field definition paired with value and error

pub mod bound_field;
pub mod fields;
pub mod state;
pub mod validation;
pub mod widgets;

pub use bound_field::BoundField;
pub use fields::{contact_fields, default_widget_for, Field, FieldDef};
pub use state::{ErrorSet, FormFields, SubmittedResult};
pub use validation::{validate_all, validate_field, FIRST_NAME_MIN_LENGTH};
pub use widgets::{escape_html, WidgetKind};
