//! # contact-form
//!
//! A contact form component: typed fields, live validation, HTML
//! rendering, and a captured snapshot of the last successful submission.
//!
//! [`ContactForm`] is the entry point. Drive it with
//! [`ContactForm::change`], [`ContactForm::blur`], and
//! [`ContactForm::submit`], or replay serialized [`FormEvent`]s, then
//! produce markup with [`render`].
//!
//! ```
//! use contact_form::{render, ContactForm};
//! use contact_form::forms::Field;
//!
//! let mut form = ContactForm::new();
//! form.change(Field::FirstName, "nicholas");
//! form.change(Field::LastName, "samples");
//! form.change(Field::Email, "nick@nick.com");
//! assert!(form.submit());
//!
//! let html = render(&form);
//! assert!(html.contains("firstnameDisplay"));
//! ```

pub mod events;
pub mod form;
pub mod render;

pub use events::FormEvent;
pub use form::{ContactForm, DisplayState};
pub use render::render;

/// Error types and logging setup.
pub use contact_form_core as core;

/// Fields, widgets, validation, and state containers.
pub use contact_form_forms as forms;
