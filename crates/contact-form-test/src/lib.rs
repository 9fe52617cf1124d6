//! # contact-form-test
//!
//! Test harness for the contact form component. Provides [`Screen`], a
//! query-based view of the rendered markup that finds elements by text,
//! label, role, or test id, and the [`user`] module for driving the form
//! with simulated keystrokes and clicks.

pub mod screen;
pub mod user;

pub use screen::{unescape_html, Element, QueryError, Screen};
