//! # contact-form-core
//!
//! Core error types and logging integration for the contact-form component.
//! This crate has no dependencies on the rest of the workspace and provides
//! the foundation for the other crates.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;

// Re-export the most commonly used types at the crate root.
pub use error::{FormError, FormResult, ValidationError};
