//! Form state containers.
//!
//! [`FormFields`] holds the live input values, [`ErrorSet`] the current
//! validation errors keyed by field, and [`SubmittedResult`] the snapshot
//! taken when a submission succeeds.

use serde::{Deserialize, Serialize};

use contact_form_core::ValidationError;

use crate::fields::Field;

/// The live values of the four form inputs.
///
/// Values are plain strings. An empty string means the input is blank;
/// there is no separate "untouched" notion at this level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl FormFields {
    /// Creates an empty set of field values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value of `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Replaces the value of `field`.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Resets every field to the empty string.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// The current validation errors, at most one per field.
///
/// Iteration yields errors in field declaration order regardless of
/// insertion order, so rendered error lists are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSet {
    entries: [Option<ValidationError>; 4],
}

impl ErrorSet {
    /// Creates an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the error for `field`, if any.
    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.entries[field.index()].as_ref()
    }

    /// Records an error for `field`, replacing any previous one.
    pub fn insert(&mut self, field: Field, error: ValidationError) {
        self.entries[field.index()] = Some(error);
    }

    /// Removes the error for `field`, if any.
    pub fn remove(&mut self, field: Field) {
        self.entries[field.index()] = None;
    }

    /// Sets or clears the error for `field` in one step.
    pub fn set(&mut self, field: Field, error: Option<ValidationError>) {
        self.entries[field.index()] = error;
    }

    /// Whether `field` currently has an error.
    pub fn contains(&self, field: Field) -> bool {
        self.entries[field.index()].is_some()
    }

    /// Whether the set holds no errors at all.
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(Option::is_none)
    }

    /// The number of fields currently in error.
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Removes all errors.
    pub fn clear(&mut self) {
        self.entries = Default::default();
    }

    /// Iterates over `(field, error)` pairs in field declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationError)> {
        Field::all()
            .into_iter()
            .filter_map(|field| self.entries[field.index()].as_ref().map(|e| (field, e)))
    }
}

/// The values captured by the last successful submission.
///
/// `message` is `None` when the message input was blank at submit time,
/// which suppresses its display element entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedResult {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SubmittedResult {
    /// Snapshots `fields` into a result.
    ///
    /// A blank message becomes `None`; the other fields are copied verbatim.
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            first_name: fields.first_name.clone(),
            last_name: fields.last_name.clone(),
            email: fields.email.clone(),
            message: if fields.message.is_empty() {
                None
            } else {
                Some(fields.message.clone())
            },
        }
    }

    /// Returns the captured value for `field`.
    ///
    /// `None` only for a message that was blank at submit time.
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::FirstName => Some(&self.first_name),
            Field::LastName => Some(&self.last_name),
            Field::Email => Some(&self.email),
            Field::Message => self.message.as_deref(),
        }
    }
}
