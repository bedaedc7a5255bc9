//! Structured validation failure records.
//!
//! Records serialize to the exact shape carried by the hidden
//! `form-errors` field: `{"field", "value", "type", "message"}`.

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

use serde::{Deserialize, Serialize};

/// The validated fields of the contact form, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Comments,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Comments];

    /// Element id and form name of the field.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Comments => "comments",
        }
    }
}

/// Category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormErrorKind {
    /// A disallowed character was typed and stripped.
    InvalidCharacter,
    /// The comments exceeded the maximum length and were truncated.
    MaxLengthExceeded,
    /// A required field was empty at submit time.
    Required,
    /// The value did not match the expected format.
    InvalidFormat,
    /// The value length was outside the accepted range.
    InvalidLength,
}

/// One recorded validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormError {
    pub field: Field,
    /// The offending input as it was when the failure was detected.
    pub value: String,
    #[serde(rename = "type")]
    pub kind: FormErrorKind,
    pub message: String,
}

impl FormError {
    #[must_use]
    pub fn new(field: Field, kind: FormErrorKind, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field, value: value.into(), kind, message: message.into() }
    }
}
