// File: src/field.rs
// Purpose: Catalogue of contact form fields and their HTML metadata

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A field of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Message,
}

/// How a field is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    TextArea,
}

impl Field {
    /// All fields in display order
    pub const ALL: [Field; 4] = [Field::FirstName, Field::LastName, Field::Email, Field::Message];

    /// Name used for the input `name`/`id` attributes and in error text
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    /// Label text shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name*",
            Field::LastName => "Last Name*",
            Field::Email => "Email*",
            Field::Message => "Message",
        }
    }

    /// Label used in the submission summary
    pub fn summary_label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name:",
            Field::LastName => "Last Name:",
            Field::Email => "Email:",
            Field::Message => "Message:",
        }
    }

    pub fn input_kind(self) -> InputKind {
        match self {
            Field::Email => InputKind::Email,
            Field::Message => InputKind::TextArea,
            _ => InputKind::Text,
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Field::Message)
    }

    /// DOM id of the element holding this field's error text
    pub fn error_slot_id(self) -> String {
        format!("{}-error", self.name())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a field name does not belong to the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown field '{}'", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}
