// File: src/validation/mod.rs
// Purpose: Field rules of the contact form and the errors they produce

use crate::field::Field;
use crate::state::FormValues;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::fmt;

pub mod validators;

/// Minimum number of characters in a first name
pub const FIRST_NAME_MIN_LENGTH: usize = 5;

/// A single rule a field value must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    MinLength(usize),
    Required,
    Email,
}

impl Rule {
    /// Rule attached to a field, `None` for optional fields
    pub fn for_field(field: Field) -> Option<Rule> {
        match field {
            Field::FirstName => Some(Rule::MinLength(FIRST_NAME_MIN_LENGTH)),
            Field::LastName => Some(Rule::Required),
            Field::Email => Some(Rule::Email),
            Field::Message => None,
        }
    }

    pub fn check(self, value: &str) -> bool {
        match self {
            Rule::MinLength(min) => validators::has_min_length(value, min),
            Rule::Required => validators::is_present(value),
            Rule::Email => validators::is_valid_email(value),
        }
    }
}

/// A failed rule on a field. `Display` yields the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub rule: Rule,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rule {
            Rule::MinLength(min) => write!(f, "{} must have at least {} characters", self.field, min),
            Rule::Required => write!(f, "{} is a required field", self.field),
            Rule::Email => write!(f, "{} must be a valid email address", self.field),
        }
    }
}

/// Validate one field value against its rule
pub fn validate_field(field: Field, value: &str) -> Option<FieldError> {
    let rule = Rule::for_field(field)?;
    if rule.check(value) {
        None
    } else {
        Some(FieldError { field, rule })
    }
}

/// Validate every field of a form
pub fn validate(values: &FormValues) -> ValidationErrors {
    validate_fields(values, Field::ALL)
}

/// Validate the given subset of fields
pub fn validate_fields(values: &FormValues, fields: impl IntoIterator<Item = Field>) -> ValidationErrors {
    let errors = fields
        .into_iter()
        .filter_map(|field| validate_field(field, values.get(field)))
        .map(|error| (error.field, error))
        .collect();
    ValidationErrors { errors }
}

/// Errors keyed by field, at most one per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, FieldError>,
}

impl ValidationErrors {
    /// Check if field has an error
    pub fn has_error(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Get error message for a field
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Errors in field display order
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.values()
    }
}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for error in self.iter() {
            map.serialize_entry(error.field.name(), &error.to_string())?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Field::FirstName, "Jack", Some("firstName must have at least 5 characters"))]
    #[case(Field::FirstName, "", Some("firstName must have at least 5 characters"))]
    #[case(Field::FirstName, "Jackson", None)]
    #[case(Field::LastName, "", Some("lastName is a required field"))]
    #[case(Field::LastName, "Jack", None)]
    #[case(Field::Email, "Heyo", Some("email must be a valid email address"))]
    #[case(Field::Email, "", Some("email must be a valid email address"))]
    #[case(Field::Email, "Jack@email.com", None)]
    #[case(Field::Message, "", None)]
    #[case(Field::Message, "You are the coolest!", None)]
    fn test_validate_field(#[case] field: Field, #[case] value: &str, #[case] expected: Option<&str>) {
        let message = validate_field(field, value).map(|e| e.to_string());
        assert_eq!(message.as_deref(), expected);
    }

    #[test]
    fn test_empty_form_has_three_errors() {
        let errors = validate(&FormValues::default());
        assert_eq!(errors.len(), 3);
        assert!(errors.has_error(Field::FirstName));
        assert!(errors.has_error(Field::LastName));
        assert!(errors.has_error(Field::Email));
        assert!(!errors.has_error(Field::Message));
    }

    #[test]
    fn test_validate_subset() {
        let values = FormValues::default();
        let errors = validate_fields(&values, [Field::Email]);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.message(Field::Email).as_deref(),
            Some("email must be a valid email address")
        );
    }

    #[test]
    fn test_iter_in_display_order() {
        let errors = validate(&FormValues::default());
        let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![Field::FirstName, Field::LastName, Field::Email]);
    }

    #[test]
    fn test_errors_serialize_as_messages() {
        let values = FormValues {
            first_name: "Jackson".to_string(),
            email: "Jack@email.com".to_string(),
            ..FormValues::default()
        };
        let json = serde_json::to_value(validate(&values)).unwrap();
        assert_eq!(json, serde_json::json!({ "lastName": "lastName is a required field" }));
    }
}
