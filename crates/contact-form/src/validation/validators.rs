// File: src/validation/validators.rs
// Purpose: Basic validators for contact form values

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern compiles")
});

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Check that a value has at least `min` characters.
/// Counts chars rather than bytes so "Zoë" is three long.
pub fn has_min_length(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

/// Check that a value is not empty
pub fn is_present(value: &str) -> bool {
    !value.is_empty()
}
