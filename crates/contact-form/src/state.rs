// File: src/state.rs
// Purpose: Form state of a mounted contact form and its event transitions

use crate::field::Field;
use crate::validation::{self, ValidationErrors};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Values of the four form fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }
}

/// Outcome of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected { errors: usize },
}

/// State of one mounted contact form.
///
/// Errors are only reported for touched fields: a field is touched by its
/// first change, and a submit attempt touches every field. Errors are
/// recomputed on every transition so they never go stale.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    values: FormValues,
    errors: ValidationErrors,
    submitted_values: Option<FormValues>,
    #[serde(skip)]
    touched: BTreeSet<Field>,
}

impl FormState {
    /// Fresh state, as created on mount
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Snapshot of the most recent successful submission
    pub fn submitted_values(&self) -> Option<&FormValues> {
        self.submitted_values.as_ref()
    }

    /// Touched fields in display order
    pub fn touched(&self) -> impl Iterator<Item = Field> + '_ {
        self.touched.iter().copied()
    }

    /// Update a field and re-validate every touched field
    pub fn on_field_change(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
        self.touched.insert(field);
        self.revalidate();
    }

    /// Replace all values at once without touching anything.
    /// Used when a submit carries the whole form.
    pub fn set_values(&mut self, values: FormValues) {
        self.values = values;
        self.revalidate();
    }

    /// Validate the whole form and snapshot it if every rule passes
    pub fn on_submit(&mut self) -> SubmitOutcome {
        self.touched.extend(Field::ALL);
        self.revalidate();

        if self.errors.is_empty() {
            self.submitted_values = Some(self.values.clone());
            SubmitOutcome::Accepted
        } else {
            tracing::debug!(errors = self.errors.len(), "submit rejected by validation");
            SubmitOutcome::Rejected { errors: self.errors.len() }
        }
    }

    fn revalidate(&mut self) {
        self.errors = validation::validate_fields(&self.values, self.touched.iter().copied());
    }
}
