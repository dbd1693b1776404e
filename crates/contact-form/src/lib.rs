// Contact Form - a validated contact form component
// Field rules, per-form state and Maud rendering driven by HTMX

pub mod config;
pub mod field;
pub mod render;
pub mod state;
pub mod validation;

// Re-export core types
pub use config::Config;
pub use field::{Field, InputKind, UnknownField};
pub use state::{FormState, FormValues, SubmitOutcome};
pub use validation::{FieldError, Rule, ValidationErrors};

// Re-export Maud for callers composing markup
pub use maud::{Markup, DOCTYPE};
