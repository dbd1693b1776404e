// File: src/render.rs
// Purpose: Maud markup for the contact form, its error slots and the submission summary
//
// Every input posts itself to `<form_path>/fields/<name>` on input; the
// response replaces that field's error slot and updates the other touched
// fields' slots out of band. Submitting swaps the whole form root.

use crate::config::PageConfig;
use crate::field::{Field, InputKind};
use crate::state::{FormState, FormValues};
use crate::validation::FieldError;
use maud::{html, Markup, DOCTYPE};

/// Document title. Kept distinct from the heading, which must appear once.
pub const PAGE_TITLE: &str = "Contact";

/// DOM id of the element the submit response replaces
pub const FORM_ROOT_ID: &str = "contact-form-root";

/// Full page: the app shell with a mounted form
pub fn page(state: &FormState, form_path: &str, config: &PageConfig) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (PAGE_TITLE) }
                script src=(config.htmx_src) {}
            }
            body {
                main class="app" {
                    (contact_form(state, form_path))
                }
            }
        }
    }
}

/// The form component: heading, inputs, errors and summary
pub fn contact_form(state: &FormState, form_path: &str) -> Markup {
    let submit_path = format!("{form_path}/submit");
    let target = format!("#{FORM_ROOT_ID}");

    html! {
        div id=(FORM_ROOT_ID) {
            form method="post" action=(submit_path) novalidate
                hx-post=(submit_path) hx-target=(target) hx-swap="outerHTML" {
                h1 { "Contact Form" }
                @for field in Field::ALL {
                    (field_row(field, state, form_path))
                }
                button type="submit" { "Submit" }
            }
            @if let Some(values) = state.submitted_values() {
                (summary(values))
            }
        }
    }
}

fn field_row(field: Field, state: &FormState, form_path: &str) -> Markup {
    let name = field.name();
    let value = state.values().get(field);
    let change_path = format!("{form_path}/fields/{name}");
    let slot_target = format!("#{}", field.error_slot_id());
    let trigger = "input changed delay:150ms";

    html! {
        div class="field" {
            label for=(name) { (field.label()) }
            @match field.input_kind() {
                InputKind::TextArea => {
                    textarea id=(name) name=(name)
                        hx-post=(change_path) hx-trigger=(trigger)
                        hx-target=(slot_target) hx-swap="outerHTML" { (value) }
                }
                kind => {
                    @let input_type = if kind == InputKind::Email { "email" } else { "text" };
                    input id=(name) name=(name) type=(input_type)
                        value=(value)
                        hx-post=(change_path) hx-trigger=(trigger)
                        hx-target=(slot_target) hx-swap="outerHTML";
                }
            }
            (error_slot(field, state.errors().get(field), false))
        }
    }
}

/// Element holding a field's error text, empty when the field is valid
pub fn error_slot(field: Field, error: Option<&FieldError>, out_of_band: bool) -> Markup {
    html! {
        div id=(field.error_slot_id()) class="error-slot"
            hx-swap-oob=[out_of_band.then_some("true")] {
            @if let Some(error) = error {
                p class="error" data-testid="error" { "Error: " (error) }
            }
        }
    }
}

/// Response to a field change: the changed field's slot, followed by
/// out-of-band slots for every other touched field
pub fn field_errors(state: &FormState, changed: Field) -> Markup {
    html! {
        (error_slot(changed, state.errors().get(changed), false))
        @for field in state.touched().filter(|f| *f != changed) {
            (error_slot(field, state.errors().get(field), true))
        }
    }
}

/// Read-only rendering of a submitted snapshot
pub fn summary(values: &FormValues) -> Markup {
    html! {
        div class="summary" data-testid="summary" {
            h2 { "You Submitted:" }
            @for field in Field::ALL {
                @let value = values.get(field);
                @if field.is_required() || !value.is_empty() {
                    p data-testid=(format!("{}Display", field.name())) {
                        (field.summary_label()) " " (value)
                    }
                }
            }
        }
    }
}
