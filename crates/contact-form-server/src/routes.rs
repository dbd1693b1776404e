// File: src/routes.rs
// Purpose: HTTP surface of the contact form: mount, field change, submit, unmount

use crate::error::AppError;
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Json, Response};
use axum::routing::{delete, get, post};
use axum::{Form, Router};
use contact_form::{render, Field, FormValues, SubmitOutcome};
use std::collections::HashMap;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/forms/:id", delete(unmount_handler))
        .route("/forms/:id/fields/:field", post(field_change_handler))
        .route("/forms/:id/submit", post(submit_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn form_path(id: &Uuid) -> String {
    format!("/forms/{id}")
}

/// App shell: mounts a new form and renders the page around it
async fn index_handler(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let mut forms = state.forms.write().await;
    let id = forms.mount();
    tracing::info!(form_id = %id, mounted = forms.len(), "form mounted");

    let form = forms
        .get(&id)
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("form {id} vanished right after mounting")))?;
    Ok(Html(render::page(form, &form_path(&id), &state.config.page).into_string()))
}

async fn health_handler() -> &'static str {
    "ok"
}

async fn field_change_handler(
    State(state): State<AppState>,
    Path((id, field)): Path<(Uuid, String)>,
    Form(body): Form<HashMap<String, String>>,
) -> Result<Html<String>, AppError> {
    let field: Field = field.parse()?;
    let value = body.get(field.name()).cloned().unwrap_or_default();

    let mut forms = state.forms.write().await;
    let form = forms.get_mut(&id).ok_or(AppError::FormNotFound(id))?;
    form.on_field_change(field, value);

    Ok(Html(render::field_errors(form, field).into_string()))
}

async fn submit_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Form(values): Form<FormValues>,
) -> Result<Response, AppError> {
    let mut forms = state.forms.write().await;
    let form = forms.get_mut(&id).ok_or(AppError::FormNotFound(id))?;
    form.set_values(values);

    match form.on_submit() {
        SubmitOutcome::Accepted => tracing::info!(form_id = %id, "submission accepted"),
        SubmitOutcome::Rejected { errors } => {
            tracing::info!(form_id = %id, errors, "submission rejected")
        }
    }

    let response = if accepts_json(&headers) {
        Json(&*form).into_response()
    } else if wants_partial(&headers) {
        Html(render::contact_form(form, &form_path(&id)).into_string()).into_response()
    } else {
        Html(render::page(form, &form_path(&id), &state.config.page).into_string()).into_response()
    };
    Ok(response)
}

async fn unmount_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let mut forms = state.forms.write().await;
    if forms.unmount(&id) {
        tracing::info!(form_id = %id, mounted = forms.len(), "form unmounted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::FormNotFound(id))
    }
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name)?.to_str().ok()
}

/// Check if request accepts JSON
fn accepts_json(headers: &HeaderMap) -> bool {
    header(headers, "accept").is_some_and(|accept| accept.contains("json"))
}

/// HTMX requests get the form fragment instead of the whole page
fn wants_partial(headers: &HeaderMap) -> bool {
    header(headers, "hx-request").is_some() || header(headers, "x-partial").is_some()
}
