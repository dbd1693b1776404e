// File: src/error.rs
// Purpose: Request errors and their HTML responses

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use contact_form::UnknownField;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("form {0} is not mounted")]
    FormNotFound(Uuid),

    #[error(transparent)]
    UnknownField(#[from] UnknownField),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::FormNotFound(_) => StatusCode::NOT_FOUND,
            AppError::UnknownField(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }

        let title = status.canonical_reason().unwrap_or("Error");
        let markup = maud::html! {
            (maud::DOCTYPE)
            html {
                head { title { (title) } }
                body {
                    h1 { (status.as_u16()) " " (title) }
                    p { (self) }
                    a href="/" { "Go Home" }
                }
            }
        };
        (status, Html(markup.into_string())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::FormNotFound(Uuid::nil()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::from(UnknownField("phone".to_string())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        let err = AppError::FormNotFound(Uuid::nil());
        assert_eq!(
            err.to_string(),
            "form 00000000-0000-0000-0000-000000000000 is not mounted"
        );
        let err = AppError::from(UnknownField("phone".to_string()));
        assert_eq!(err.to_string(), "unknown field 'phone'");
    }
}
