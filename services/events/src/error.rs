//! Error types for the event service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde_json::json;
use thiserror::Error;

use common::error::DatabaseError;

/// Per-field, user-correctable form errors, shown on the originating form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No username entered")]
    MissingUsername,
    #[error("No password entered")]
    MissingPassword,
    #[error("Username already taken")]
    UsernameTaken,
    #[error("Please Enter a Title for this Event")]
    MissingTitle,
    #[error("Title must be at most 100 characters long")]
    TitleTooLong,
    #[error("Description must be at most 100 characters long")]
    DescriptionTooLong,
    #[error("Please Enter a Start Time")]
    MissingStartTime,
    #[error("Please Enter an End Time")]
    MissingEndTime,
    #[error("Times must use the format YYYY-MM-DDTHH:MM")]
    MalformedTimestamp,
    #[error("Start Time Cannot be After End Time")]
    EndBeforeStart,
}

/// Credential and session errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid Username")]
    InvalidUsername,
    #[error("Invalid Password")]
    InvalidPassword,
    #[error("Please log in first")]
    LoginRequired,
}

/// Top-level error type for the event service
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Only the host can cancel this event")]
    NotHost,

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Browser flows land back on the login form instead of a bare 401
            AppError::Auth(AuthError::LoginRequired) => {
                return Redirect::to("/login").into_response();
            }
            AppError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            AppError::Auth(err) => (StatusCode::UNAUTHORIZED, err.to_string()),
            err @ AppError::EventNotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
            err @ AppError::NotHost => (StatusCode::FORBIDDEN, err.to_string()),
            err @ (AppError::PasswordHash(_) | AppError::Database(_)) => {
                tracing::error!("{}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    #[test]
    fn validation_errors_are_bad_requests() {
        let response = AppError::from(ValidationError::MissingTitle).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_credentials_are_unauthorized() {
        for err in [AuthError::InvalidUsername, AuthError::InvalidPassword] {
            let response = AppError::from(err).into_response();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn login_required_redirects_to_the_login_form() {
        let response = AppError::from(AuthError::LoginRequired).into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/login");
    }

    #[test]
    fn unknown_events_are_not_found() {
        let response = AppError::EventNotFound("99".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn non_hosts_are_forbidden() {
        let response = AppError::NotHost.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn time_ordering_message_matches_the_form_copy() {
        assert_eq!(
            ValidationError::EndBeforeStart.to_string(),
            "Start Time Cannot be After End Time"
        );
    }
}
