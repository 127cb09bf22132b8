//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum serves as the
//! top-level error type that wraps domain-specific errors and implements
//! `IntoResponse`, so every handler failure ends up as a `{message}` body on the
//! same request instead of escaping the router.

pub mod config;
pub mod validation;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, validation::ValidationError},
};

/// Top-level application error type.
///
/// Status mapping follows the API contract:
/// - `Validation`, `BadRequest`, `DbErr` → 400 Bad Request
/// - `NotFound` → 404 Not Found
/// - `Conflict` → 403 Forbidden
/// - `ConfigErr`, `IoErr` → 500, only reachable during startup
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// A candidate record broke a schema rule.
    ///
    /// Results in 400 Bad Request carrying the rule's message.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Database operation error from SeaORM.
    ///
    /// Uncategorised store failures are reported as 400 Bad Request with the
    /// driver message and logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Listener bind or serve failure.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// The referenced record still has dependents.
    ///
    /// Results in 403 Forbidden with the provided error message.
    #[error("{0}")]
    Conflict(String),

    /// Invalid request error (malformed body or path segment).
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

fn message(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorDto { message })).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(err) => message(StatusCode::BAD_REQUEST, err.to_string()),
            Self::BadRequest(msg) => message(StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => message(StatusCode::NOT_FOUND, msg),
            Self::Conflict(msg) => message(StatusCode::FORBIDDEN, msg),
            Self::DbErr(err) => {
                tracing::error!("Database error: {}", err);
                message(StatusCode::BAD_REQUEST, err.to_string())
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        message(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    }
}
