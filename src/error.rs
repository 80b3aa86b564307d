//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Failure of a single store statement, classified at the data-access boundary.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Connection(String),
    #[error("constraint violation: {0}")]
    Constraint(String),
    #[error("reference violation: {0}")]
    Reference(String),
    #[error("database: {0}")]
    Database(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::Database(db) => classify_sqlstate(db.code().as_deref(), db.message()),
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => StoreError::Connection(e.to_string()),
            _ => StoreError::Database(e.to_string()),
        }
    }
}

/// Map a PostgreSQL SQLSTATE to a store error kind.
pub fn classify_sqlstate(code: Option<&str>, message: &str) -> StoreError {
    let message = message.to_string();
    match code {
        Some("23503") => StoreError::Reference(message),
        Some("23502") | Some("23514") | Some("23505") | Some("22P02") => StoreError::Constraint(message),
        Some(c) if c.starts_with("08") => StoreError::Connection(message),
        _ => StoreError::Database(message),
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("payload too large: {0}")]
    PayloadTooLarge(String),
}

impl AppError {
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Store(StoreError::Connection(_)) => (StatusCode::INTERNAL_SERVER_ERROR, "store_unavailable"),
            AppError::Store(StoreError::Constraint(_)) => (StatusCode::BAD_REQUEST, "constraint_violation"),
            AppError::Store(StoreError::Reference(_)) => (StatusCode::BAD_REQUEST, "reference_violation"),
            AppError::Store(StoreError::Database(_)) => (StatusCode::INTERNAL_SERVER_ERROR, "database_error"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::PayloadTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large"),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foreign_key_violation_is_a_reference_error() {
        let e = classify_sqlstate(Some("23503"), "insert violates fk");
        assert!(matches!(e, StoreError::Reference(_)));
    }

    #[test]
    fn check_and_not_null_are_constraint_errors() {
        for code in ["23502", "23514", "22P02"] {
            assert!(matches!(classify_sqlstate(Some(code), "x"), StoreError::Constraint(_)), "{}", code);
        }
    }

    #[test]
    fn connection_class_and_unknown_codes() {
        assert!(matches!(classify_sqlstate(Some("08006"), "gone"), StoreError::Connection(_)));
        assert!(matches!(classify_sqlstate(Some("42P01"), "no table"), StoreError::Database(_)));
        assert!(matches!(classify_sqlstate(None, "?"), StoreError::Database(_)));
    }

    #[test]
    fn pool_timeout_maps_to_connection() {
        let e: StoreError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(e, StoreError::Connection(_)));
        let e: StoreError = sqlx::Error::RowNotFound.into();
        assert!(matches!(e, StoreError::Database(_)));
    }

    #[test]
    fn status_mapping() {
        let cases = [
            (AppError::Store(StoreError::Constraint("c".into())), StatusCode::BAD_REQUEST),
            (AppError::Store(StoreError::Reference("r".into())), StatusCode::BAD_REQUEST),
            (AppError::Store(StoreError::Connection("down".into())), StatusCode::INTERNAL_SERVER_ERROR),
            (AppError::Store(StoreError::Database("boom".into())), StatusCode::INTERNAL_SERVER_ERROR),
            (AppError::NotFound("id".into()), StatusCode::NOT_FOUND),
            (AppError::BadRequest("body".into()), StatusCode::BAD_REQUEST),
            (AppError::PayloadTooLarge("body".into()), StatusCode::PAYLOAD_TOO_LARGE),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
