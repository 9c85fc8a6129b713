use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::league::DerivationError;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Resource not found")]
    NotFound,

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Missing or invalid credentials")]
    Unauthorized,

    #[error("Admin role required")]
    Forbidden,

    #[error("Database error: {0}")]
    DatabaseError(sqlx::Error),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let ApiError::DatabaseError(err) = &self {
            tracing::error!("Database error: {}", err);
        }

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::RowNotFound = err {
            return ApiError::NotFound;
        }
        if let Some(db_err) = err.as_database_error() {
            if db_err.is_unique_violation() {
                return ApiError::Conflict(db_err.message().to_string());
            }
            if db_err.is_foreign_key_violation() || db_err.is_check_violation() {
                return ApiError::Validation(db_err.message().to_string());
            }
        }
        ApiError::DatabaseError(err)
    }
}

impl From<DerivationError> for ApiError {
    fn from(err: DerivationError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::Forbidden.status(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::from(sqlx::Error::RowNotFound).status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::from(sqlx::Error::PoolTimedOut).status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_derivation_errors_are_validation() {
        let err = ApiError::from(DerivationError::UnexpectedFinalistCount { found: 3 });
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.to_string(), "expected 2 finalists, found 3");
    }
}
