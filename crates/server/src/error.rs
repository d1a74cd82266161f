use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::error::ServiceError;
use log::{error, warn};
use models::validation::{FieldError, ValidationError};
use sea_orm::SqlErr;
use serde::Serialize;

/// Body of every failed response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    status_code: u16,
    success: bool,
    message: String,
    error_messages: Vec<FieldError>,
}

/// A failure ready to be sent back to the client
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    error_messages: Vec<FieldError>,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            status,
            error_messages: vec![FieldError::new("", message.clone())],
            message,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: err.to_string(),
            error_messages: err.errors,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::BadRequest(message) => Self::new(StatusCode::BAD_REQUEST, message),
            ServiceError::NotFound(message) => Self::new(StatusCode::NOT_FOUND, message),
            ServiceError::Database(db_err) => match db_err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Self::new(StatusCode::CONFLICT, "Record already exists")
                }
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                    Self::new(StatusCode::BAD_REQUEST, "Referenced record does not exist")
                }
                _ => {
                    error!("Database error: {db_err}");
                    Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong")
                }
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status().is_client_error() {
            warn!("{}: {}", self.status, self.message);
        }

        let body = ErrorBody {
            status_code: self.status.as_u16(),
            success: false,
            message: self.message,
            error_messages: self.error_messages,
        };

        (self.status, Json(body)).into_response()
    }
}
