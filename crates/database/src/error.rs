use sea_orm::DbErr;

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failures surfaced by the services.
///
/// Store errors are passed through untouched; callers decide how to present them.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A write affected no rows, or the request asked for something the data rules forbid
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Database(#[from] DbErr),
}

impl ServiceError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
}
