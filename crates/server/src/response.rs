use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use models::pagination::PaginationMeta;
use serde::Serialize;

/// Envelope wrapped around every successful response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    status_code: u16,
    success: bool,
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    meta: Option<PaginationMeta>,
    data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(message: &'static str, data: T) -> Self {
        Self {
            status_code: StatusCode::OK.as_u16(),
            success: true,
            message,
            meta: None,
            data,
        }
    }

    pub fn with_meta(mut self, meta: PaginationMeta) -> Self {
        self.meta = Some(meta);
        self
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}
