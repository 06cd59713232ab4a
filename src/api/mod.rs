//! REST API module.
//!
//! Contains all API routes and handlers for the portal's JSON contract.

mod catalogue;
mod sessions;

pub use catalogue::*;
pub use sessions::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::models::Notification;

/// Success response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T, notification: Option<Notification>) -> Self {
        Self {
            success: true,
            data,
            notification,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, crate::errors::AppError>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(ApiResponse::new(data, None))
}

/// Create a successful API response that also shows a banner.
pub fn success_with<T: Serialize>(data: T, notification: Notification) -> ApiResult<T> {
    Ok(ApiResponse::new(data, Some(notification)))
}
