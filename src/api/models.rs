use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::collections::BTreeMap;
use tracing::error;
use utoipa::ToSchema;

use crate::core::errors::ContactBookError;

// Error response struct
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    /// Per-field validation messages, present only for invalid input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

// Newtype wrapper for ContactBookError to implement IntoResponse
pub struct ApiError(pub ContactBookError);

impl From<ContactBookError> for ApiError {
    fn from(err: ContactBookError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message, errors) = match self.0 {
            ContactBookError::InvalidInput(fields) => (
                StatusCode::BAD_REQUEST,
                "Invalid input".to_string(),
                Some(
                    fields
                        .into_iter()
                        .map(|(field, message)| (field.to_string(), message))
                        .collect(),
                ),
            ),
            ContactBookError::InvalidId(id) => (StatusCode::BAD_REQUEST, format!("Invalid user id: {}", id), None),
            ContactBookError::UserNotFound(id) => (StatusCode::NOT_FOUND, format!("User {} not found", id), None),
            ContactBookError::StorageError(msg) => {
                error!("storage failure: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Storage error: {}", msg), None)
            }
            ContactBookError::LoggingError(msg) => {
                error!("activity log failure: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Logging error: {}", msg), None)
            }
            ContactBookError::MalformedBody(msg) => {
                (StatusCode::BAD_REQUEST, format!("Malformed request body: {}", msg), None)
            }
        };
        (status, Json(ErrorResponse { message, errors })).into_response()
    }
}

/// JSON body extractor whose rejections use the API's `{message}` error body
/// instead of axum's plain-text rejection.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(ApiError(ContactBookError::MalformedBody(rejection.body_text()))),
        }
    }
}
