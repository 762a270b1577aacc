//! Shared HTTP plumbing for the auth endpoints and the gateway

use std::time::Duration;

use reqwest::{Client as HttpClient, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Request timeout applied to every call; there are no retries on top
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub(crate) fn build_client() -> Result<HttpClient, ApiError> {
    HttpClient::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))
}

/// Pull the server-supplied `{"message": ...}` out of an error body
pub(crate) fn server_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: String,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.message)
}

/// Map a non-success response to an [`ApiError`], consuming the body.
///
/// Success responses pass through untouched for the caller to read.
pub(crate) async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = server_message(&body);

    Err(match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized(
            message.unwrap_or_else(|| "Authentication required".to_string()),
        ),
        StatusCode::FORBIDDEN => ApiError::Forbidden,
        StatusCode::NOT_FOUND => {
            ApiError::NotFound(message.unwrap_or_else(|| "resource not found".to_string()))
        }
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ApiError::BadRequest(
            message.unwrap_or_else(|| {
                if body.is_empty() {
                    "Bad request".to_string()
                } else {
                    body.clone()
                }
            }),
        ),
        s if s.is_server_error() => {
            ApiError::ServerError(message.unwrap_or_else(|| format!("Server error: {}", s)))
        }
        s => ApiError::InvalidResponse(format!("Unexpected status code: {}", s)),
    })
}

/// Deserialize a JSON response body, typed at the boundary
pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)))
}
