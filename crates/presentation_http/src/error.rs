//! API error handling
//!
//! Client mistakes answer with `{ "error": ... }` and a 4xx status.
//! Pipeline failures answer 500 with `{ "success": false, "error": ... }`
//! where the message is the upstream service's own text.

use application::ApplicationError;
use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::DomainError;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// Narration failed after the request was accepted
    #[error("{0}")]
    Processing(String),
}

impl ApiError {
    /// HTTP status for this error
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Processing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Classify a multipart read failure
    ///
    /// Exceeding the body limit surfaces here as a length error.
    pub fn from_multipart(err: &MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge(err.body_text())
        } else {
            Self::BadRequest(err.body_text())
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Present and `false` for processing failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    /// Error message
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::BadRequest(msg) | Self::PayloadTooLarge(msg) => {
                warn!(status = status.as_u16(), error = %msg, "Request rejected");
                ErrorResponse {
                    success: None,
                    error: msg,
                }
            },
            Self::Processing(msg) => {
                error!(error = %msg, "Image processing failed");
                ErrorResponse {
                    success: Some(false),
                    error: msg,
                }
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        if err.is_too_large() {
            Self::PayloadTooLarge(err.to_string())
        } else {
            Self::BadRequest(err.to_string())
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(e) => e.into(),
            ApplicationError::ExternalService(msg) | ApplicationError::Configuration(msg) => {
                Self::Processing(msg)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_bad_request_message() {
        let err = ApiError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn api_error_processing_message_is_verbatim() {
        let err = ApiError::Processing("Request has invalid image format".to_string());
        assert_eq!(err.to_string(), "Request has invalid image format");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_response_without_success_flag() {
        let resp = ErrorResponse {
            success: None,
            error: "No image uploaded".to_string(),
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "No image uploaded" }));
    }

    #[test]
    fn error_response_with_success_flag() {
        let resp = ErrorResponse {
            success: Some(false),
            error: "boom".to_string(),
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json, serde_json::json!({ "success": false, "error": "boom" }));
    }

    #[test]
    fn domain_too_large_converts_to_payload_too_large() {
        let err: ApiError = DomainError::ImageTooLarge {
            size: 10,
            max: 5,
        }
        .into();
        assert_eq!(err.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn domain_empty_image_converts_to_bad_request() {
        let err: ApiError = DomainError::EmptyImage.into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn application_domain_error_keeps_classification() {
        let source = ApplicationError::Domain(DomainError::ImageTooLarge { size: 10, max: 5 });
        let result: ApiError = source.into();
        assert!(matches!(result, ApiError::PayloadTooLarge(_)));
    }

    #[test]
    fn application_configuration_converts_to_processing() {
        let result: ApiError = ApplicationError::Configuration("bad voice".to_string()).into();
        assert_eq!(result.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn application_external_service_converts_to_processing() {
        let result: ApiError =
            ApplicationError::ExternalService("Rate exceeded".to_string()).into();
        assert!(matches!(result, ApiError::Processing(ref m) if m == "Rate exceeded"));
    }

    #[test]
    fn processing_error_response_status() {
        let response = ApiError::Processing("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
