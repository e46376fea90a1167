//! Standardized error handling for API responses
//!
//! Every response, success or failure, carries the `{msg, data}` envelope;
//! errors map domain failures onto HTTP status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

use crate::kubernetes::error::K8sError;

/// Response envelope shared by every endpoint: a human-readable message and
/// an optional payload.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub msg: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Success envelope with a payload
    pub fn ok(msg: impl Into<String>, data: T) -> Json<Self> {
        Json(Self {
            msg: msg.into(),
            data: Some(data),
        })
    }
}

impl ApiResponse<()> {
    /// Success envelope for operations with nothing to return (deletes,
    /// restarts)
    pub fn msg_only(msg: impl Into<String>) -> Json<Self> {
        Json(Self {
            msg: msg.into(),
            data: None,
        })
    }
}

/// API error types with standardized responses
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request
    BadRequest(String),

    /// 404 Not Found
    NotFound(String),

    /// 403 Forbidden
    Forbidden(String),

    /// 409 Conflict
    Conflict(String),

    /// 422 Unprocessable Entity
    Validation(String),

    /// 503 Service Unavailable
    ServiceUnavailable(String),

    /// 500 Internal Server Error
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn into_message(self) -> String {
        match self {
            ApiError::BadRequest(msg)
            | ApiError::NotFound(msg)
            | ApiError::Forbidden(msg)
            | ApiError::Conflict(msg)
            | ApiError::Validation(msg)
            | ApiError::ServiceUnavailable(msg)
            | ApiError::Internal(msg) => msg,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = self.into_message();

        if status.is_server_error() {
            error!("API error ({}): {}", status, msg);
        }

        (status, Json(ApiResponse::<()> { msg, data: None })).into_response()
    }
}

/// Map Kubernetes failures onto HTTP statuses; the control plane's own
/// status code wins when there is one.
impl From<K8sError> for ApiError {
    fn from(err: K8sError) -> Self {
        match &err {
            K8sError::Api {
                source: kube::Error::Api(response),
                ..
            } => {
                let msg = err.to_string();
                match response.code {
                    404 => ApiError::NotFound(msg),
                    403 => ApiError::Forbidden(msg),
                    409 => ApiError::Conflict(msg),
                    400 | 422 => ApiError::Validation(msg),
                    _ => ApiError::Internal(msg),
                }
            }
            K8sError::InvalidManifest(_) => ApiError::BadRequest(err.to_string()),
            K8sError::InvalidKubeconfig(_) => ApiError::ServiceUnavailable(err.to_string()),
            K8sError::Api { .. } => ApiError::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kube::core::ErrorResponse;

    fn kube_api_error(code: u16) -> K8sError {
        K8sError::api(
            "failed to get pod",
            kube::Error::Api(ErrorResponse {
                status: "Failure".to_string(),
                message: "boom".to_string(),
                reason: "TestReason".to_string(),
                code,
            }),
        )
    }

    #[test]
    fn envelope_serializes_msg_and_data() {
        let Json(envelope) = ApiResponse::ok("pod list fetched", vec![1, 2, 3]);
        let json = serde_json::to_string(&envelope).unwrap();
        assert!(json.contains("\"msg\":\"pod list fetched\""));
        assert!(json.contains("\"data\":[1,2,3]"));
    }

    #[test]
    fn msg_only_envelope_has_null_data() {
        let Json(envelope) = ApiResponse::msg_only("pod deleted");
        let json = serde_json::to_string(&envelope).unwrap();
        assert!(json.contains("\"data\":null"));
    }

    #[test]
    fn control_plane_status_codes_drive_the_mapping() {
        assert!(matches!(
            ApiError::from(kube_api_error(404)),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from(kube_api_error(409)),
            ApiError::Conflict(_)
        ));
        assert!(matches!(
            ApiError::from(kube_api_error(403)),
            ApiError::Forbidden(_)
        ));
        assert!(matches!(
            ApiError::from(kube_api_error(422)),
            ApiError::Validation(_)
        ));
        assert!(matches!(
            ApiError::from(kube_api_error(500)),
            ApiError::Internal(_)
        ));
    }

    #[test]
    fn wrapped_errors_keep_their_context_prefix() {
        let err = ApiError::from(kube_api_error(404));
        let msg = err.into_message();
        assert!(msg.starts_with("failed to get pod"));
    }

    #[test]
    fn bad_manifest_is_a_client_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ApiError::from(K8sError::InvalidManifest(parse_err));
        assert!(matches!(err, ApiError::BadRequest(_)));
    }
}
