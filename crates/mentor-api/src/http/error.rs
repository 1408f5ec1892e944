//! Application error type mapping to HTTP status codes and response bodies.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use mentor_types::chat::{ChatFailure, ChatReply};
use mentor_types::error::{ChatError, InvokeError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Rejected input. Rendered as `{ "resposta": msg }` with 400.
    Validation(String),
    /// The generation service failed. The upstream status is mirrored.
    Upstream(InvokeError),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        match e {
            ChatError::Validation(msg) => AppError::Validation(msg),
            ChatError::Invoke(err) => AppError::Upstream(err),
        }
    }
}

/// Status to return for an upstream failure; anything outside 4xx/5xx is a 500.
fn mirrored_status(err: &InvokeError) -> StatusCode {
    StatusCode::from_u16(err.status_code())
        .ok()
        .filter(|s| s.is_client_error() || s.is_server_error())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(resposta) => {
                (StatusCode::BAD_REQUEST, Json(ChatReply { resposta })).into_response()
            }
            AppError::Upstream(err) => {
                let status = mirrored_status(&err);
                tracing::error!(status = status.as_u16(), error = %err, "Chat generation failed");
                let body = ChatFailure::upstream(status.as_u16(), err.details());
                (status, Json(body)).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mentor_types::llm::LlmError;

    #[test]
    fn test_mirrored_status_uses_upstream_code() {
        let err = InvokeError::RetryExhausted {
            attempts: 3,
            last: LlmError::Overloaded("busy".to_string()),
        };
        assert_eq!(mirrored_status(&err), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_mirrored_status_defaults_to_500() {
        let err = InvokeError::Fatal(LlmError::Provider {
            status: Some(302),
            message: "redirected".to_string(),
        });
        assert_eq!(mirrored_status(&err), StatusCode::INTERNAL_SERVER_ERROR);

        let err = InvokeError::Fatal(LlmError::Provider {
            status: None,
            message: "could not connect".to_string(),
        });
        assert_eq!(mirrored_status(&err), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_deadline_maps_to_gateway_timeout() {
        let err = InvokeError::DeadlineExceeded { timeout_ms: 30_000 };
        assert_eq!(mirrored_status(&err), StatusCode::GATEWAY_TIMEOUT);
    }
}
