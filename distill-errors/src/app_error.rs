use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    #[error("Invalid API key")]
    MissingOrInvalidCredential,

    #[error("Completion service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Missing content in request body")]
    MissingContent,

    #[error("Completion service unreachable: {0}")]
    UpstreamUnreachable(String),

    #[error("Completion service error: {0}")]
    UpstreamError(String),

    #[error("Completion service returned malformed JSON: {0}")]
    MalformedUpstreamJson(String),

    #[error("Completion service returned an unexpected shape: {0}")]
    UnexpectedUpstreamShape(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingOrInvalidCredential => 401,
            Self::ServiceUnavailable(_) => 503,
            Self::InvalidRequest(_) | Self::MissingContent => 400,
            Self::UpstreamUnreachable(_) => 502,
            Self::UpstreamError(_)
            | Self::MalformedUpstreamJson(_)
            | Self::UnexpectedUpstreamShape(_)
            | Self::Internal(_) => 500,
        }
    }

    /// Stable machine-readable identifier sent as the `error` field.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingOrInvalidCredential => "invalid_api_key",
            Self::ServiceUnavailable(_) => "service_unavailable",
            Self::InvalidRequest(_) => "invalid_request",
            Self::MissingContent => "missing_content",
            Self::UpstreamUnreachable(_) => "upstream_unreachable",
            Self::UpstreamError(_) => "upstream_error",
            Self::MalformedUpstreamJson(_) => "malformed_upstream_json",
            Self::UnexpectedUpstreamShape(_) => "unexpected_upstream_shape",
            Self::Internal(_) => "internal",
        }
    }

    pub fn user_message(&self) -> &str {
        match self {
            Self::MissingOrInvalidCredential => "Invalid API Key",
            Self::ServiceUnavailable(_) => "Completion service is not configured",
            Self::InvalidRequest(_) => "Request body could not be processed",
            Self::MissingContent => "Missing content in request body",
            Self::UpstreamUnreachable(_) => "Completion service could not be reached",
            Self::UpstreamError(_) => "Error processing request",
            Self::MalformedUpstreamJson(_) => "Completion service returned invalid JSON",
            Self::UnexpectedUpstreamShape(_) => "Completion service returned an unexpected response",
            Self::Internal(_) => "Error processing request",
        }
    }

    /// Message sent to the caller: the short description, plus the detail for
    /// variants whose detail is safe to surface.
    pub fn public_message(&self) -> String {
        match self {
            Self::InvalidRequest(detail)
            | Self::UpstreamUnreachable(detail)
            | Self::UpstreamError(detail)
            | Self::MalformedUpstreamJson(detail)
            | Self::UnexpectedUpstreamShape(detail) => {
                format!("{}: {}", self.user_message(), detail)
            }
            _ => self.user_message().to_string(),
        }
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}

#[cfg(feature = "axum")]
mod axum_impl {
    use super::AppError;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::Json;

    #[derive(serde::Serialize)]
    struct ErrorResponse {
        error: &'static str,
        message: String,
        status: u16,
    }

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = StatusCode::from_u16(self.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            let body = ErrorResponse {
                error: self.code(),
                message: self.public_message(),
                status: status.as_u16(),
            };
            (status, Json(body)).into_response()
        }
    }
}
