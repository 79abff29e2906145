use actix_web::{HttpResponse, ResponseError, http::StatusCode, http::header::ContentType};
use thiserror::Error;

pub type RelayResult<T> = Result<T, RelayError>;

/// Failure kinds of a chat relay. Every downstream kind renders as a 500 with a
/// fixed message; the variant keeps the cause for logs and tests.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("invalid chat request: {0}")]
    InvalidRequest(String),
    #[error("failed to encode inference request: {0}")]
    Marshal(#[source] serde_json::Error),
    #[error("model invocation failed: {0:#}")]
    Provider(anyhow::Error),
    #[error("failed to decode inference response: {0}")]
    ParseResponse(#[source] serde_json::Error),
    #[error("inference response has no content blocks")]
    EmptyContent,
}

impl RelayError {
    /// Message written to the client.
    pub fn public_message(&self) -> &'static str {
        match self {
            RelayError::InvalidRequest(_) => "Invalid request",
            RelayError::Marshal(_) => "Failed to marshal request",
            RelayError::Provider(_) => "Bedrock API error",
            RelayError::ParseResponse(_) => "Failed to parse Bedrock response",
            RelayError::EmptyContent => "Empty Bedrock response",
        }
    }
}

impl ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.public_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            RelayError::InvalidRequest("eof".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RelayError::Provider(anyhow::anyhow!("throttled")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            RelayError::EmptyContent.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_public_message_hides_cause() {
        let err = RelayError::Provider(anyhow::anyhow!("AccessDeniedException: secret detail"));
        assert_eq!(err.public_message(), "Bedrock API error");
        assert!(err.to_string().contains("AccessDeniedException"));
    }
}
