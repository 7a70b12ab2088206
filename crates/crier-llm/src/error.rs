/// Text-generation failure.
///
/// Unlike fetch failures, these are not absorbed by the engine; the host
/// decides what to do with a generation that went wrong.
#[derive(Clone, Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("server error {status}: {body}")]
    ServerError { status: u16, body: String },
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("network error: {0}")]
    NetworkError(String),
    #[error("undecodable response: {0}")]
    Decode(String),
}

impl GenerateError {
    /// Classify an HTTP status code into the appropriate error variant.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => Self::AuthenticationFailed(body),
            429 => Self::RateLimited,
            500..=599 => Self::ServerError { status, body },
            _ => Self::InvalidRequest(format!("unexpected status {status}: {body}")),
        }
    }

    /// Short classification string for logging.
    pub fn error_kind(&self) -> &'static str {
        match self {
            Self::AuthenticationFailed(_) => "authentication_failed",
            Self::RateLimited => "rate_limited",
            Self::ServerError { .. } => "server_error",
            Self::InvalidRequest(_) => "invalid_request",
            Self::NetworkError(_) => "network_error",
            Self::Decode(_) => "decode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_status_mapping() {
        assert!(matches!(
            GenerateError::from_status(401, "no".into()),
            GenerateError::AuthenticationFailed(_)
        ));
        assert!(matches!(
            GenerateError::from_status(403, "no".into()),
            GenerateError::AuthenticationFailed(_)
        ));
        assert!(matches!(GenerateError::from_status(429, String::new()), GenerateError::RateLimited));
        assert!(matches!(
            GenerateError::from_status(500, "oops".into()),
            GenerateError::ServerError { status: 500, .. }
        ));
        assert!(matches!(
            GenerateError::from_status(418, "teapot".into()),
            GenerateError::InvalidRequest(_)
        ));
    }

    #[test]
    fn error_kind_strings() {
        assert_eq!(GenerateError::RateLimited.error_kind(), "rate_limited");
        assert_eq!(GenerateError::Decode("eof".into()).error_kind(), "decode");
    }
}
