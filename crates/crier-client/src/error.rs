/// Why a fetch from the game service produced no data.
///
/// Transport problems and undecodable bodies are distinct kinds: the former
/// usually means the service is down, the latter that its API changed.
#[derive(Clone, Debug, thiserror::Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("undecodable body: {0}")]
    Decode(String),
}

impl FetchError {
    /// Short classification string for logging.
    pub fn error_kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Status { .. } => "status",
            Self::Decode(_) => "decode",
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kind_strings() {
        assert_eq!(FetchError::Transport("refused".into()).error_kind(), "transport");
        assert_eq!(
            FetchError::Status { status: 500, body: "oops".into() }.error_kind(),
            "status"
        );
        assert_eq!(FetchError::Decode("eof".into()).error_kind(), "decode");
    }
}
