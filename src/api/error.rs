/// Failure talking to the ShariaStocks backend
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid endpoint `{0}`")]
    InvalidUrl(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded {status}: {message}")]
    Status { status: u16, message: String },
    /// 2xx response that still reports `success: false`
    #[error("request rejected: {0}")]
    Rejected(String),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Text shown in the UI; prefers whatever the server said
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { message, .. } | Self::Rejected(message) if !message.is_empty() => {
                message.clone()
            }
            Self::Status { status, .. } => t!("error.status", status = status),
            Self::Transport(err) if err.is_timeout() => t!("error.timeout"),
            Self::Transport(_) => t!("error.network"),
            Self::Rejected(_) | Self::Decode(_) | Self::InvalidUrl(_) => t!("error.unexpected"),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Extract a human readable message from an error body
///
/// The Express routes answer with `{ "message": .. }` or `{ "error": .. }`;
/// anything else is passed through trimmed.
pub(crate) fn server_message(body: &[u8]) -> String {
    #[derive(serde::Deserialize)]
    struct Body {
        message: Option<String>,
        error: Option<String>,
    }

    if let Ok(Body { message, error }) = serde_json::from_slice::<Body>(body) {
        if let Some(text) = message.or(error).filter(|m| !m.trim().is_empty()) {
            return text.trim().to_string();
        }
        return String::new();
    }
    String::from_utf8_lossy(body).trim().chars().take(200).collect()
}
