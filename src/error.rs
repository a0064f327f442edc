use thiserror::Error;

/// Shown when the server reports a failure without saying why.
pub const FALLBACK_FAILURE_MESSAGE: &str = "Failed to retrieve text.";

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid endpoint: {0}")]
    Endpoint(String),
    #[error("{0}")]
    Request(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        TransportError::Request(e.to_string())
    }
}

/// Every way a submit cycle can end without rendering content.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never completed.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The body could not be encoded or the reply was not a valid response document.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("{}", .message.as_deref().unwrap_or("Server responded with a failure status"))]
    Status { status: u16, message: Option<String> },
    #[error("{}", .0.as_deref().unwrap_or(FALLBACK_FAILURE_MESSAGE))]
    Application(Option<String>),
}

impl ClientError {
    /// Transport and decode failures get the connectivity notice, everything
    /// else is reported as a server-side failure.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, ClientError::Transport(_) | ClientError::Json(_))
    }

    /// Text for the failure notice on the application path.
    pub fn failure_message(&self) -> String {
        match self {
            ClientError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            ClientError::Status {
                status,
                message: None,
            } => format!("Server responded with status: {status}"),
            ClientError::Application(message) => message
                .clone()
                .unwrap_or_else(|| FALLBACK_FAILURE_MESSAGE.to_string()),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("clipboard write rejected: {0}")]
pub struct ClipboardError(pub String);

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("no browser window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("required element #{0} is missing from the page")]
    MissingElement(String),
}
