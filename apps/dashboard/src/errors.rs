use thiserror::Error;

/// Client-level error type shared by the widgets, the backend and the host.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned status {status}")]
    Status { status: u16 },

    #[error("{0}")]
    Rejected(String),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Response is missing '{0}'")]
    MissingField(&'static str),

    #[error("Missing required binding: {0}")]
    MissingBinding(&'static str),

    #[error("Dashboard already initialized")]
    AlreadyInitialized,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl DashboardError {
    /// The text shown to the user when an upload fails.
    ///
    /// Non-2xx responses collapse to a generic message; rejections carry the
    /// server's own wording.
    pub fn upload_message(&self) -> String {
        match self {
            DashboardError::Status { .. } => "Upload failed (network/server error)".to_string(),
            DashboardError::Rejected(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}
