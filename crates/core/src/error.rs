use thiserror::Error;

/// Errors from reading a session snapshot.
#[derive(Error, Debug)]
pub enum SessionError {
    /// IO error reading the snapshot file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
