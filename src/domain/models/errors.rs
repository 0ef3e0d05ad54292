use thiserror::Error;

/// Everything that can fail during a deployment, split up so callers can tell
/// a rejected login apart from a dropped connection. No stage is retried.
#[derive(Debug, Error)]
pub enum DeployError {
    #[error("Invalid Roll20 credentials!")]
    Authentication,

    #[error("Request to Roll20 failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected script listing markup: {0}")]
    Parse(String),
}
