//! Error type shared by the whole pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Shared `Result` alias for the crate.
pub type Result<T> = std::result::Result<T, ClickOpsError>;

#[derive(Debug, Error)]
pub enum ClickOpsError {
    #[error("Azure CLI is not installed or not found in PATH (tried '{program}')")]
    ToolNotFound { program: String },

    #[error("failed to execute '{cmd}': {source}")]
    Spawn {
        cmd: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{cmd}' failed (exit code {code:?}): {stderr}")]
    CommandFailed {
        cmd: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("response too large: {bytes} bytes for '{cmd}'")]
    ResponseTooLarge { cmd: String, bytes: usize },

    #[error("unexpected output from '{cmd}' at {path}: {details}")]
    Parse {
        cmd: String,
        path: String,
        details: String,
    },

    #[error("Azure login failed: {source}")]
    LoginFailed {
        #[source]
        source: Box<ClickOpsError>,
    },

    #[error("unable to fetch subscriptions: {source}")]
    SubscriptionList {
        #[source]
        source: Box<ClickOpsError>,
    },

    #[error("no subscription selected (input closed)")]
    SelectionAborted,

    #[error("failed to fetch resources for subscription {subscription}: {source}")]
    Fetch {
        subscription: String,
        #[source]
        source: Box<ClickOpsError>,
    },

    #[error("error creating CSV file {path}: {source}")]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error exporting to CSV {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ClickOpsError {
    /// Everything aborts the run except a failed CSV append.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::OutputWrite { .. })
    }
}
