//! Error types for motion.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MotionError>;

#[derive(Debug, Error)]
pub enum MotionError {
    #[error("{0}")]
    Usage(String),

    #[error("could not reach registry at {url}: {message}")]
    Network { url: String, message: String },

    #[error("component '{0}' not found in the registry")]
    ComponentNotFound(String),

    #[error("failed to fetch component: {status} {status_text}")]
    FetchFailed { status: u16, status_text: String },

    #[error("invalid manifest: {0}")]
    InvalidManifest(String),

    #[error("{failed} of {total} file(s) failed to install")]
    PartialInstall { failed: usize, total: usize },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("validation failed: {0}")]
    ValidationFailed(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MotionError {
    /// Stable machine-readable code used in robot output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Usage(_) => "usage",
            Self::Network { .. } => "network",
            Self::ComponentNotFound(_) => "component_not_found",
            Self::FetchFailed { .. } => "fetch_failed",
            Self::InvalidManifest(_) => "invalid_manifest",
            Self::PartialInstall { .. } => "partial_install",
            Self::Config(_) => "config",
            Self::ValidationFailed(_) => "validation_failed",
            Self::Io(_) => "io",
            Self::Serialization(_) => "serialization",
        }
    }

    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) => 2,
            _ => 1,
        }
    }

    /// Follow-up suggestion printed under the error in human mode.
    #[must_use]
    pub const fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Network { .. } => Some("Check your internet connection and try again."),
            Self::ComponentNotFound(_) => {
                Some("Browse the catalog for available component names.")
            }
            Self::PartialInstall { .. } => {
                Some("Fix the errors above and re-run with --overwrite to retry.")
            }
            _ => None,
        }
    }
}
