use std::path::PathBuf;

use thiserror::Error;

use crate::http::HttpError;

#[derive(Error, Debug)]
pub enum SetupError {
    // Input errors
    #[error("Invalid download URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid version string: {0}")]
    InvalidVersion(String),

    // Network errors
    #[error("Download failed for {url}")]
    Network {
        url: String,
        #[source]
        source: HttpError,
    },

    // Archive errors
    #[error("Invalid archive {}: {reason}", .path.display())]
    ArchiveFormat { path: PathBuf, reason: String },

    // IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    // Platform errors
    #[error("{sdk} is not available for platform {platform}")]
    UnsupportedPlatform { sdk: String, platform: String },

    #[error("Unsupported host operating system: {platform}")]
    UnsupportedHost { platform: String },

    // Installer errors
    #[error("Installer {} failed: {reason}", .path.display())]
    InstallerFailed { path: PathBuf, reason: String },

    #[error("No installation found under {}", .0.display())]
    InstallationNotFound(PathBuf),
}

impl SetupError {
    /// Wrap an HTTP error for `url`, keeping disk failures as plain IO errors
    pub fn from_http(url: &str, error: HttpError) -> Self {
        match error {
            HttpError::Io(e) => SetupError::Io(e),
            other => SetupError::Network {
                url: url.to_string(),
                source: other,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, SetupError>;
