//! File downloader for HTTP/HTTPS archives.

use std::path::Path;

use url::Url;

use crate::http::{HttpClient, HttpClientConfig};
use crate::progress::{format_bytes, ProgressManager};
use crate::{Result, SetupError};

/// What a call to [`FileDownloader::fetch`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A file already existed at the destination; no request was made
    AlreadyPresent,
    /// The resource was downloaded
    Downloaded { bytes: u64 },
}

/// File downloader for HTTP archives
pub struct FileDownloader {
    http_client: HttpClient,
    progress: ProgressManager,
}

impl FileDownloader {
    /// Create a new file downloader
    pub fn new(http_client: HttpClient, progress: ProgressManager) -> Self {
        Self {
            http_client,
            progress,
        }
    }

    /// Create a downloader from an HTTP configuration
    pub fn with_config(
        config: HttpClientConfig,
        progress: ProgressManager,
    ) -> std::result::Result<Self, reqwest::Error> {
        let http_client = HttpClient::with_config(config)?;
        Ok(Self::new(http_client, progress))
    }

    /// Download `url` to `dest` unless a file is already there.
    ///
    /// An existing file is trusted as-is: it is never re-validated or
    /// replaced, and no network request is made.
    pub async fn fetch(&self, url: &str, dest: &Path) -> Result<FetchOutcome> {
        if dest.is_file() {
            log::debug!("{} already exists, skipping download", dest.display());
            return Ok(FetchOutcome::AlreadyPresent);
        }

        validate_url(url)?;

        log::info!("Downloading {} to {}", url, dest.display());

        let name = dest
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| url.to_string());
        let bar = self.progress.create_download_bar(&name);

        let result = self
            .http_client
            .download(url, dest, Some(|downloaded, total| bar.update(downloaded, total)))
            .await;
        bar.finish();

        let bytes = result.map_err(|e| SetupError::from_http(url, e))?;
        log::info!("Downloaded {} ({})", dest.display(), format_bytes(bytes));

        Ok(FetchOutcome::Downloaded { bytes })
    }
}

/// Only absolute `http` and `https` URLs are accepted
fn validate_url(url: &str) -> Result<()> {
    let parsed = Url::parse(url).map_err(|e| SetupError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(SetupError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme '{}'", scheme),
        }),
    }
}
