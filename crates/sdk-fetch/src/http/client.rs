//! HTTP client for SDK downloads.
//!
//! This module provides a thin wrapper around `reqwest` tuned for fetching
//! large release archives:
//! - Streaming downloads straight to disk with a progress callback
//! - Explicit rejection of non-2xx responses
//! - A connect timeout but no overall timeout, so slow mirrors still finish
//! - Optional proxy configuration
//!
//! Requests are issued exactly once. A failed download is reported to the
//! caller and never retried.
//!
//! # Examples
//!
//! ```no_run
//! use sdk_fetch::http::{HttpClient, HttpClientConfig};
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = HttpClientConfig::new()
//!     .with_connect_timeout(Duration::from_secs(5));
//! let client = HttpClient::with_config(config)?;
//!
//! let bytes = client.download(
//!     "https://example.com/sdk.zip",
//!     "/tmp/sdk.zip".as_ref(),
//!     Some(|downloaded, total| {
//!         println!("Downloaded {}/{} bytes", downloaded, total);
//!     }),
//! ).await?;
//! println!("{} bytes written", bytes);
//! # Ok(())
//! # }
//! ```

use futures_util::StreamExt;
use reqwest::{Client, Response};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

const DEFAULT_USER_AGENT: &str = concat!("sdk-fetch/", env!("CARGO_PKG_VERSION"));
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum HttpError {
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status}: {url}")]
    HttpStatus { status: u16, url: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_config(HttpClientConfig::default())
    }

    pub fn with_config(config: HttpClientConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder()
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(proxy_url) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy_url)?;
            builder = builder.proxy(proxy);
        } else if !config.system_proxy {
            builder = builder.no_proxy();
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            user_agent: config.user_agent,
        })
    }

    /// Perform a single GET request, failing on any non-2xx status
    pub async fn get(&self, url: &str) -> Result<Response, HttpError> {
        log::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response)
    }

    /// Stream a response body to `dest`, returning the number of bytes written.
    ///
    /// The callback receives `(downloaded, total)` after every chunk. `total`
    /// is taken from `Content-Length` and is 0 when the server omits it.
    /// A partially written file is left in place if the transfer fails.
    pub async fn download<F>(
        &self,
        url: &str,
        dest: &Path,
        progress: Option<F>,
    ) -> Result<u64, HttpError>
    where
        F: Fn(u64, u64),
    {
        let response = self.get(url).await?;

        let total_size = response.content_length().unwrap_or(0);

        if let Some(parent) = dest.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let mut file = File::create(dest).await?;
        let mut downloaded: u64 = 0;

        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            downloaded += chunk.len() as u64;

            if let Some(ref callback) = progress {
                callback(downloaded, total_size);
            }
        }

        file.flush().await?;

        Ok(downloaded)
    }

    /// Get the configured user agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Overall request timeout. `None` lets large archives take as long as they need.
    pub timeout: Option<Duration>,
    pub connect_timeout: Duration,
    pub proxy: Option<String>,
    /// Honour `HTTP_PROXY`/`HTTPS_PROXY`/`NO_PROXY` when no explicit proxy is set
    pub system_proxy: bool,
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            proxy: None,
            system_proxy: true,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl HttpClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    pub fn with_proxy(mut self, proxy: String) -> Self {
        self.proxy = Some(proxy);
        self
    }

    pub fn with_system_proxy(mut self, enabled: bool) -> Self {
        self.system_proxy = enabled;
        self
    }

    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }
}
