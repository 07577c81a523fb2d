//! HTTP transport used by the downloader.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpError};
