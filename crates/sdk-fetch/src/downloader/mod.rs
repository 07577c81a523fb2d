//! Archive downloading and extraction.
//!
//! The fetcher streams a remote archive to disk (skipping files that already
//! exist) and the extractor unpacks a zip archive into a directory.

mod archive;
mod file;

pub use archive::ArchiveExtractor;
pub use file::{FetchOutcome, FileDownloader};
