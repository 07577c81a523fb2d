//! Provisioning recipes for the third-party SDKs used by the engine build.
//!
//! Every recipe follows the same linear pipeline: check whether the install
//! location already exists, fetch the archive(s), unpack them, and return the
//! normalized installation path. The host platform is injected through
//! [`SetupContext`] so URL selection never queries the OS directly.

pub mod glslang;
pub mod sdl;
pub mod vulkan;

use std::path::{Path, PathBuf};

use crate::downloader::{ArchiveExtractor, FileDownloader};
use crate::platform::Platform;
use crate::Result;

/// Everything a recipe needs, resolved once at the entry point
pub struct SetupContext {
    pub platform: Platform,
    pub downloader: FileDownloader,
}

impl SetupContext {
    pub fn new(platform: Platform, downloader: FileDownloader) -> Self {
        Self {
            platform,
            downloader,
        }
    }
}

/// A remote archive and where to store it locally
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteArchive {
    pub url: String,
    pub archive_path: PathBuf,
}

impl RemoteArchive {
    pub fn new(url: impl Into<String>, archive_path: impl Into<PathBuf>) -> Self {
        Self {
            url: url.into(),
            archive_path: archive_path.into(),
        }
    }
}

/// Fetch and unpack each archive into `location`, in order, removing each
/// archive once it has been extracted. An archive that fails to extract is
/// left on disk.
pub async fn install_archives(
    ctx: &SetupContext,
    archives: &[RemoteArchive],
    location: &Path,
) -> Result<()> {
    for archive in archives {
        ctx.downloader.fetch(&archive.url, &archive.archive_path).await?;
        ArchiveExtractor::extract_zip(&archive.archive_path, location)?;
        std::fs::remove_file(&archive.archive_path)?;
    }

    Ok(())
}
