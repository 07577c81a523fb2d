//! SDL2 development libraries.

use std::path::{Path, PathBuf};

use super::{install_archives, RemoteArchive, SetupContext};
use crate::platform::Platform;
use crate::util::{archive_path_for, normalize};
use crate::Result;

const SDK_NAME: &str = "SDL2";

/// Release archive for `version`. Only the Visual C++ development package
/// for Windows is published as a prebuilt zip.
pub fn download_url(platform: Platform, version: &str) -> Result<String> {
    match platform {
        Platform::Windows => Ok(format!(
            "https://github.com/libsdl-org/SDL/releases/download/release-{v}/SDL2-devel-{v}-VC.zip",
            v = version
        )),
        Platform::Linux | Platform::MacOs => Err(platform.unsupported(SDK_NAME)),
    }
}

/// Directory the archive unpacks to: `<location>/SDL2-<version>`
pub fn install_dir(location: &Path, version: &str) -> PathBuf {
    location.join(format!("SDL2-{}", version))
}

/// Local archive path: `<location>.zip`
pub fn archive_path(location: &Path) -> PathBuf {
    archive_path_for(location, ".zip")
}

/// The development archive for `version`, stored next to `location`
pub fn remote_archive(
    platform: Platform,
    location: &Path,
    version: &str,
) -> Result<RemoteArchive> {
    Ok(RemoteArchive::new(
        download_url(platform, version)?,
        archive_path(location),
    ))
}

/// Install SDL2 `version` below `location` and return the absolute path of
/// the versioned directory. An existing versioned directory is reported
/// without fetching anything.
pub async fn install(ctx: &SetupContext, location: &Path, version: &str) -> Result<PathBuf> {
    let target = install_dir(location, version);

    if target.exists() {
        log::debug!("{} already exists, skipping SDL2 download", target.display());
        return normalize(&target);
    }

    let archive = remote_archive(ctx.platform, location, version)?;
    install_from(ctx, location, version, &archive).await
}

/// Fetch and unpack `archive` into `location` and return the absolute path
/// of `<location>/SDL2-<version>`
pub async fn install_from(
    ctx: &SetupContext,
    location: &Path,
    version: &str,
    archive: &RemoteArchive,
) -> Result<PathBuf> {
    install_archives(ctx, std::slice::from_ref(archive), location).await?;

    normalize(&install_dir(location, version))
}
