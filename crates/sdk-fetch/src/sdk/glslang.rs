//! glslang shader compiler toolkit (prebuilt `main-tot` release).

use std::path::{Path, PathBuf};

use super::{install_archives, RemoteArchive, SetupContext};
use crate::platform::Platform;
use crate::util::{archive_path_for, normalize};
use crate::Result;

const SDK_NAME: &str = "glslang";
const RELEASE_BASE: &str = "https://github.com/KhronosGroup/glslang/releases/download/main-tot";

/// Build flavour shipped as a separate archive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Release,
    Debug,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Release, Variant::Debug];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Release => "Release",
            Variant::Debug => "Debug",
        }
    }
}

/// Download URLs for every variant on `platform`, Release first
pub fn download_urls(platform: Platform) -> Result<Vec<(Variant, String)>> {
    let asset_prefix = match platform {
        Platform::Windows => "glslang-master-windows",
        Platform::Linux => "glslang-main-linux",
        Platform::MacOs => return Err(platform.unsupported(SDK_NAME)),
    };

    Ok(Variant::ALL
        .iter()
        .map(|variant| {
            (
                *variant,
                format!("{}/{}-{}.zip", RELEASE_BASE, asset_prefix, variant.as_str()),
            )
        })
        .collect())
}

/// Local archive path for `variant`: `<location>-<Variant>.zip`
pub fn archive_path(location: &Path, variant: Variant) -> PathBuf {
    archive_path_for(location, &format!("-{}.zip", variant.as_str()))
}

/// Every variant's archive on `platform`, stored next to `location`
pub fn remote_archives(platform: Platform, location: &Path) -> Result<Vec<RemoteArchive>> {
    Ok(download_urls(platform)?
        .into_iter()
        .map(|(variant, url)| RemoteArchive::new(url, archive_path(location, variant)))
        .collect())
}

/// Install glslang into `location` and return its absolute path.
///
/// Both variants are extracted into the same directory. Nothing is fetched
/// when `location` already exists.
pub async fn install(ctx: &SetupContext, location: &Path) -> Result<PathBuf> {
    if location.exists() {
        log::debug!("{} already exists, skipping glslang download", location.display());
        return normalize(location);
    }

    let archives = remote_archives(ctx.platform, location)?;
    install_from(ctx, location, &archives).await
}

/// Fetch and unpack `archives` into `location`, in order
pub async fn install_from(
    ctx: &SetupContext,
    location: &Path,
    archives: &[RemoteArchive],
) -> Result<PathBuf> {
    install_archives(ctx, archives, location).await?;

    normalize(location)
}
