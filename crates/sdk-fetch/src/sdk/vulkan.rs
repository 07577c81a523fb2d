//! Vulkan SDK, installed system-wide through the LunarG installer.
//!
//! Unlike the zip-based SDKs the Vulkan SDK is installed by running the
//! vendor installer silently. Installed versions live in versioned
//! directories under a common root (`C:\VulkanSDK\1.3.250.1`), and the
//! installer only runs when the pinned version is newer than the newest
//! one found there.

use std::path::{Path, PathBuf};

use tokio::process::Command;

use super::SetupContext;
use crate::platform::Platform;
use crate::version::SdkVersion;
use crate::{Result, SetupError};

const SDK_NAME: &str = "Vulkan SDK";

pub const DEFAULT_INSTALLER_URL: &str =
    "https://sdk.lunarg.com/sdk/download/1.3.250.1/windows/VulkanSDK-1.3.250.1-Installer.exe";
pub const DEFAULT_SDK_ROOT: &str = r"C:\VulkanSDK";
const INSTALLER_FILE_NAME: &str = "vulkan_sdk_installer.exe";

#[derive(Debug, Clone)]
pub struct VulkanOptions {
    /// Installer to run; the required version is read from this URL
    pub installer_url: String,
    /// Directory holding one subdirectory per installed version
    pub sdk_root: PathBuf,
    /// Where the installer is downloaded before it runs
    pub installer_path: PathBuf,
}

impl Default for VulkanOptions {
    fn default() -> Self {
        Self {
            installer_url: DEFAULT_INSTALLER_URL.to_string(),
            sdk_root: PathBuf::from(DEFAULT_SDK_ROOT),
            installer_path: std::env::temp_dir().join(INSTALLER_FILE_NAME),
        }
    }
}

impl VulkanOptions {
    pub fn with_installer_url(mut self, installer_url: String) -> Self {
        self.installer_url = installer_url;
        self
    }

    pub fn with_sdk_root(mut self, sdk_root: PathBuf) -> Self {
        self.sdk_root = sdk_root;
        self
    }

    pub fn with_installer_path(mut self, installer_path: PathBuf) -> Self {
        self.installer_path = installer_path;
        self
    }

    /// Version the installer provides
    pub fn required_version(&self) -> Result<SdkVersion> {
        SdkVersion::find_in(&self.installer_url)
            .ok_or_else(|| SetupError::InvalidVersion(self.installer_url.clone()))
    }
}

/// An installed SDK version and its directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledSdk {
    pub version: SdkVersion,
    pub path: PathBuf,
}

/// Newest version installed under `sdk_root`, if any.
///
/// Only directories whose name parses as a version are considered. The
/// returned path uses forward slashes.
pub fn latest_installed(sdk_root: &Path) -> Result<Option<InstalledSdk>> {
    if !sdk_root.is_dir() {
        return Ok(None);
    }

    let mut latest: Option<InstalledSdk> = None;

    for entry in std::fs::read_dir(sdk_root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }

        let name = entry.file_name();
        let Ok(version) = SdkVersion::parse(&name.to_string_lossy()) else {
            log::debug!("Ignoring {} in {}", name.to_string_lossy(), sdk_root.display());
            continue;
        };

        if latest.as_ref().map_or(true, |current| version > current.version) {
            let path = entry.path().to_string_lossy().replace('\\', "/");
            latest = Some(InstalledSdk {
                version,
                path: PathBuf::from(path),
            });
        }
    }

    Ok(latest)
}

/// Whether the installer has to run to provide `required`
pub fn needs_install(required: &SdkVersion, installed: Option<&SdkVersion>) -> bool {
    match installed {
        None => true,
        Some(installed) => required > installed,
    }
}

/// Make sure the pinned Vulkan SDK (or a newer one) is installed and
/// return the path of the newest installed version.
pub async fn install(ctx: &SetupContext, options: &VulkanOptions) -> Result<PathBuf> {
    if ctx.platform != Platform::Windows {
        return Err(ctx.platform.unsupported(SDK_NAME));
    }

    let required = options.required_version()?;
    let installed = latest_installed(&options.sdk_root)?;

    if needs_install(&required, installed.as_ref().map(|sdk| &sdk.version)) {
        log::info!("Installing Vulkan SDK {}", required);

        ctx.downloader
            .fetch(&options.installer_url, &options.installer_path)
            .await?;
        run_installer(&options.installer_path).await?;
        std::fs::remove_file(&options.installer_path)?;
    } else if let Some(sdk) = &installed {
        log::debug!("Vulkan SDK {} already installed at {}", sdk.version, sdk.path.display());
    }

    latest_installed(&options.sdk_root)?
        .map(|sdk| sdk.path)
        .ok_or_else(|| SetupError::InstallationNotFound(options.sdk_root.clone()))
}

/// Run the installer silently and wait for it to finish
async fn run_installer(installer: &Path) -> Result<()> {
    // Downloaded files carry no execute bit on Unix
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut permissions = std::fs::metadata(installer)?.permissions();
        permissions.set_mode(permissions.mode() | 0o755);
        std::fs::set_permissions(installer, permissions)?;
    }

    let status = Command::new(installer)
        .arg("/S")
        .status()
        .await
        .map_err(|e| SetupError::InstallerFailed {
            path: installer.to_path_buf(),
            reason: e.to_string(),
        })?;

    if !status.success() {
        return Err(SetupError::InstallerFailed {
            path: installer.to_path_buf(),
            reason: format!("exited with {}", status),
        });
    }

    Ok(())
}
