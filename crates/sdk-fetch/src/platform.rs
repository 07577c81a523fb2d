//! Host platform, resolved once at startup and passed to every recipe.

use std::fmt;

use crate::{Result, SetupError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    Linux,
    MacOs,
}

impl Platform {
    /// Map an OS name as reported by `std::env::consts::OS`
    pub fn from_os_name(name: &str) -> Result<Self> {
        match name {
            "windows" => Ok(Platform::Windows),
            "linux" => Ok(Platform::Linux),
            "macos" => Ok(Platform::MacOs),
            other => Err(SetupError::UnsupportedHost {
                platform: other.to_string(),
            }),
        }
    }

    /// Detect the platform this binary is running on
    pub fn detect() -> Result<Self> {
        Self::from_os_name(std::env::consts::OS)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Linux => "linux",
            Platform::MacOs => "macos",
        }
    }

    /// Build the error for an SDK that has no download for this platform
    pub fn unsupported(&self, sdk: &str) -> SetupError {
        SetupError::UnsupportedPlatform {
            sdk: sdk.to_string(),
            platform: self.to_string(),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
