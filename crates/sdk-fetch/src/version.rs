//! Dotted numeric SDK versions such as `1.3.250.1`.

use lazy_static::lazy_static;
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;

use crate::{Result, SetupError};

lazy_static! {
    static ref FOUR_PART_VERSION: Regex = Regex::new(r"(\d+\.\d+\.\d+\.\d+)").unwrap();
}

/// A version made of numeric components. Missing trailing components
/// compare as zero, so `1.3` equals `1.3.0`.
#[derive(Debug, Clone)]
pub struct SdkVersion {
    parts: Vec<u64>,
}

impl SdkVersion {
    /// Parse a version string like "1.3.250.1"
    pub fn parse(version_str: &str) -> Result<Self> {
        let trimmed = version_str.trim();
        if trimmed.is_empty() {
            return Err(SetupError::InvalidVersion(version_str.to_string()));
        }

        let parts = trimmed
            .split('.')
            .map(|part| part.parse::<u64>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| SetupError::InvalidVersion(version_str.to_string()))?;

        Ok(Self { parts })
    }

    /// Find the first four-part version embedded in `text`, e.g. in an installer URL
    pub fn find_in(text: &str) -> Option<Self> {
        let found = FOUR_PART_VERSION.captures(text)?.get(1)?;
        Self::parse(found.as_str()).ok()
    }

    pub fn parts(&self) -> &[u64] {
        &self.parts
    }

    fn component(&self, index: usize) -> u64 {
        self.parts.get(index).copied().unwrap_or(0)
    }
}

impl Ord for SdkVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.parts.len().max(other.parts.len());
        (0..len)
            .map(|i| self.component(i).cmp(&other.component(i)))
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for SdkVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SdkVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SdkVersion {}

impl fmt::Display for SdkVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .parts
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(".");
        f.write_str(&joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> SdkVersion {
        SdkVersion::parse(s).unwrap()
    }

    #[test]
    fn test_parse() {
        assert_eq!(v("1.3.250.1").parts(), &[1, 3, 250, 1]);
        assert_eq!(v("2").parts(), &[2]);
        assert!(SdkVersion::parse("").is_err());
        assert!(SdkVersion::parse("1.x.3").is_err());
        assert!(SdkVersion::parse("Config").is_err());
    }

    #[test]
    fn test_ordering() {
        assert!(v("1.3.250.1") > v("1.3.246.0"));
        assert!(v("1.3.250.1") < v("1.3.250.2"));
        assert!(v("1.10") > v("1.9.9"));
        assert_eq!(v("1.3"), v("1.3.0.0"));
        assert_eq!(v("1.3").cmp(&v("1.3.0")), Ordering::Equal);
    }

    #[test]
    fn test_find_in_url() {
        let url = "https://sdk.lunarg.com/sdk/download/1.3.250.1/windows/VulkanSDK-1.3.250.1-Installer.exe";
        assert_eq!(SdkVersion::find_in(url), Some(v("1.3.250.1")));
        assert_eq!(SdkVersion::find_in("https://example.test/latest"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(v("1.3.250.1").to_string(), "1.3.250.1");
    }
}
