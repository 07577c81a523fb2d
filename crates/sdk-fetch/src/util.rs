//! Path helpers shared by the recipes.

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use crate::Result;

/// Resolve `path` against the current directory and drop `.` and `..`
/// segments lexically. Symlinks are not resolved and the path need not exist.
pub fn normalize(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    Ok(normalize_lexically(&absolute))
}

/// Remove `.` and `..` components without touching the filesystem.
/// `..` never climbs above the root.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => normalized.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(normalized.components().next_back(), Some(Component::Normal(_))) {
                    normalized.pop();
                } else if !normalized.has_root() {
                    normalized.push("..");
                }
            }
            Component::Normal(part) => normalized.push(part),
        }
    }

    if normalized.as_os_str().is_empty() {
        normalized.push(".");
    }

    normalized
}

/// Sibling archive path for an install location: `deps/sdl` + `.zip` gives `deps/sdl.zip`.
/// Trailing separators on `location` are ignored.
pub fn archive_path_for(location: &Path, suffix: &str) -> PathBuf {
    let trimmed: PathBuf = location.components().collect();
    let mut name = OsString::from(trimmed.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}
