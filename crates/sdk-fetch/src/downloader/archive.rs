//! Zip archive extraction.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use zip::result::ZipError;
use zip::ZipArchive;

use crate::{Result, SetupError};

/// Archive extractor
pub struct ArchiveExtractor;

impl ArchiveExtractor {
    /// Extract every entry of a zip archive below `dest_dir`, keeping the
    /// archive's relative paths. Existing files are overwritten.
    ///
    /// Returns the number of entries processed. The archive itself is left
    /// in place.
    pub fn extract_zip(archive_path: &Path, dest_dir: &Path) -> Result<usize> {
        let file = File::open(archive_path)?;
        let reader = BufReader::new(file);
        let mut archive =
            ZipArchive::new(reader).map_err(|e| Self::zip_error(archive_path, e))?;

        std::fs::create_dir_all(dest_dir)?;

        for i in 0..archive.len() {
            let mut entry = archive
                .by_index(i)
                .map_err(|e| Self::zip_error(archive_path, e))?;

            // Rejects absolute names and `..` components
            let relative_path = entry.enclosed_name().ok_or_else(|| SetupError::ArchiveFormat {
                path: archive_path.to_path_buf(),
                reason: format!("entry {} escapes the destination directory", entry.name()),
            })?;

            let outpath = dest_dir.join(&relative_path);

            if entry.is_dir() {
                std::fs::create_dir_all(&outpath)?;
                continue;
            }

            if let Some(parent) = outpath.parent() {
                std::fs::create_dir_all(parent)?;
            }

            // A previous extraction may have left a read-only file here
            if outpath.symlink_metadata().is_ok_and(|meta| !meta.is_dir()) {
                std::fs::remove_file(&outpath)?;
            }

            let mut outfile = File::create(&outpath)?;
            std::io::copy(&mut entry, &mut outfile)?;

            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Some(mode) = entry.unix_mode() {
                    std::fs::set_permissions(&outpath, std::fs::Permissions::from_mode(mode))?;
                }
            }
        }

        log::debug!(
            "Extracted {} entries from {} into {}",
            archive.len(),
            archive_path.display(),
            dest_dir.display()
        );

        Ok(archive.len())
    }

    fn zip_error(archive_path: &Path, error: ZipError) -> SetupError {
        match error {
            ZipError::Io(e) => SetupError::Io(e),
            other => SetupError::ArchiveFormat {
                path: archive_path.to_path_buf(),
                reason: other.to_string(),
            },
        }
    }
}
