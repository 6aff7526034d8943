//! Access to the image resources photos point at
//!
//! The model never touches the filesystem directly. Everything it needs from
//! the environment goes through the [`Resources`] trait so tests can supply an
//! in-memory implementation.

use super::error::ModelError;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem touch-points required by the photo library
pub trait Resources {
    /// Whether the resource exists and is readable
    fn exists(&self, path: &Path) -> bool;

    /// Resolve a path to its canonical, absolute form
    ///
    /// Implementations fall back to the given path when resolution fails.
    fn canonicalize(&self, path: &Path) -> PathBuf;

    /// Last-modified time of the resource
    ///
    /// # Errors
    /// Returns `ModelError` if the resource is missing or its metadata is unreadable.
    fn last_modified(&self, path: &Path) -> Result<DateTime<Local>, ModelError>;

    /// Default caption for a resource: the file name without its final extension
    fn caption_from_filename(&self, path: &Path) -> String {
        path.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// [`Resources`] backed by the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsResources;

impl Resources for FsResources {
    fn exists(&self, path: &Path) -> bool {
        fs::File::open(path).is_ok() && path.is_file()
    }

    fn canonicalize(&self, path: &Path) -> PathBuf {
        fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
    }

    fn last_modified(&self, path: &Path) -> Result<DateTime<Local>, ModelError> {
        let metadata = fs::metadata(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ModelError::ResourceNotFound(path.display().to_string())
            } else {
                ModelError::Metadata {
                    path: path.display().to_string(),
                    source,
                }
            }
        })?;
        let modified = metadata.modified().map_err(|source| ModelError::Metadata {
            path: path.display().to_string(),
            source,
        })?;
        Ok(DateTime::<Local>::from(modified))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_caption_strips_final_extension() {
        let resources = FsResources;
        assert_eq!(resources.caption_from_filename(Path::new("/tmp/beach.jpg")), "beach");
        assert_eq!(resources.caption_from_filename(Path::new("archive.tar.gz")), "archive.tar");
        assert_eq!(resources.caption_from_filename(Path::new("noext")), "noext");
    }

    #[test]
    fn test_fs_resources_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.png");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(b"not really a png").unwrap();

        let resources = FsResources;
        assert!(resources.exists(&path));
        assert!(resources.last_modified(&path).is_ok());
        assert!(resources.canonicalize(&path).is_absolute());
    }

    #[test]
    fn test_fs_resources_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.png");

        let resources = FsResources;
        assert!(!resources.exists(&path));
        assert!(matches!(
            resources.last_modified(&path),
            Err(ModelError::ResourceNotFound(_))
        ));
        assert_eq!(resources.canonicalize(&path), path);
    }

    #[test]
    fn test_directory_is_not_a_photo_resource() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!FsResources.exists(dir.path()));
    }
}
