//! Path resolution
//!
//! Maps (collection, resource) pairs onto the store's directory tree and
//! answers existence questions about it.

use std::ffi::OsString;
use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};

use crate::codec::{EXTENSION, TEMP_EXTENSION};
use crate::error::{Result, StoreError};

/// Resolves names to paths below a single store root
#[derive(Debug, Clone)]
pub struct PathResolver {
    root: PathBuf,
}

/// A path that was found on disk, with its metadata
#[derive(Debug, Clone)]
pub struct Located {
    pub path: PathBuf,
    pub metadata: Metadata,
}

impl Located {
    pub fn is_dir(&self) -> bool {
        self.metadata.is_dir()
    }

    pub fn is_file(&self) -> bool {
        self.metadata.is_file()
    }
}

impl PathResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    // =========================================================================
    // Name Validation
    // =========================================================================

    /// Reject empty collection names and names that would leave the root
    pub fn validate_collection(collection: &str) -> Result<()> {
        if collection.is_empty() {
            return Err(StoreError::Validation(
                "missing collection - no place to save the record".to_string(),
            ));
        }
        Self::validate_component("collection", collection)
    }

    /// Reject empty resource names and names that would leave the collection
    pub fn validate_resource(resource: &str) -> Result<()> {
        if resource.is_empty() {
            return Err(StoreError::Validation(
                "missing resource - unable to save the record (no name)".to_string(),
            ));
        }
        Self::validate_component("resource", resource)
    }

    fn validate_component(kind: &str, name: &str) -> Result<()> {
        let escapes = name == "."
            || name == ".."
            || name.contains(&['/', '\\', '\0'][..]);

        if escapes {
            return Err(StoreError::Validation(format!(
                "invalid {} name '{}' - must be a single path component",
                kind, name
            )));
        }
        Ok(())
    }

    // =========================================================================
    // Path Construction
    // =========================================================================

    /// `{root}/{collection}`
    pub fn collection_dir(&self, collection: &str) -> PathBuf {
        self.root.join(collection)
    }

    /// `{root}/{collection}/{resource}`, without the record extension
    pub fn entry_path(&self, collection: &str, resource: &str) -> PathBuf {
        self.collection_dir(collection).join(resource)
    }

    /// `{root}/{collection}/{resource}.json`
    pub fn resource_path(&self, collection: &str, resource: &str) -> PathBuf {
        Self::with_suffix(&self.entry_path(collection, resource), EXTENSION)
    }

    /// `{root}/{collection}/{resource}.json.tmp`, in the same directory as
    /// the record so the final rename never crosses filesystems
    pub fn temp_path(&self, collection: &str, resource: &str) -> PathBuf {
        Self::with_suffix(&self.resource_path(collection, resource), TEMP_EXTENSION)
    }

    /// Append `.{ext}` to the full file name.
    ///
    /// Unlike `Path::with_extension` this keeps any dots already in the
    /// name: `v1.2` becomes `v1.2.json`, not `v1.json`.
    pub fn with_suffix(path: &Path, ext: &str) -> PathBuf {
        let mut name: OsString = path.as_os_str().to_os_string();
        name.push(".");
        name.push(ext);
        PathBuf::from(name)
    }

    /// Whether `path` is a leftover `*.tmp` file from an interrupted write
    pub fn is_temp_file(path: &Path) -> bool {
        path.extension().map_or(false, |ext| ext == TEMP_EXTENSION)
    }

    // =========================================================================
    // Existence Checks
    // =========================================================================

    /// Find `path` on disk, falling back to `path.json`.
    ///
    /// Callers may pass either the bare resource path or the record file
    /// path. Errors other than "not found" are returned as-is. This only
    /// answers "is something there": the record itself always lives at
    /// [`resource_path`](Self::resource_path).
    pub fn locate(path: &Path) -> io::Result<Option<Located>> {
        if let Some(metadata) = Self::metadata(path)? {
            return Ok(Some(Located {
                path: path.to_path_buf(),
                metadata,
            }));
        }

        let suffixed = Self::with_suffix(path, EXTENSION);
        Ok(Self::metadata(&suffixed)?.map(|metadata| Located {
            path: suffixed,
            metadata,
        }))
    }

    /// `true` if `path` or `path.json` exists.
    ///
    /// Only "not found" reads as absent; any other failure (permissions,
    /// a parent that is a file) is returned.
    pub fn exists(path: &Path) -> io::Result<bool> {
        Ok(Self::locate(path)?.is_some())
    }

    /// `true` if exactly `path` is a directory (no fallback)
    pub fn is_dir(path: &Path) -> io::Result<bool> {
        Ok(Self::metadata(path)?.map_or(false, |m| m.is_dir()))
    }

    /// `true` if exactly `path` is a regular file (no fallback)
    pub fn is_file(path: &Path) -> io::Result<bool> {
        Ok(Self::metadata(path)?.map_or(false, |m| m.is_file()))
    }

    fn metadata(path: &Path) -> io::Result<Option<Metadata>> {
        match fs::metadata(path) {
            Ok(metadata) => Ok(Some(metadata)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}
