//! Engine Module
//!
//! The storage engine that coordinates path resolution, locking and the
//! record codec.
//!
//! ## Responsibilities
//! - Validate collection/resource names before any I/O
//! - Serialize mutations per collection
//! - Commit records atomically (temp file + rename)
//! - Read single records and whole collections

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::codec::{decode_record, encode_record};
use crate::config::Config;
use crate::error::{Result, StoreError};
use crate::logger::Logger;
use crate::storage::{self, CollectionLock, LockRegistry, PathResolver};

/// The main storage engine
///
/// ## Concurrency Model: per-collection reader/writer locks
///
/// - **Mutations** (write/delete): exclusive lock on the target collection
///   - At most one mutation per collection at a time
///   - Collections never contend with each other
///
/// - **Reads** (read/read_all): shared lock on the target collection
///   - Any number of concurrent readers
///   - A read never overlaps a write or delete on the same collection
///
/// Nothing is cached: every call goes to the filesystem. The engine is
/// `Send + Sync`; share it between threads with an `Arc`.
pub struct Engine {
    /// Engine configuration
    config: Config,

    /// Name → path mapping below `config.data_dir`
    paths: PathResolver,

    /// One lock per collection, created on first use
    locks: LockRegistry,

    /// Diagnostic sink (never used for error recovery)
    log: Arc<dyn Logger>,
}

impl Engine {
    /// Open or create a store with the given config
    ///
    /// An existing root directory is reused as-is; a missing one is created
    /// together with any missing parents.
    pub fn open(config: Config) -> Result<Self> {
        let log = Arc::clone(&config.logger);
        let root = config.data_dir.clone();

        if root.is_dir() {
            log.debug(format_args!(
                "Using '{}' (database already exists)",
                root.display()
            ));
        } else {
            log.debug(format_args!("Creating the database at '{}'...", root.display()));
            if let Err(e) = storage::create_dir_all(&root) {
                log.error(format_args!(
                    "Unable to create the database at '{}': {}",
                    root.display(),
                    e
                ));
                return Err(e.into());
            }
        }

        Ok(Self {
            paths: PathResolver::new(root),
            locks: LockRegistry::new(),
            log,
            config,
        })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified data directory
    pub fn open_path(path: &Path) -> Result<Self> {
        Self::open(Config::builder().data_dir(path).build())
    }

    /// Write a record
    ///
    /// Steps:
    /// 1. Validate names (no side effects on failure)
    /// 2. Acquire the collection's exclusive lock
    /// 3. Create the collection directory if needed
    /// 4. Encode the record
    /// 5. Write `{resource}.json.tmp`, then rename it over `{resource}.json`
    ///
    /// A failure before the rename leaves any previous record untouched.
    pub fn write<T>(&self, collection: &str, resource: &str, record: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        PathResolver::validate_collection(collection)?;
        PathResolver::validate_resource(resource)?;

        let lock = self.locks.acquire(collection);
        let _write_guard = lock.write();

        storage::create_dir_all(&self.paths.collection_dir(collection))?;

        let mut bytes = encode_record(record)?;
        bytes.push(b'\n');

        let final_path = self.paths.resource_path(collection, resource);
        let temp_path = self.paths.temp_path(collection, resource);

        if let Err(e) = storage::atomic_write(&temp_path, &final_path, &bytes, self.config.sync_writes)
        {
            if let Err(cleanup) = storage::remove_temp(&temp_path) {
                self.log.warn(format_args!(
                    "Unable to remove temp file '{}': {}",
                    temp_path.display(),
                    cleanup
                ));
            }
            return Err(e.into());
        }

        self.log.trace(format_args!(
            "Wrote '{}/{}' ({} bytes)",
            collection,
            resource,
            bytes.len()
        ));
        Ok(())
    }

    /// Read and decode a single record
    ///
    /// Existence is checked with the bare-name fallback, but the record is
    /// always read from `{resource}.json`; a stray file named after the
    /// resource never stands in for it.
    ///
    /// Returns `StoreError::NotFound` if the record does not exist.
    pub fn read<T: DeserializeOwned>(&self, collection: &str, resource: &str) -> Result<T> {
        PathResolver::validate_collection(collection)?;
        PathResolver::validate_resource(resource)?;

        let lock = self
            .read_lock(collection)?
            .ok_or_else(|| StoreError::not_found(collection, resource))?;
        let _read_guard = lock.read();

        if !PathResolver::exists(&self.paths.entry_path(collection, resource))? {
            return Err(StoreError::not_found(collection, resource));
        }

        let path = self.paths.resource_path(collection, resource);
        let bytes = fs::read(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StoreError::not_found(collection, resource),
            _ => StoreError::Io(e),
        })?;

        self.log.trace(format_args!("Read '{}/{}'", collection, resource));
        decode_record(&bytes)
    }

    /// Read every record in a collection as raw JSON text
    ///
    /// Entries are returned in file-name order. Only regular files are
    /// read; leftover `*.tmp` files from an interrupted write are skipped.
    /// A single unreadable file fails the whole call.
    pub fn read_all(&self, collection: &str) -> Result<Vec<String>> {
        PathResolver::validate_collection(collection)?;

        let missing = || StoreError::CollectionNotFound(collection.to_string());
        let lock = self.read_lock(collection)?.ok_or_else(missing)?;
        let _read_guard = lock.read();

        // Re-checked under the lock: a delete may have won the race
        let dir = self.paths.collection_dir(collection);
        if !PathResolver::is_dir(&dir)? {
            return Err(missing());
        }

        let mut files: Vec<PathBuf> = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();

            if !path.is_file() {
                continue;
            }
            if PathResolver::is_temp_file(&path) {
                self.log.warn(format_args!(
                    "Skipping leftover temp file '{}'",
                    path.display()
                ));
                continue;
            }
            files.push(path);
        }
        files.sort();

        let mut records = Vec::with_capacity(files.len());
        for path in &files {
            records.push(fs::read_to_string(path)?);
        }

        self.log.trace(format_args!(
            "Read {} records from '{}'",
            records.len(),
            collection
        ));
        Ok(records)
    }

    /// Read every record in a collection and decode it as `T`
    ///
    /// Fails on the first entry that does not decode; use [`read_all`] for
    /// collections holding records of different shapes.
    ///
    /// [`read_all`]: Engine::read_all
    pub fn read_all_as<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>> {
        self.read_all(collection)?
            .iter()
            .map(|raw| decode_record(raw.as_bytes()))
            .collect()
    }

    /// Delete a record, or a whole collection when `resource` is empty
    ///
    /// - directory at `{collection}/{resource}` → removed recursively
    /// - otherwise `{resource}.json` → removed
    /// - neither → `StoreError::NotFound`
    ///
    /// Only the resource's own record file is ever removed, so `a` and
    /// `a.json` are independent resources.
    pub fn delete(&self, collection: &str, resource: &str) -> Result<()> {
        PathResolver::validate_collection(collection)?;
        if !resource.is_empty() {
            PathResolver::validate_resource(resource)?;
        }

        let lock = self.locks.acquire(collection);
        let _write_guard = lock.write();

        if resource.is_empty() {
            return self.delete_collection(collection);
        }

        let entry = self.paths.entry_path(collection, resource);
        if PathResolver::is_dir(&entry)? {
            fs::remove_dir_all(&entry)?;
        } else {
            let record = self.paths.resource_path(collection, resource);
            fs::remove_file(&record).map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => StoreError::not_found(collection, resource),
                _ => StoreError::Io(e),
            })?;
        }

        self.log.debug(format_args!("Deleted '{}/{}'", collection, resource));
        Ok(())
    }

    /// Whether the record file `{resource}.json` exists
    pub fn exists(&self, collection: &str, resource: &str) -> Result<bool> {
        PathResolver::validate_collection(collection)?;
        PathResolver::validate_resource(resource)?;

        let Some(lock) = self.read_lock(collection)? else {
            return Ok(false);
        };
        let _read_guard = lock.read();

        Ok(PathResolver::is_file(&self.paths.resource_path(collection, resource))?)
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        self.paths.root()
    }

    /// Get the path resolver
    pub fn paths(&self) -> &PathResolver {
        &self.paths
    }

    /// Get the collection lock registry
    pub fn locks(&self) -> &LockRegistry {
        &self.locks
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Lock for a read of `collection`, or `None` if the collection does
    /// not exist. Reads of unknown names never add registry entries.
    fn read_lock(&self, collection: &str) -> Result<Option<CollectionLock>> {
        if !PathResolver::is_dir(&self.paths.collection_dir(collection))? {
            return Ok(None);
        }
        Ok(Some(self.locks.acquire(collection)))
    }

    fn delete_collection(&self, collection: &str) -> Result<()> {
        let dir = self.paths.collection_dir(collection);
        if !dir.is_dir() {
            return Err(StoreError::CollectionNotFound(collection.to_string()));
        }

        fs::remove_dir_all(&dir)?;
        self.log.debug(format_args!("Deleted collection '{}'", collection));
        Ok(())
    }
}
