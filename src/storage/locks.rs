//! Collection lock registry
//!
//! One reader/writer lock per collection name, created on first use and kept
//! for the lifetime of the registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

/// Lock guarding a single collection
///
/// Mutations (write/delete) take the exclusive side, reads take the shared
/// side. The lock protects no data of its own: the collection directory is
/// the protected resource.
pub type CollectionLock = Arc<RwLock<()>>;

/// Maps collection names to their locks
///
/// ## Concurrency:
/// - `locks`: Protected by a registry-wide Mutex, held only for the
///   lookup/insert, never for the caller's critical section
/// - Lookup and insertion happen under the same guard, so two first-time
///   callers for one name always receive the same lock
/// - Entries are never removed; engine reads only ask for a lock once the
///   collection directory exists, so looking up unknown names adds nothing
#[derive(Debug, Default)]
pub struct LockRegistry {
    locks: Mutex<HashMap<String, CollectionLock>>,
}

impl LockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the lock for `collection`, creating it if needed
    ///
    /// The returned handle is not held yet; callers lock it around their
    /// critical section.
    pub fn acquire(&self, collection: &str) -> CollectionLock {
        let mut locks = self.locks.lock();

        if let Some(lock) = locks.get(collection) {
            return Arc::clone(lock);
        }

        let lock = CollectionLock::default();
        locks.insert(collection.to_string(), Arc::clone(&lock));
        lock
    }

    /// Whether a lock has been created for `collection`
    pub fn contains(&self, collection: &str) -> bool {
        self.locks.lock().contains_key(collection)
    }

    /// Number of collections with a lock
    pub fn len(&self) -> usize {
        self.locks.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.lock().is_empty()
    }
}
