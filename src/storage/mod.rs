//! Storage Module
//!
//! Filesystem layer underneath the engine.
//!
//! ## Responsibilities
//! - Map (collection, resource) pairs to paths under the store root
//! - Hand out one lock per collection
//! - Create directories and commit files atomically
//!
//! ## Directory Layout
//! ```text
//! {root}/
//!   ├── Dinner/
//!   │     ├── Pizza.json
//!   │     ├── Taco.json
//!   │     └── Taco.json.tmp   (only while a write is in flight)
//!   └── Dessert/
//!         └── Flan.json
//! ```

mod atomic;
mod locks;
mod paths;

pub use atomic::{atomic_write, create_dir_all, remove_temp};
pub use locks::{CollectionLock, LockRegistry};
pub use paths::{Located, PathResolver};
