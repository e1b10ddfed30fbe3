//! # ScribeDB
//!
//! An embedded document store that keeps each record in its own JSON file:
//! - Named collections, one directory each
//! - Atomic writes (temp file + rename), so readers never see a torn record
//! - Per-collection reader/writer locks; collections never contend
//! - No server, no cache: every operation goes straight to the filesystem
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          Engine                              │
//! │            write / read / read_all / delete                  │
//! └──────┬──────────────────────┬────────────────────┬──────────┘
//!        │                      │                    │
//!        ▼                      ▼                    ▼
//! ┌─────────────┐        ┌─────────────┐      ┌─────────────┐
//! │LockRegistry │        │PathResolver │      │    Codec    │
//! │ (RwLock per │        │ (names →    │      │   (JSON)    │
//! │ collection) │        │  paths)     │      │             │
//! └─────────────┘        └──────┬──────┘      └─────────────┘
//!                               │
//!                               ▼
//!                     {root}/{collection}/{resource}.json
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use scribedb::Engine;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Dinner {
//!     name: String,
//!     rating: u8,
//! }
//!
//! let db = Engine::open_path("./db".as_ref())?;
//! db.write("Dinner", "Taco", &Dinner { name: "Taco".into(), rating: 9 })?;
//! let taco: Dinner = db.read("Dinner", "Taco")?;
//! db.delete("Dinner", "Taco")?;
//! # Ok::<(), scribedb::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;
pub mod logger;

pub mod codec;
pub mod storage;
pub mod engine;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{StoreError, Result};
pub use config::Config;
pub use engine::Engine;
pub use logger::{LogLevel, Logger, TracingLogger};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of ScribeDB
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
