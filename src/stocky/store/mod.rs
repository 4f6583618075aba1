//! # Storage Layer
//!
//! Persistence is an opaque key-value blob store: the inventory is
//! serialized to a single JSON array and written under one fixed key,
//! whole-blob at a time. The [`BlobStore`] trait keeps the rest of the
//! crate decoupled from where those bytes actually live.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage. Each key maps to one file,
//!   `<key>.json`, inside the data directory. Writes go through a temp
//!   file and a rename so a blob is never left half-written.
//! - [`memory::InMemoryStore`]: in-memory storage for tests. No
//!   persistence, no filesystem.
//!
//! ## Storage Format
//!
//! ```text
//! ~/.local/share/stocky/
//! ├── inventory_items.json    # The full item collection (JSON array)
//! └── config.json             # Configuration
//! ```

use crate::error::Result;

pub mod fs;
pub mod memory;

/// The single key the inventory collection is stored under.
pub const STORAGE_KEY: &str = "inventory_items";

/// Abstract interface to the on-device blob store.
///
/// Implementations hold opaque text blobs by key. There is no partial
/// update: `set` replaces the whole blob.
pub trait BlobStore {
    /// Read the blob stored under `key`, or `None` if it was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the blob stored under `key` in a single write.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
