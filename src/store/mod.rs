//! # Key-value stores
//!
//! The persistence gateway in [`crate::models::storage`] never touches the
//! filesystem itself. It is handed a [`KeyValueStore`] and reads and writes
//! whole string values under fixed keys.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one JSON file per key inside the data directory.
//! - [`memory::MemoryStore`]: a map in memory, for tests.
//!
//! ## Storage Layout
//!
//! ```text
//! <data_dir>/
//! ├── snipvault.snippets.json   # snipvault:snippets
//! └── snipvault.filters.json    # snipvault:filters
//! ```

use crate::error::Result;

pub mod fs;
pub mod memory;

pub use fs::FileStore;
pub use memory::MemoryStore;

/// String-to-string durable storage.
///
/// Writes replace the previous value wholesale.
pub trait KeyValueStore {
    /// Returns `Ok(None)` when nothing is stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
