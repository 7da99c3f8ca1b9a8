pub mod json_backend;

use std::path::Path;

use crate::{errors::Result, ledger::Ledger};

/// Abstraction over the place a ledger document lives between runs.
pub trait StorageBackend: Send + Sync {
    /// Reads the persisted document, or an empty one when nothing has been saved yet.
    fn load(&self) -> Result<Ledger>;

    /// Replaces the persisted document with `ledger`.
    fn save(&self, ledger: &Ledger) -> Result<()>;

    fn location(&self) -> &Path;
}

pub use json_backend::JsonStorage;
