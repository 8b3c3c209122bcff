//! # Storage Layer
//!
//! The handlers never touch the filesystem directly. They see the backing
//! resource through the [`Storage`] trait, which exposes exactly two things:
//! read the whole current contents, and replace the whole contents.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: an open file handle, created on demand with fixed
//!   permissions. This is what the CLI uses.
//! - [`memory::InMemoryStore`]: a byte buffer, for handler tests.
//!
//! ## Consistency
//!
//! There is no locking. Two processes working on the same file both read the
//! same state and the last one to write wins.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Whole-buffer access to a backing resource.
pub trait Storage {
    /// Read the entire current contents. Empty for a new resource.
    fn read_all(&mut self) -> Result<Vec<u8>>;

    /// Replace the entire contents with `bytes`.
    fn overwrite(&mut self, bytes: &[u8]) -> Result<()>;
}
