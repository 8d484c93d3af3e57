//! File-backed persistence for the visit counter.
//!
//! The counter is a single non-negative integer stored as decimal text in one
//! file. `FileCounterStore` is the only component that touches that file:
//! handlers go through `load` and `increment`, so the storage strategy could
//! later grow a lock without changing callers.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File-backed counter store.
///
/// The read-modify-write in [`increment`](Self::increment) is not atomic and
/// not guarded by any lock: two concurrent requests can both read N and both
/// write N+1, losing one visit. The last write wins. Callers that need an
/// exact count would have to add locking behind this API.
#[derive(Debug)]
pub struct FileCounterStore {
    path: PathBuf,
}

impl FileCounterStore {
    /// Open a store at `path`, creating the parent directory if it is absent.
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }

    /// Path of the counter file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current count. A missing or unparsable file reads as zero; first run
    /// and corrupted state are deliberately indistinguishable.
    pub fn load(&self) -> u64 {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) => {
                if err.kind() != io::ErrorKind::NotFound {
                    tracing::debug!(
                        error = %err,
                        path = %self.path.display(),
                        "Counter file unreadable, treating count as zero"
                    );
                }
                return 0;
            }
        };

        contents.trim().parse().unwrap_or_else(|_| {
            tracing::debug!(
                path = %self.path.display(),
                "Counter file unparsable, treating count as zero"
            );
            0
        })
    }

    /// Increment the count and persist the new value.
    ///
    /// Persistence is best effort: the incremented value is returned even
    /// when the write fails, and the failure is only logged.
    pub fn increment(&self) -> u64 {
        let next = self.load() + 1;
        if let Err(err) = fs::write(&self.path, next.to_string()) {
            tracing::warn!(
                error = %err,
                path = %self.path.display(),
                "Failed to persist counter"
            );
        }
        next
    }
}
