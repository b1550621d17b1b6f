//! Target word persistence
//!
//! Keeps the current target word alive across restarts as a single JSON
//! record. Persistence is strictly best-effort: a missing, unreadable, or
//! corrupt record reads as absent, and a failed write is logged and
//! forgotten. The in-memory game never depends on the store being healthy.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::Word;

/// On-disk shape: one record, one field, last write wins
#[derive(Debug, Serialize, Deserialize)]
struct PersistedState {
    target: String,
}

/// Stores the single current target word on disk
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// Create a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted target word
    ///
    /// Returns `None` when the record is missing, unreadable, malformed, or
    /// fails word validation. All of those cases are indistinguishable to the
    /// caller, which simply selects a fresh word.
    #[must_use]
    pub fn load(&self) -> Option<Word> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let state: PersistedState = serde_json::from_str(&raw).ok()?;
        Word::new(state.target).ok()
    }

    /// Write `word` as the sole persisted record, overwriting any prior one
    ///
    /// Failures are swallowed; the caller proceeds with its in-memory word
    /// either way.
    pub fn save(&self, word: &Word) {
        let state = PersistedState {
            target: word.text().to_string(),
        };

        let result = serde_json::to_string(&state)
            .map_err(io::Error::other)
            .and_then(|json| fs::write(&self.path, json));

        if let Err(e) = result {
            warn!(path = %self.path.display(), "failed to persist target word: {e}");
        }
    }
}
