//! Game lifecycle
//!
//! One process holds one active game: a single target word, established at
//! startup and replaced wholesale when a new game starts. Guesses read the
//! word, new games swap it; both go through an async `RwLock` so a guess is
//! always scored against one consistent word.

use serde::Serialize;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::info;

use crate::core::{Score, Word};
use crate::source::WordSource;
use crate::store::StateStore;
use crate::wordlists;

/// Where a target word came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// A remote provider supplied it
    Api,
    /// The built-in list supplied it
    Fallback,
}

/// Error for guesses that cannot be scored
///
/// The only failure this service ever surfaces to a caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("invalid word length: expected {expected}, got {actual}")]
    Length { expected: usize, actual: usize },
}

/// Outcome of starting a new game
#[derive(Debug, Clone)]
pub struct NewGame {
    pub word: Word,
    pub origin: Origin,
}

/// Holds the current target word and orchestrates the game around it
pub struct Session {
    source: WordSource,
    store: StateStore,
    target: RwLock<Word>,
}

impl Session {
    /// Establish the session's first target word
    ///
    /// Priority: persisted state, then a remote fetch, then the fallback
    /// list. A freshly selected word is persisted before play starts.
    pub async fn initialize(source: WordSource, store: StateStore) -> Self {
        let target = match store.load() {
            Some(word) => {
                info!(%word, "restored persisted target word");
                word
            }
            None => {
                let (word, origin) = pick(&source).await;
                store.save(&word);
                info!(%word, ?origin, "selected initial target word");
                word
            }
        };

        Self {
            source,
            store,
            target: RwLock::new(target),
        }
    }

    /// Score a guess against the held target word
    ///
    /// The guess is lower-cased first; its length must match the target's.
    /// Returns the verdicts together with the target length.
    ///
    /// # Errors
    /// Returns `GuessError::Length` on a length mismatch. Nothing else about
    /// the guess is validated.
    pub async fn guess(&self, raw: &str) -> Result<(Score, usize), GuessError> {
        let guess = raw.to_lowercase();
        let target = self.target.read().await;

        if guess.len() != target.length() {
            return Err(GuessError::Length {
                expected: target.length(),
                actual: guess.len(),
            });
        }

        Ok((Score::of(&guess, &target), target.length()))
    }

    /// Length of the held target word
    pub async fn target_length(&self) -> usize {
        self.target.read().await.length()
    }

    /// The held target word, verbatim
    ///
    /// Demo affordance: not gated by any game-over check.
    pub async fn reveal(&self) -> Word {
        self.target.read().await.clone()
    }

    /// Select a fresh target word and replace the held one
    ///
    /// The fetch runs before the write lock is taken, so a slow provider
    /// never blocks guess scoring; concurrent guesses see either the old or
    /// the new word, never a torn value.
    pub async fn new_game(&self) -> NewGame {
        let (word, origin) = pick(&self.source).await;
        self.store.save(&word);
        *self.target.write().await = word.clone();
        info!(%word, ?origin, "new target selected");

        NewGame { word, origin }
    }
}

/// Fetch a word, falling back to the built-in list when providers fail
async fn pick(source: &WordSource) -> (Word, Origin) {
    match source.fetch().await {
        Some(word) => (word, Origin::Api),
        None => (wordlists::random_fallback(), Origin::Fallback),
    }
}
