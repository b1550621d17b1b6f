//! Remote word fetching
//!
//! Asks public random-word APIs for a candidate target word. Providers are
//! tried in order with a bounded number of attempts each; every individual
//! failure is absorbed and the next attempt tried, so the only outcomes are
//! a validated word or `None`. The caller owns the fallback policy.

use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use crate::core::Word;

/// Default providers, tried in order
pub const DEFAULT_ENDPOINTS: [&str; 2] = [
    "https://random-word-api.herokuapp.com/word?number=1&length=5",
    "https://random-word-api.vercel.app/api?words=1&length=5",
];

const DEFAULT_ATTEMPTS: u32 = 3;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Why a single fetch attempt was discarded
///
/// Never leaves this module; attempts are absorbed, not surfaced.
#[derive(Debug, Error)]
enum AttemptError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("provider returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("provider response held no usable word")]
    Shape,
}

/// Fetches candidate target words from remote providers
#[derive(Debug, Clone)]
pub struct WordSource {
    client: reqwest::Client,
    endpoints: Vec<String>,
    attempts: u32,
    timeout: Duration,
}

impl WordSource {
    /// Create a source over the default providers
    #[must_use]
    pub fn new() -> Self {
        Self::with_endpoints(DEFAULT_ENDPOINTS.map(String::from).to_vec())
    }

    /// Create a source over a custom provider list
    ///
    /// An empty list makes every fetch return `None` immediately, which is
    /// how tests force the fallback path.
    #[must_use]
    pub fn with_endpoints(endpoints: Vec<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .connect_timeout(DEFAULT_TIMEOUT)
                .build()
                .expect("failed to build HTTP client"),
            endpoints,
            attempts: DEFAULT_ATTEMPTS,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the number of attempts per endpoint
    #[must_use]
    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts;
        self
    }

    /// Set the per-attempt timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Try to fetch a word, first success wins
    ///
    /// Returns `None` once every endpoint has exhausted its attempts.
    pub async fn fetch(&self) -> Option<Word> {
        for url in &self.endpoints {
            for attempt in 1..=self.attempts {
                match self.attempt(url).await {
                    Ok(word) => return Some(word),
                    Err(e) => debug!(%url, attempt, "word fetch attempt discarded: {e}"),
                }
            }
        }
        None
    }

    async fn attempt(&self, url: &str) -> Result<Word, AttemptError> {
        let response = self.client.get(url).timeout(self.timeout).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AttemptError::Status(status));
        }

        let words: Vec<String> = response.json().await?;
        first_valid(&words).ok_or(AttemptError::Shape)
    }
}

impl Default for WordSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate a provider response body
///
/// Only the first element is consulted; it must reduce to five alphabetic
/// characters after lower-casing.
fn first_valid(words: &[String]) -> Option<Word> {
    Word::new(words.first()?.as_str()).ok()
}
