//! Fallback word list
//!
//! A small list compiled into the binary, used whenever no remote word
//! provider is reachable. The game stays fully playable offline.

use rand::prelude::IndexedRandom;

use crate::core::Word;

/// Words served when every remote provider is unavailable
pub const FALLBACK: [&str; 20] = [
    "apple", "grape", "peach", "melon", "berry", "mango", "lemon", "guava", "prune", "olive",
    "pearl", "cider", "paper", "cabin", "train", "sound", "river", "cloud", "stone", "pilot",
];

/// Pick a fallback word uniformly at random
///
/// # Panics
/// Will not panic - the list is non-empty and every entry is a valid word
/// (pinned by tests below).
#[must_use]
pub fn random_fallback() -> Word {
    let text = FALLBACK
        .choose(&mut rand::rng())
        .expect("fallback list is non-empty");
    Word::new(*text).expect("fallback list entries are valid words")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_words_are_valid() {
        // Every fallback word must satisfy the target word invariant
        for &word in &FALLBACK {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
            assert!(Word::new(word).is_ok());
        }
    }

    #[test]
    fn fallback_words_are_unique() {
        let unique: std::collections::HashSet<_> = FALLBACK.iter().collect();
        assert_eq!(unique.len(), FALLBACK.len());
    }

    #[test]
    fn expected_count() {
        assert_eq!(FALLBACK.len(), 20, "Expected 20 fallback words");
    }

    #[test]
    fn random_fallback_selects_from_list() {
        for _ in 0..50 {
            let word = random_fallback();
            assert!(FALLBACK.contains(&word.text()));
        }
    }
}
