//! Core domain types for the game
//!
//! This module contains the fundamental domain types with no I/O: the target
//! word and the scoring rules. Everything here is pure and deterministic.

mod score;
mod word;

pub use score::{Score, Verdict};
pub use word::{Word, WordError};
