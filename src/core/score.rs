//! Guess scoring
//!
//! Implements Wordle's feedback rules: each guess position gets a verdict
//! (`correct`, `present`, or `absent`), with duplicate letters limited by
//! how many remain in the target after exact matches are removed.

use serde::Serialize;

use super::Word;

/// Per-letter outcome of comparing a guess to the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Right letter in the right position
    Correct,
    /// Letter occurs elsewhere in the target
    Present,
    /// Letter does not occur (or all its occurrences are used up)
    Absent,
}

/// Ordered per-position verdicts for one guess
///
/// Serializes as a plain JSON array of verdict strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Score([Verdict; Word::LENGTH]);

impl Score {
    /// Score `guess` against `target`
    ///
    /// The caller must have already verified that the guess has the target's
    /// length; the guess itself is not validated further (it need not be a
    /// dictionary word, or alphabetic at all - non-letters simply never match).
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches `correct` and remove them
    ///    from the target's letter pool
    /// 2. Second pass: mark remaining positions `present` while the pool still
    ///    holds that letter, `absent` otherwise
    ///
    /// Both passes run left to right, so when a letter is scarcer in the
    /// target than in the guess, its leftmost guess occurrences win.
    ///
    /// # Examples
    /// ```
    /// use wordle_server::core::{Score, Verdict, Word};
    ///
    /// let target = Word::new("spill").unwrap();
    /// let score = Score::of("silly", &target);
    ///
    /// assert_eq!(
    ///     score.verdicts(),
    ///     &[
    ///         Verdict::Correct, // s
    ///         Verdict::Present, // i
    ///         Verdict::Present, // l
    ///         Verdict::Correct, // l
    ///         Verdict::Absent,  // y - both target l's already consumed
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn of(guess: &str, target: &Word) -> Self {
        let guess = guess.as_bytes();
        debug_assert_eq!(
            guess.len(),
            target.length(),
            "caller must reject length mismatches before scoring"
        );

        let mut result = [Verdict::Absent; Word::LENGTH];
        let mut remaining = target.char_counts();

        // First pass: exact matches
        // Allow: Index needed to access guess[i], target[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..Word::LENGTH {
            if guess[i] == target.chars()[i] {
                result[i] = Verdict::Correct;

                // Remove from the pool
                if let Some(count) = remaining.get_mut(&guess[i]) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: present letters, limited by the remaining pool
        // Allow: Index needed to access guess[i] and check/set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..Word::LENGTH {
            if result[i] == Verdict::Absent {
                if let Some(count) = remaining.get_mut(&guess[i])
                    && *count > 0
                {
                    result[i] = Verdict::Present;
                    *count -= 1;
                }
            }
        }

        Self(result)
    }

    /// The per-position verdicts, left to right
    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[Verdict; Word::LENGTH] {
        &self.0
    }

    /// Whether every position is `correct`
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&v| v == Verdict::Correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Verdict::{Absent, Correct, Present};

    fn score(guess: &str, target: &str) -> Score {
        Score::of(guess, &Word::new(target).unwrap())
    }

    #[test]
    fn score_all_correct_when_guess_equals_target() {
        let s = score("crane", "crane");
        assert_eq!(s.verdicts(), &[Correct; 5]);
        assert!(s.is_win());
    }

    #[test]
    fn score_all_absent_when_no_shared_letters() {
        let s = score("abcde", "fghij");
        assert_eq!(s.verdicts(), &[Absent; 5]);
        assert!(!s.is_win());
    }

    #[test]
    fn score_classic_example() {
        // CRANE vs SLATE: A and E land, R is nowhere in SLATE
        let s = score("crane", "slate");
        assert_eq!(s.verdicts(), &[Absent, Absent, Correct, Absent, Correct]);
    }

    #[test]
    fn score_anagram_has_no_false_corrects() {
        // TRACE vs CRANE: same letters, two displaced
        let s = score("trace", "crane");
        assert_eq!(s.verdicts(), &[Absent, Correct, Correct, Present, Correct]);
    }

    #[test]
    fn score_duplicate_letters_leftmost_preference() {
        // SILLY vs SPILL: target has two L's; after the positional L at
        // index 3 one remains, so the L at index 2 takes it and Y gets nothing
        let s = score("silly", "spill");
        assert_eq!(s.verdicts(), &[Correct, Present, Present, Correct, Absent]);
    }

    #[test]
    fn score_duplicate_letters_green_takes_priority() {
        // SPEED vs ERASE: both E's of the guess fit ERASE's two E's
        let s = score("speed", "erase");
        assert_eq!(s.verdicts(), &[Present, Absent, Present, Present, Absent]);
    }

    #[test]
    fn score_duplicate_letters_complex() {
        // ROBOT vs FLOOR: first O is displaced, second O is exact
        let s = score("robot", "floor");
        assert_eq!(s.verdicts(), &[Present, Present, Absent, Correct, Absent]);
    }

    #[test]
    fn score_excess_duplicates_marked_absent() {
        // LLAMA vs SPILL: guess has two L's, target has two, no positional hits
        let s = score("llama", "spill");
        assert_eq!(s.verdicts(), &[Present, Present, Absent, Absent, Absent]);
    }

    #[test]
    fn score_non_correct_verdicts_never_exceed_target_counts() {
        let cases = [
            ("silly", "spill"),
            ("llama", "spill"),
            ("speed", "erase"),
            ("aaaaa", "abaca"),
            ("eerie", "crane"),
        ];

        for (guess, target) in cases {
            let target = Word::new(target).unwrap();
            let s = Score::of(guess, &target);

            for letter in b'a'..=b'z' {
                let scored = guess
                    .bytes()
                    .zip(s.verdicts())
                    .filter(|&(ch, &v)| ch == letter && v != Absent)
                    .count();
                let available = target.chars().iter().filter(|&&ch| ch == letter).count();
                assert!(
                    scored <= available,
                    "{guess} vs {target}: letter {} scored {scored} times, target has {available}",
                    letter as char
                );
            }
        }
    }

    #[test]
    fn score_is_deterministic() {
        let target = Word::new("crane").unwrap();
        assert_eq!(Score::of("trace", &target), Score::of("trace", &target));
    }

    #[test]
    fn score_non_alphabetic_guess_characters_never_match() {
        let s = score("cr4n!", "crane");
        assert_eq!(s.verdicts(), &[Correct, Correct, Absent, Correct, Absent]);
    }

    #[test]
    fn score_serializes_as_verdict_array() {
        let s = score("trace", "crane");
        assert_eq!(
            serde_json::to_string(&s).unwrap(),
            r#"["absent","correct","correct","present","correct"]"#
        );
    }
}
