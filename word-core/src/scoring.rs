use std::collections::HashMap;

use word_types::{LetterVerdict, ScoredGuess, WORD_LENGTH};

pub struct ScoringEngine;

impl ScoringEngine {
    /// Evaluate a guess against the target word, one verdict per position.
    ///
    /// Two passes: exact matches first, each consuming its target letter, then
    /// misplaced letters claim whatever remains of the pool. The consumption
    /// order is what keeps repeated letters from being counted twice.
    ///
    /// Comparison is case-insensitive. Panics if either word is not exactly
    /// five letters; callers validate lengths before scoring.
    pub fn score(guess: &str, target: &str) -> ScoredGuess {
        let guess = guess.to_uppercase();
        let target = target.to_uppercase();

        let guess_chars: Vec<char> = guess.chars().collect();
        let target_chars: Vec<char> = target.chars().collect();
        assert_eq!(
            guess_chars.len(),
            WORD_LENGTH,
            "guess must be {WORD_LENGTH} letters"
        );
        assert_eq!(
            target_chars.len(),
            WORD_LENGTH,
            "target must be {WORD_LENGTH} letters"
        );

        let mut verdicts = vec![LetterVerdict::Absent; WORD_LENGTH];

        // First pass: mark correct positions. Target letters not consumed here
        // form the pool available to the second pass.
        let mut remaining: HashMap<char, usize> = HashMap::new();
        for (i, &ch) in guess_chars.iter().enumerate() {
            if ch == target_chars[i] {
                verdicts[i] = LetterVerdict::Correct;
            } else {
                *remaining.entry(target_chars[i]).or_insert(0) += 1;
            }
        }

        // Second pass: mark present letters, consuming one pool instance each.
        for (i, &ch) in guess_chars.iter().enumerate() {
            if verdicts[i] == LetterVerdict::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(&ch) {
                if *count > 0 {
                    verdicts[i] = LetterVerdict::Present;
                    *count -= 1;
                }
            }
        }

        ScoredGuess {
            word: guess,
            verdicts,
        }
    }
}
