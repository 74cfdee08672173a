use anyhow::{Result, anyhow};

use word_types::{GameMode, GameRecord, MAX_GUESSES, ScoredGuess, WORD_LENGTH};

use crate::scoring::ScoringEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    Won,
    Lost,
}

/// One in-progress game: the hidden target plus the scored guesses submitted
/// so far. Finished sessions convert into a persistable [`GameRecord`].
#[derive(Debug)]
pub struct GameSession {
    mode: GameMode,
    target: String,
    guesses: Vec<ScoredGuess>,
    status: SessionStatus,
}

impl GameSession {
    pub fn new(mode: GameMode, target: impl Into<String>) -> Self {
        Self {
            mode,
            target: target.into().to_uppercase(),
            guesses: Vec::new(),
            status: SessionStatus::InProgress,
        }
    }

    /// Score and record a guess. Rejects wrong-length words and submissions
    /// after the game is over; word-list validation is the caller's job.
    pub fn submit(&mut self, word: &str) -> Result<ScoredGuess> {
        if self.status != SessionStatus::InProgress {
            return Err(anyhow!("game is already over"));
        }
        if word.chars().count() != WORD_LENGTH {
            return Err(anyhow!("guess must be {} letters: {}", WORD_LENGTH, word));
        }

        let scored = ScoringEngine::score(word, &self.target);
        let solved = scored.word == self.target;
        self.guesses.push(scored.clone());

        if solved {
            self.status = SessionStatus::Won;
        } else if self.guesses.len() >= MAX_GUESSES {
            self.status = SessionStatus::Lost;
        }

        Ok(scored)
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != SessionStatus::InProgress
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn guesses(&self) -> &[ScoredGuess] {
        &self.guesses
    }

    pub fn guesses_used(&self) -> usize {
        self.guesses.len()
    }

    /// Convert a finished session into the record handed to the sync
    /// coordinator. The record carries no remote id yet.
    pub fn into_record(self, user_id: impl Into<String>, played_at: i64) -> Result<GameRecord> {
        if self.status == SessionStatus::InProgress {
            return Err(anyhow!("game is still in progress"));
        }
        Ok(GameRecord {
            local_id: 0,
            remote_id: String::new(),
            user_id: user_id.into(),
            mode: self.mode,
            word: self.target,
            guesses_used: self.guesses.len() as i32,
            played_at,
            won: self.status == SessionStatus::Won,
            guesses: self.guesses.into_iter().map(|g| g.word).collect(),
        })
    }
}
