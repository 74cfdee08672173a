use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::UnknownMode;

/// Every playable word has exactly five letters.
pub const WORD_LENGTH: usize = 5;

/// A game ends in a loss after this many unsuccessful guesses.
pub const MAX_GUESSES: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameMode {
    Unlimited,
    Daily,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Unlimited => "UNLIMITED",
            GameMode::Daily => "DAILY",
        }
    }
}

impl FromStr for GameMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UNLIMITED" => Ok(GameMode::Unlimited),
            "DAILY" => Ok(GameMode::Daily),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

/// One completed (or abandoned) game, as persisted in both stores.
///
/// `local_id` is assigned by the local store on insert and is zero before that.
/// `remote_id` is the document id assigned by the remote store; an empty string
/// means the record has not reached the remote yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    #[serde(default)]
    pub local_id: i64,
    #[serde(default)]
    pub remote_id: String,
    pub user_id: String,
    pub mode: GameMode,
    pub word: String,
    pub guesses_used: i32,
    pub played_at: i64,
    pub won: bool,
    #[serde(default)]
    pub guesses: Vec<String>,
}

impl GameRecord {
    pub fn is_synced(&self) -> bool {
        !self.remote_id.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterVerdict {
    Correct, // Green - right letter, right position
    Present, // Yellow - right letter, wrong position
    Absent,  // Gray - letter not in word
}

/// A single evaluated guess: the word as submitted (upper-cased) and one
/// verdict per letter position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredGuess {
    pub word: String,
    pub verdicts: Vec<LetterVerdict>,
}
