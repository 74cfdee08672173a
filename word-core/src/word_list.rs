use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use chrono::NaiveDate;
use rand::Rng;
use tracing::warn;

use word_types::WORD_LENGTH;

/// Built-in fallback so the game is always playable even when the bundled
/// word file cannot be read.
const BUILTIN_WORDS: [&str; 30] = [
    "APPLE", "BRAVE", "CRANE", "DANCE", "EAGLE", "FRUIT", "GRAPE", "HOUSE", "IMAGE", "JUICE",
    "KNIFE", "LEMON", "MOUSE", "NIGHT", "OCEAN", "PEACE", "QUEEN", "RIVER", "STONE", "TIGER",
    "UNCLE", "VOICE", "WATER", "XENON", "YOUTH", "ZEBRA", "BLOOM", "CHESS", "DREAM", "FLAME",
];

static CACHED: OnceLock<WordList> = OnceLock::new();

/// The canonical word list: every playable target and every locally known
/// guess. Entries are upper-cased and exactly five letters; the list is never
/// empty (parsing falls back to the built-in words).
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn parse(contents: &str) -> Self {
        let words: Vec<String> = contents
            .lines()
            .map(|line| line.trim().to_uppercase())
            .filter(|word| word.chars().count() == WORD_LENGTH)
            .collect();

        if words.is_empty() {
            Self::builtin()
        } else {
            Self { words }
        }
    }

    pub fn builtin() -> Self {
        Self {
            words: BUILTIN_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents),
            Err(err) => {
                warn!(
                    "failed to read word list {}: {}, using built-in words",
                    path.display(),
                    err
                );
                Self::builtin()
            }
        }
    }

    /// Load once per process. Later calls return the first result and ignore
    /// the path argument.
    pub fn load_cached(path: impl AsRef<Path>) -> &'static WordList {
        CACHED.get_or_init(|| Self::load(path))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        let word = word.trim().to_uppercase();
        self.words.iter().any(|w| *w == word)
    }

    /// The daily challenge word: days elapsed since the Unix epoch, reduced
    /// modulo the list size. Stable across restarts and devices for the same
    /// date and list.
    pub fn daily_word(&self, date: NaiveDate) -> &str {
        let days_since_epoch = date.signed_duration_since(NaiveDate::default()).num_days();
        let index = days_since_epoch.rem_euclid(self.words.len() as i64) as usize;
        &self.words[index]
    }

    /// Uniform random pick for unlimited mode.
    pub fn random_word(&self) -> &str {
        let index = rand::thread_rng().gen_range(0..self.words.len());
        &self.words[index]
    }
}
