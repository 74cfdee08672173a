use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use word_types::RemoteResult;

use crate::word_list::WordList;

/// A dictionary entry returned by the remote lookup service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub word: String,
    pub definition: Option<String>,
}

/// Remote dictionary lookup. `Ok(None)` means the service answered and does
/// not know the word; `Err` covers transport failures, unexpected statuses
/// and malformed payloads.
#[async_trait]
pub trait Dictionary: Send + Sync {
    async fn lookup(&self, word: &str) -> RemoteResult<Option<DictionaryEntry>>;
}

/// Supplies the secret word for a session and validates guesses, preferring
/// the remote dictionary with the bundled list as the availability fallback.
pub struct WordSource {
    list: WordList,
    dictionary: Arc<dyn Dictionary>,
}

impl WordSource {
    pub fn new(list: WordList, dictionary: Arc<dyn Dictionary>) -> Self {
        Self { list, dictionary }
    }

    pub fn daily_word(&self, date: NaiveDate) -> &str {
        self.list.daily_word(date)
    }

    pub fn random_word(&self) -> &str {
        self.list.random_word()
    }

    pub fn is_known_locally(&self, word: &str) -> bool {
        self.list.contains(word)
    }

    /// Whether a guess is an acceptable word. The remote dictionary is asked
    /// first so valid English words missing from the bundled list are
    /// accepted; any remote failure falls back to the local membership test.
    /// Never fails.
    pub async fn validate(&self, word: &str) -> bool {
        match self.dictionary.lookup(word).await {
            Ok(Some(_)) => true,
            Ok(None) => false,
            Err(err) => {
                debug!("dictionary lookup for '{}' failed: {}", word, err);
                self.is_known_locally(word)
            }
        }
    }

    /// Best-effort definition for the end-of-game summary.
    pub async fn definition(&self, word: &str) -> Option<String> {
        match self.dictionary.lookup(word).await {
            Ok(Some(entry)) => entry.definition,
            Ok(None) => None,
            Err(err) => {
                debug!("definition lookup for '{}' failed: {}", word, err);
                None
            }
        }
    }

    pub fn word_list(&self) -> &WordList {
        &self.list
    }
}
