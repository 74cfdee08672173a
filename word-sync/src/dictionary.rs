use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use word_core::{Dictionary, DictionaryEntry};
use word_types::{RemoteError, RemoteResult};

const DEFAULT_BASE_URL: &str = "https://api.dictionaryapi.dev";

/// Client for the free dictionary lookup service. Unknown words come back as
/// HTTP 404 and map to `Ok(None)`; transport failures, unexpected statuses
/// and undecodable payloads are errors the caller treats as "service
/// unavailable".
pub struct HttpDictionary {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ApiEntry {
    word: String,
    #[serde(default)]
    meanings: Vec<ApiMeaning>,
}

#[derive(Debug, Deserialize)]
struct ApiMeaning {
    #[serde(default)]
    definitions: Vec<ApiDefinition>,
}

#[derive(Debug, Deserialize)]
struct ApiDefinition {
    definition: String,
}

fn first_entry(entries: Vec<ApiEntry>) -> Option<DictionaryEntry> {
    let entry = entries.into_iter().next()?;
    let definition = entry
        .meanings
        .iter()
        .flat_map(|m| m.definitions.iter())
        .map(|d| d.definition.clone())
        .next();
    Some(DictionaryEntry {
        word: entry.word,
        definition,
    })
}

impl HttpDictionary {
    pub fn new(timeout: Duration) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, timeout)
    }

    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    async fn fetch(&self, word: &str) -> RemoteResult<Option<DictionaryEntry>> {
        let url = format!(
            "{}/api/v2/entries/en/{}",
            self.base_url,
            word.to_lowercase()
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(RemoteError::Status(response.status().as_u16()));
        }

        let entries: Vec<ApiEntry> = response
            .json()
            .await
            .map_err(|e| RemoteError::Payload(e.to_string()))?;

        Ok(first_entry(entries))
    }
}

#[async_trait]
impl Dictionary for HttpDictionary {
    async fn lookup(&self, word: &str) -> RemoteResult<Option<DictionaryEntry>> {
        let result = self.fetch(word).await;
        if let Err(err) = &result {
            debug!("dictionary request for '{}' failed: {}", word, err);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_PAYLOAD: &str = r#"[
        {
            "word": "crane",
            "phonetic": "/kɹeɪn/",
            "meanings": [
                {
                    "partOfSpeech": "noun",
                    "definitions": [
                        { "definition": "A large bird with long legs and a long neck." },
                        { "definition": "A machine for lifting heavy loads." }
                    ]
                }
            ]
        }
    ]"#;

    #[test]
    fn test_payload_decodes_to_first_definition() {
        let entries: Vec<ApiEntry> = serde_json::from_str(SAMPLE_PAYLOAD).unwrap();
        let entry = first_entry(entries).unwrap();
        assert_eq!(entry.word, "crane");
        assert_eq!(
            entry.definition.as_deref(),
            Some("A large bird with long legs and a long neck.")
        );
    }

    #[test]
    fn test_entry_without_definitions_still_counts_as_found() {
        let entries: Vec<ApiEntry> =
            serde_json::from_str(r#"[{ "word": "crane", "meanings": [] }]"#).unwrap();
        let entry = first_entry(entries).unwrap();
        assert_eq!(entry.word, "crane");
        assert_eq!(entry.definition, None);
    }

    #[test]
    fn test_empty_payload_is_not_found() {
        let entries: Vec<ApiEntry> = serde_json::from_str("[]").unwrap();
        assert!(first_entry(entries).is_none());
    }
}
