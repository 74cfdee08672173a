use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub words_file: String,
    pub dictionary_base_url: String,
    pub http_timeout_seconds: u64,
}

impl Config {
    pub fn new() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://word_vault.db?mode=rwc".to_string()),
            words_file: env::var("WORDS_FILE").unwrap_or_else(|_| "words.txt".to_string()),
            dictionary_base_url: env::var("DICTIONARY_BASE_URL")
                .unwrap_or_else(|_| "https://api.dictionaryapi.dev".to_string()),
            http_timeout_seconds: env::var("HTTP_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .expect("Invalid HTTP_TIMEOUT_SECONDS"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
