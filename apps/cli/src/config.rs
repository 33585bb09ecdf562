//! Runtime configuration read from the environment (and `.env`).

use thiserror::Error;

const DEFAULT_SHARE_BASE_URL: &str = "http://localhost:8080/";
const DEFAULT_QUESTIONS: u32 = 10;
const DEFAULT_OPTIONS: u32 = 3;
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Configuration error: {key} must be a positive number (got \"{value}\")")]
    InvalidNumber { key: &'static str, value: String },
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL share links point at.
    pub share_base_url: String,
    /// Question count used by `quiz prompt` when none is given.
    pub default_questions: u32,
    /// Option count used by `quiz prompt` when none is given.
    pub default_options: u32,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            share_base_url: DEFAULT_SHARE_BASE_URL.to_string(),
            default_questions: DEFAULT_QUESTIONS,
            default_options: DEFAULT_OPTIONS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional env vars:
    /// - QUIZ_SHARE_BASE_URL: Base URL for share links
    /// - QUIZ_DEFAULT_QUESTIONS: Default question count for prompts
    /// - QUIZ_DEFAULT_OPTIONS: Default option count for prompts
    /// - RUST_LOG: Log filter
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let number = |key: &'static str, default: u32| -> Result<u32, ConfigError> {
            match lookup(key) {
                None => Ok(default),
                Some(value) => value
                    .trim()
                    .parse::<u32>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or(ConfigError::InvalidNumber { key, value }),
            }
        };

        Ok(Self {
            share_base_url: lookup("QUIZ_SHARE_BASE_URL").unwrap_or(defaults.share_base_url),
            default_questions: number("QUIZ_DEFAULT_QUESTIONS", defaults.default_questions)?,
            default_options: number("QUIZ_DEFAULT_OPTIONS", defaults.default_options)?,
            log_filter: lookup("RUST_LOG").unwrap_or(defaults.log_filter),
        })
    }
}
