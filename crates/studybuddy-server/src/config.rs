//! Server configuration
//!
//! Read once at startup from the Shuttle secret store and passed explicitly
//! into the adapters. Keys:
//! - `OPENAI_API_KEY`: completion service credential (optional)
//! - `OPENAI_BASE_URL`: API root (default: https://api.openai.com/v1)
//! - `OPENAI_MODEL`: completion model (default: gpt-3.5-turbo-instruct)
//! - `COMPLETION_MAX_TOKENS`: output bound (default: 100)
//! - `COMPLETION_TEMPERATURE`: sampling temperature (default: 0.7)

use anyhow::{Context, Result};
use std::str::FromStr;

use studybuddy::CompletionOptions;

use crate::adapters::openai::{DEFAULT_BASE_URL, DEFAULT_MODEL};

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub completion: CompletionOptions,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_base_url: DEFAULT_BASE_URL.to_string(),
            openai_model: DEFAULT_MODEL.to_string(),
            completion: CompletionOptions::default(),
        }
    }
}

impl ServerConfig {
    /// Build from a key lookup, e.g. `|key| secrets.get(key)`
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Ok(Self {
            openai_api_key: get("OPENAI_API_KEY"),
            openai_base_url: get("OPENAI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.openai_base_url),
            openai_model: get("OPENAI_MODEL").unwrap_or(defaults.openai_model),
            completion: CompletionOptions {
                max_tokens: parse_or(
                    get("COMPLETION_MAX_TOKENS"),
                    "COMPLETION_MAX_TOKENS",
                    defaults.completion.max_tokens,
                )?,
                temperature: parse_or(
                    get("COMPLETION_TEMPERATURE"),
                    "COMPLETION_TEMPERATURE",
                    defaults.completion.temperature,
                )?,
            },
        })
    }
}

fn parse_or<T>(value: Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {}: {:?}", key, raw)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_empty() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert!(config.openai_api_key.is_none());
        assert_eq!(config.openai_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.openai_model, DEFAULT_MODEL);
        assert_eq!(config.completion, CompletionOptions::default());
    }

    #[test]
    fn test_reads_all_keys() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_BASE_URL", "http://localhost:8080/v1/"),
            ("OPENAI_MODEL", "davinci-002"),
            ("COMPLETION_MAX_TOKENS", "50"),
            ("COMPLETION_TEMPERATURE", "0.2"),
        ]))
        .unwrap();

        assert_eq!(config.openai_api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.openai_base_url, "http://localhost:8080/v1");
        assert_eq!(config.openai_model, "davinci-002");
        assert_eq!(config.completion.max_tokens, 50);
        assert_eq!(config.completion.temperature, 0.2);
    }

    #[test]
    fn test_blank_api_key_is_absent() {
        let config = ServerConfig::from_lookup(lookup(&[("OPENAI_API_KEY", "  ")])).unwrap();
        assert!(config.openai_api_key.is_none());
    }

    #[test]
    fn test_invalid_number_is_an_error() {
        let err = ServerConfig::from_lookup(lookup(&[("COMPLETION_MAX_TOKENS", "lots")]))
            .unwrap_err();
        assert!(err.to_string().contains("COMPLETION_MAX_TOKENS"));
    }
}
