use std::fmt;
use std::time::Duration;

use anyhow::{bail, Context, Result};

const DEFAULT_GENAI_API_BASE: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_LLM_TIMEOUT_SECS: u64 = 60;

/// Application configuration loaded from environment variables.
/// Startup fails if the Gemini credential is missing.
#[derive(Clone)]
pub struct Config {
    pub genai_api_key: String,
    pub genai_api_base: String,
    pub llm_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` delegates here.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let llm_timeout_secs = match lookup("LLM_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_LLM_TIMEOUT_SECS,
        };
        if llm_timeout_secs == 0 {
            bail!("LLM_TIMEOUT_SECS must be greater than zero");
        }

        Ok(Config {
            genai_api_key: require(&lookup, "GENAI_API_KEY")?,
            // Blank counts as unset
            genai_api_base: lookup("GENAI_API_BASE")
                .map(|base| base.trim().trim_end_matches('/').to_string())
                .filter(|base| !base.is_empty())
                .unwrap_or_else(|| DEFAULT_GENAI_API_BASE.to_string()),
            llm_timeout: Duration::from_secs(llm_timeout_secs),
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

// Keeps the API key out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("genai_api_key", &"<redacted>")
            .field("genai_api_base", &self.genai_api_base)
            .field("llm_timeout", &self.llm_timeout)
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .finish()
    }
}

fn require<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => bail!("Required environment variable '{key}' is not set"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("GENAI_API_KEY"));
    }

    #[test]
    fn test_blank_api_key_is_fatal() {
        let result = Config::from_lookup(lookup_from(&[("GENAI_API_KEY", "   ")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults_applied() {
        let config = Config::from_lookup(lookup_from(&[("GENAI_API_KEY", "secret")])).unwrap();
        assert_eq!(config.genai_api_key, "secret");
        assert_eq!(config.genai_api_base, DEFAULT_GENAI_API_BASE);
        assert_eq!(config.llm_timeout, Duration::from_secs(60));
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_overrides_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("GENAI_API_KEY", "secret"),
            ("GENAI_API_BASE", "http://localhost:9000/"),
            ("LLM_TIMEOUT_SECS", "5"),
            ("PORT", "3000"),
            ("RUST_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.genai_api_base, "http://localhost:9000");
        assert_eq!(config.llm_timeout, Duration::from_secs(5));
        assert_eq!(config.port, 3000);
        assert_eq!(config.rust_log, "debug");
    }

    #[test]
    fn test_blank_api_base_falls_back_to_default() {
        for blank in ["", "   ", "/"] {
            let config = Config::from_lookup(lookup_from(&[
                ("GENAI_API_KEY", "secret"),
                ("GENAI_API_BASE", blank),
            ]))
            .unwrap();
            assert_eq!(config.genai_api_base, DEFAULT_GENAI_API_BASE);
        }
    }

    #[test]
    fn test_invalid_port_rejected() {
        let result = Config::from_lookup(lookup_from(&[
            ("GENAI_API_KEY", "secret"),
            ("PORT", "not-a-port"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = Config::from_lookup(lookup_from(&[
            ("GENAI_API_KEY", "secret"),
            ("LLM_TIMEOUT_SECS", "0"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = Config::from_lookup(lookup_from(&[("GENAI_API_KEY", "secret")])).unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
