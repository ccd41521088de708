use serde::Deserialize;
use std::time::Duration;

use crate::cache::CacheConfig;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// API key for the hosted language model
    pub llm_api_key: String,

    /// Base URL of an OpenAI-compatible chat completions API
    #[serde(default = "default_llm_api_url")]
    pub llm_api_url: String,

    /// Model name sent with every completion request
    #[serde(default = "default_llm_model")]
    pub llm_model: String,

    /// TMDB API key
    pub tmdb_api_key: String,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// Maximum number of entries held by the in-process cache
    #[serde(default = "default_cache_max_size")]
    pub cache_max_size: usize,

    /// Baseline cache TTL in seconds
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_llm_api_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_llm_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_cache_max_size() -> usize {
    200
}

fn default_cache_ttl_secs() -> u64 {
    300
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Address the HTTP server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig {
            max_size: self.cache_max_size,
            default_ttl: Duration::from_secs(self.cache_ttl_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_applied() {
        let config: Config = envy::from_iter(vars(&[
            ("LLM_API_KEY", "sk-test"),
            ("TMDB_API_KEY", "tmdb-test"),
        ]))
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.llm_model, "gpt-4o-mini");
        assert_eq!(config.cache_max_size, 200);
        assert_eq!(config.cache_ttl_secs, 300);
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_missing_api_key_fails() {
        let result = envy::from_iter::<_, Config>(vars(&[("TMDB_API_KEY", "tmdb-test")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_cache_config_from_env_values() {
        let config: Config = envy::from_iter(vars(&[
            ("LLM_API_KEY", "sk-test"),
            ("TMDB_API_KEY", "tmdb-test"),
            ("CACHE_MAX_SIZE", "50"),
            ("CACHE_TTL_SECS", "60"),
        ]))
        .unwrap();

        let cache_config = config.cache_config();
        assert_eq!(cache_config.max_size, 50);
        assert_eq!(cache_config.default_ttl, Duration::from_secs(60));
    }
}
