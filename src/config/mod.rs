//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `VPROFILE_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{
    DEFAULT_EMBEDDING_TIMEOUT_MS, DEFAULT_EMBEDDING_URL, DEFAULT_JD_API_URL, DEFAULT_JD_MODEL,
    DEFAULT_JD_TIMEOUT_MS,
};
use crate::embedding::HttpEmbeddingConfig;
use crate::jd::ChatCompletionConfig;
use crate::ranking::RankingConfig;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `VPROFILE_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Embedding provider base URL. Default: [`DEFAULT_EMBEDDING_URL`].
    pub embedding_url: String,

    /// Sent to the provider as the `token` header.
    pub embedding_token: Option<String>,

    /// Per-call provider timeout. Default: 10s.
    pub embedding_timeout: Duration,

    /// JSON candidate corpus. `None` serves an empty corpus.
    pub corpus_path: Option<PathBuf>,

    /// Corpus reload period in seconds; `0` disables reloading. Default: `0`.
    pub corpus_refresh_secs: u64,

    /// JSON-lines query audit file. `None` logs queries through `tracing` only.
    pub query_log_path: Option<PathBuf>,

    pub ranking: RankingConfig,

    /// Chat-completion base URL for job-description extraction.
    /// Default: [`DEFAULT_JD_API_URL`].
    pub jd_api_url: String,

    /// Bearer key for the completion API. `None` disables extraction.
    pub jd_api_key: Option<String>,

    pub jd_model: String,

    /// Per-call completion timeout. Default: 30s.
    pub jd_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            embedding_url: DEFAULT_EMBEDDING_URL.to_string(),
            embedding_token: None,
            embedding_timeout: Duration::from_millis(DEFAULT_EMBEDDING_TIMEOUT_MS),
            corpus_path: None,
            corpus_refresh_secs: 0,
            query_log_path: None,
            ranking: RankingConfig::default(),
            jd_api_url: DEFAULT_JD_API_URL.to_string(),
            jd_api_key: None,
            jd_model: DEFAULT_JD_MODEL.to_string(),
            jd_timeout: Duration::from_millis(DEFAULT_JD_TIMEOUT_MS),
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "VPROFILE_PORT";
    const ENV_BIND_ADDR: &'static str = "VPROFILE_BIND_ADDR";
    const ENV_EMBEDDING_URL: &'static str = "VPROFILE_EMBEDDING_URL";
    const ENV_EMBEDDING_TOKEN: &'static str = "VPROFILE_EMBEDDING_TOKEN";
    const ENV_EMBEDDING_TIMEOUT_MS: &'static str = "VPROFILE_EMBEDDING_TIMEOUT_MS";
    const ENV_CORPUS_PATH: &'static str = "VPROFILE_CORPUS_PATH";
    const ENV_CORPUS_REFRESH_SECS: &'static str = "VPROFILE_CORPUS_REFRESH_SECS";
    const ENV_QUERY_LOG_PATH: &'static str = "VPROFILE_QUERY_LOG_PATH";
    const ENV_ACCURACY_MULTIPLIER: &'static str = "VPROFILE_ACCURACY_MULTIPLIER";
    const ENV_SEMANTIC_FLOOR: &'static str = "VPROFILE_SEMANTIC_FLOOR";
    const ENV_EXPERIENCE_FLOOR: &'static str = "VPROFILE_EXPERIENCE_FLOOR";
    const ENV_JD_API_URL: &'static str = "VPROFILE_JD_API_URL";
    const ENV_JD_API_KEY: &'static str = "VPROFILE_JD_API_KEY";
    const ENV_JD_MODEL: &'static str = "VPROFILE_JD_MODEL";
    const ENV_JD_TIMEOUT_MS: &'static str = "VPROFILE_JD_TIMEOUT_MS";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let embedding_url =
            Self::parse_string_from_env(Self::ENV_EMBEDDING_URL, defaults.embedding_url);
        let embedding_token = Self::parse_optional_string_from_env(Self::ENV_EMBEDDING_TOKEN);
        let embedding_timeout = Duration::from_millis(Self::parse_number_from_env(
            Self::ENV_EMBEDDING_TIMEOUT_MS,
            DEFAULT_EMBEDDING_TIMEOUT_MS,
        )?);
        let corpus_path = Self::parse_optional_path_from_env(Self::ENV_CORPUS_PATH);
        let corpus_refresh_secs = Self::parse_number_from_env(
            Self::ENV_CORPUS_REFRESH_SECS,
            defaults.corpus_refresh_secs,
        )?;
        let query_log_path = Self::parse_optional_path_from_env(Self::ENV_QUERY_LOG_PATH);

        let ranking = RankingConfig {
            accuracy_multiplier: Self::parse_number_from_env(
                Self::ENV_ACCURACY_MULTIPLIER,
                defaults.ranking.accuracy_multiplier,
            )?,
            semantic_floor: Self::parse_number_from_env(
                Self::ENV_SEMANTIC_FLOOR,
                defaults.ranking.semantic_floor,
            )?,
            experience_floor: Self::parse_number_from_env(
                Self::ENV_EXPERIENCE_FLOOR,
                defaults.ranking.experience_floor,
            )?,
        };

        let jd_api_url = Self::parse_string_from_env(Self::ENV_JD_API_URL, defaults.jd_api_url);
        let jd_api_key = Self::parse_optional_string_from_env(Self::ENV_JD_API_KEY);
        let jd_model = Self::parse_string_from_env(Self::ENV_JD_MODEL, defaults.jd_model);
        let jd_timeout = Duration::from_millis(Self::parse_number_from_env(
            Self::ENV_JD_TIMEOUT_MS,
            DEFAULT_JD_TIMEOUT_MS,
        )?);

        Ok(Self {
            port,
            bind_addr,
            embedding_url,
            embedding_token,
            embedding_timeout,
            corpus_path,
            corpus_refresh_secs,
            query_log_path,
            ranking,
            jd_api_url,
            jd_api_key,
            jd_model,
            jd_timeout,
        })
    }

    /// Validates paths and basic invariants (does not create files).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.corpus_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        if let Some(ref path) = self.query_log_path
            && path.is_dir()
        {
            return Err(ConfigError::NotAFile { path: path.clone() });
        }

        self.http_embedding_config()
            .validate()
            .map_err(|e| ConfigError::InvalidEmbedding {
                reason: e.to_string(),
            })?;

        self.ranking
            .validate()
            .map_err(|e| ConfigError::InvalidRanking {
                reason: e.to_string(),
            })?;

        if let Some(jd) = self.chat_completion_config() {
            jd.validate()
                .map_err(|e| ConfigError::InvalidJdExtraction {
                    reason: e.to_string(),
                })?;
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    pub fn http_embedding_config(&self) -> HttpEmbeddingConfig {
        let config = HttpEmbeddingConfig::new(self.embedding_url.clone())
            .with_timeout(self.embedding_timeout);
        match self.embedding_token {
            Some(ref token) => config.with_token(token.clone()),
            None => config,
        }
    }

    /// Completion client settings, or `None` when no API key is configured.
    pub fn chat_completion_config(&self) -> Option<ChatCompletionConfig> {
        self.jd_api_key.as_ref().map(|key| {
            ChatCompletionConfig::new(key.clone())
                .with_base_url(self.jd_api_url.clone())
                .with_model(self.jd_model.clone())
                .with_timeout(self.jd_timeout)
        })
    }

    /// Reload period, or `None` when reloading is off.
    pub fn corpus_refresh_interval(&self) -> Option<Duration> {
        (self.corpus_refresh_secs > 0).then(|| Duration::from_secs(self.corpus_refresh_secs))
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        Self::parse_optional_string_from_env(var_name).map(PathBuf::from)
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }

    fn parse_number_from_env<T: std::str::FromStr>(
        var_name: &'static str,
        default: T,
    ) -> Result<T, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidNumber {
                    name: var_name,
                    value,
                }),
            Err(_) => Ok(default),
        }
    }
}
