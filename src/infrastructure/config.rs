use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
pub const DEFAULT_RECEIVER_ADDR: &str = "127.0.0.1:5001";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Where user records come from. `database_url` wins over `users_file`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreConfig {
    pub database_url: Option<String>,
    pub users_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NotifierConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub store: StoreConfig,
    pub generator: GeneratorConfig,
    pub notifier: NotifierConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub store: StoreConfig,
    pub bind_addr: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReceiverConfig {
    pub bind_addr: String,
}

/// Reads process environment, after loading `.env` if one exists.
pub fn env_lookup() -> impl Fn(&str) -> Option<String> {
    dotenv::dotenv().ok();
    |key: &str| std::env::var(key).ok()
}

fn optional<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    optional(lookup, name).ok_or(ConfigError::Missing(name))
}

fn timeout_secs<F>(lookup: &F, name: &'static str) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match optional(lookup, name) {
        None => Ok(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        Some(value) => match value.parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
            _ => Err(ConfigError::Invalid { name, value }),
        },
    }
}

impl StoreConfig {
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            database_url: optional(lookup, "DATABASE_URL"),
            users_file: optional(lookup, "USERS_FILE").map(PathBuf::from),
        }
    }
}

impl PipelineConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&env_lookup())
    }

    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            store: StoreConfig::from_lookup(lookup),
            generator: GeneratorConfig {
                api_key: required(lookup, "OPENAI_API_KEY")?,
                base_url: optional(lookup, "OPENAI_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
                model: optional(lookup, "OPENAI_MODEL")
                    .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
                timeout: timeout_secs(lookup, "GENERATION_TIMEOUT_SECS")?,
            },
            notifier: NotifierConfig {
                endpoint: required(lookup, "NOTIFICATION_ENDPOINT")?,
                timeout: timeout_secs(lookup, "NOTIFICATION_TIMEOUT_SECS")?,
            },
        })
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(&env_lookup())
    }

    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            store: StoreConfig::from_lookup(lookup),
            bind_addr: optional(lookup, "BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        }
    }
}

impl ReceiverConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(&env_lookup())
    }

    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            bind_addr: optional(lookup, "MOCK_RECEIVER_ADDR")
                .unwrap_or_else(|| DEFAULT_RECEIVER_ADDR.to_string()),
        }
    }
}
