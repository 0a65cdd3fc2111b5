use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

/// Базовый URL API по умолчанию.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8083/api/v1";
/// Таймаут запроса по умолчанию.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const BASE_URL_ENV: &str = "AUTH_API_BASE_URL";
const TIMEOUT_ENV: &str = "AUTH_API_TIMEOUT_SECS";

#[derive(Debug, Error, PartialEq, Eq)]
/// Ошибки конфигурации клиента.
pub enum ConfigError {
    /// Базовый URL не разбирается или не `http(s)`.
    #[error("invalid base url `{0}`")]
    InvalidBaseUrl(String),

    /// Таймаут не число или равен нулю.
    #[error("AUTH_API_TIMEOUT_SECS must be a positive integer, got `{0}`")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Настройки [`crate::ApiClient`].
pub struct ClientConfig {
    /// Корень всех путей API, например `http://localhost:8083/api/v1`.
    pub base_url: String,
    /// Предел длительности одного запроса.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    /// Конфигурация с заданным базовым URL и таймаутом по умолчанию.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Заменяет таймаут.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Читает `AUTH_API_BASE_URL` и `AUTH_API_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup(BASE_URL_ENV)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = match lookup(TIMEOUT_ENV) {
            Some(raw) => parse_timeout_secs(&raw)?,
            None => DEFAULT_TIMEOUT,
        };

        let config = Self { base_url, timeout };
        config.validate()?;
        Ok(config)
    }

    /// Проверяет базовый URL и таймаут.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.base_url)
            .map_err(|_| ConfigError::InvalidBaseUrl(self.base_url.clone()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl(self.base_url.clone()));
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout("0".to_string()));
        }
        Ok(())
    }
}

fn parse_timeout_secs(raw: &str) -> Result<Duration, ConfigError> {
    let secs = raw
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidTimeout(raw.to_string()))?;
    if secs == 0 {
        return Err(ConfigError::InvalidTimeout(raw.to_string()));
    }
    Ok(Duration::from_secs(secs))
}
