use auth_core::{FailureMessage, message_from_payload, payload_from_text};
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
/// Ошибки клиентской библиотеки `auth-client`.
pub enum AuthClientError {
    /// Ошибка HTTP-транспорта (`reqwest`): нет соединения, DNS и т.п.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Сервер не ответил за отведённое время.
    #[error("request timed out")]
    Timeout,

    /// Сервер ответил не-2xx статусом. `payload` — тело ответа: JSON, если
    /// оно разбирается, иначе строка.
    #[error("server responded with {status}: {payload}")]
    Server {
        /// HTTP-статус ответа.
        status: StatusCode,
        /// Тело ответа.
        payload: Value,
    },

    /// Некорректная конфигурация клиента.
    #[error("invalid client config: {0}")]
    Config(#[from] ConfigError),
}

/// Результат операций `auth-client`.
pub type AuthClientResult<T> = Result<T, AuthClientError>;

impl AuthClientError {
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return Self::Timeout;
        }
        Self::Http(err)
    }

    pub(crate) fn from_http_status(status: StatusCode, body: &str) -> Self {
        Self::Server {
            status,
            payload: payload_from_text(body),
        }
    }

    /// HTTP-статус, если ошибку вернул сервер.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl FailureMessage for AuthClientError {
    fn server_message(&self) -> Option<String> {
        match self {
            Self::Server { payload, .. } => message_from_payload(payload),
            _ => None,
        }
    }
}
