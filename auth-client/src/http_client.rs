use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use auth_core::payload_from_text;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{AuthClientError, AuthClientResult};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
/// Преднастроенный HTTP-клиент auth API.
///
/// Все запросы идут с `Content-Type: application/json`, cookie, выставленные
/// сервером, прикладываются к последующим запросам, длительность каждого
/// запроса ограничена таймаутом из [`ClientConfig`]. Повторов и кэша нет.
pub struct ApiClient {
    base_url: String,
    timeout: Duration,
    client: Client,
}

impl ApiClient {
    /// Создаёт клиент по конфигурации.
    pub fn new(config: ClientConfig) -> AuthClientResult<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .cookie_store(true)
            .connect_timeout(CONNECT_TIMEOUT.min(config.timeout))
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            base_url: config.base_url,
            timeout: config.timeout,
            client,
        })
    }

    /// Создаёт клиент по переменным окружения (см. [`ClientConfig::from_env`]).
    pub fn from_env() -> AuthClientResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Базовый URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Таймаут запроса.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// POST с JSON-телом. Возвращает тело ответа: разобранный JSON, строку,
    /// если тело не JSON, или `null`, если тело пустое.
    pub async fn post_json<TReq>(&self, path: &str, body: &TReq) -> AuthClientResult<Value>
    where
        TReq: Serialize + ?Sized,
    {
        let url = self.endpoint(path);
        debug!(%url, "sending POST");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|err| {
                warn!(%url, error = %err, "request failed");
                AuthClientError::from_reqwest(err)
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(AuthClientError::from_reqwest)?;

        if !status.is_success() {
            warn!(%url, %status, "server rejected request");
            return Err(AuthClientError::from_http_status(status, &text));
        }

        debug!(%url, %status, "request succeeded");
        Ok(payload_from_text(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_normalizes_slashes() {
        let client =
            ApiClient::new(ClientConfig::new("http://localhost:8083/api/v1/")).expect("client");
        let full = client.endpoint("/auth/login");
        assert_eq!(full, "http://localhost:8083/api/v1/auth/login");
    }

    #[test]
    fn new_rejects_invalid_config() {
        let err = ApiClient::new(ClientConfig::new("localhost:8083"));
        assert!(matches!(err, Err(AuthClientError::Config(_))));
    }

}
