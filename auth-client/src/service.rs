use async_trait::async_trait;
use auth_core::{AuthApi, LoginData, RegisterData};
use serde_json::Value;

use crate::error::{AuthClientError, AuthClientResult};
use crate::http_client::ApiClient;

/// Путь регистрации относительно базового URL.
pub const REGISTER_PATH: &str = "/auth/register";
/// Путь входа относительно базового URL.
pub const LOGIN_PATH: &str = "/auth/login";

/// Регистрирует пользователя: `POST {base}/auth/register` с
/// `{name, email, password}`. Возвращает разобранное тело ответа.
pub async fn register_user(client: &ApiClient, data: &RegisterData) -> AuthClientResult<Value> {
    client.post_json(REGISTER_PATH, data).await
}

/// Выполняет вход: `POST {base}/auth/login` с `{email, password}`.
pub async fn login_user(client: &ApiClient, data: &LoginData) -> AuthClientResult<Value> {
    client.post_json(LOGIN_PATH, data).await
}

#[async_trait]
impl AuthApi for ApiClient {
    type Error = AuthClientError;

    async fn register_user(&self, data: &RegisterData) -> Result<Value, Self::Error> {
        register_user(self, data).await
    }

    async fn login_user(&self, data: &LoginData) -> Result<Value, Self::Error> {
        login_user(self, data).await
    }
}
