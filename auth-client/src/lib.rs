//! HTTP-клиент для auth API.
//!
//! - [`ApiClient`] — преднастроенный `reqwest`-клиент: базовый URL, JSON,
//!   cookie store и фиксированный таймаут;
//! - [`register_user`] / [`login_user`] — по одному POST-запросу на вызов,
//!   ошибки возвращаются вызывающему без изменений.
//!
//! `ApiClient` реализует [`auth_core::AuthApi`], поэтому его можно передавать
//! прямо в контроллеры форм из `auth-core`.
#![warn(missing_docs)]

mod config;
mod error;
mod http_client;
mod service;

pub use config::{ClientConfig, ConfigError, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{AuthClientError, AuthClientResult};
pub use http_client::ApiClient;
pub use service::{LOGIN_PATH, REGISTER_PATH, login_user, register_user};

pub use reqwest::StatusCode;
