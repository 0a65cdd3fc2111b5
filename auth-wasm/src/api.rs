use std::time::Duration;

use auth_core::{LoginData, RegisterData, payload_from_text};
use gloo_net::http::Request;
use leptos::prelude::set_timeout_with_handle;
use serde::Serialize;
use serde_json::Value;
use web_sys::{AbortController, RequestCredentials};

use crate::error::ApiError;

const API_BASE_URL: &str = match option_env!("AUTH_API_BASE_URL") {
    Some(value) => value,
    None => "http://localhost:8083/api/v1",
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

fn endpoint(path: &str) -> String {
    format!(
        "{}/{}",
        API_BASE_URL.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

async fn read_response(request: Request) -> Result<(u16, String), gloo_net::Error> {
    let response = request.send().await?;
    let status = response.status();
    let text = response.text().await?;
    Ok((status, text))
}

// fetch не умеет таймаут сам по себе: по истечении времени обрываем запрос
// через AbortController.
async fn post_json<T: Serialize>(path: &str, body: &T) -> Result<Value, ApiError> {
    let controller = AbortController::new()
        .map_err(|_| ApiError::Network("fetch abort is not supported".to_string()))?;
    let signal = controller.signal();

    let request = Request::post(&endpoint(path))
        .credentials(RequestCredentials::Include)
        .abort_signal(Some(&signal))
        .json(body)
        .map_err(|err| ApiError::Network(err.to_string()))?;

    let timer = set_timeout_with_handle(move || controller.abort(), REQUEST_TIMEOUT)
        .map_err(|_| ApiError::Network("failed to arm request timeout".to_string()))?;

    let result = read_response(request).await;
    timer.clear();

    let (status, text) = result.map_err(|err| {
        if signal.aborted() {
            ApiError::Timeout
        } else {
            ApiError::Network(err.to_string())
        }
    })?;

    if !(200..300).contains(&status) {
        return Err(ApiError::from_status(status, &text));
    }
    Ok(payload_from_text(&text))
}

pub(crate) async fn register_user(data: &RegisterData) -> Result<Value, ApiError> {
    post_json("/auth/register", data).await
}

pub(crate) async fn login_user(data: &LoginData) -> Result<Value, ApiError> {
    post_json("/auth/login", data).await
}
