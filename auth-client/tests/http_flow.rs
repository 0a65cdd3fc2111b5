use std::net::SocketAddr;
use std::time::Duration;

use auth_client::{ApiClient, AuthClientError, ClientConfig, login_user, register_user};
use auth_core::{LoginData, LoginForm, RegisterData, Route, SignupForm};
use axum::Router;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Json;
use serde_json::{Value, json};
use tokio::net::TcpListener;

const SESSION_COOKIE: &str = "session=abc123";

async fn register(headers: HeaderMap, Json(body): Json<Value>) -> Response {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();

    match body["name"].as_str().unwrap_or_default() {
        "slow" => {
            tokio::time::sleep(Duration::from_secs(2)).await;
        }
        "empty" => return StatusCode::NO_CONTENT.into_response(),
        "plain" => {
            return (StatusCode::CREATED, "User registered successfully").into_response();
        }
        "crash" => return (StatusCode::INTERNAL_SERVER_ERROR, "oops").into_response(),
        _ => {}
    }

    if body["email"] == "taken@example.com" {
        return (
            StatusCode::CONFLICT,
            Json(json!({"message": "Email already registered"})),
        )
            .into_response();
    }

    (
        StatusCode::CREATED,
        Json(json!({
            "id": "u-1",
            "name": body["name"],
            "email": body["email"],
            "content_type": content_type,
        })),
    )
        .into_response()
}

async fn login(headers: HeaderMap, Json(body): Json<Value>) -> Response {
    let cookie_seen = headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.contains(SESSION_COOKIE));

    if body["password"] != "secret" {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "Invalid credentials"})),
        )
            .into_response();
    }

    (
        [(header::SET_COOKIE, format!("{SESSION_COOKIE}; Path=/; HttpOnly"))],
        Json(json!({"email": body["email"], "cookie_seen": cookie_seen})),
    )
        .into_response()
}

async fn start_server() -> String {
    let app = Router::new()
        .route("/api/v1/auth/register", post(register))
        .route("/api/v1/auth/login", post(login));

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0))
        .await
        .expect("bind test listener");
    let addr: SocketAddr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, app).await {
            eprintln!("test server error: {err}");
        }
    });

    format!("http://{}:{}/api/v1", addr.ip(), addr.port())
}

fn client(base_url: &str) -> ApiClient {
    ApiClient::new(ClientConfig::new(base_url)).expect("client must build")
}

fn register_data(name: &str, email: &str) -> RegisterData {
    RegisterData {
        name: name.to_string(),
        email: email.to_string(),
        password: "secret".to_string(),
    }
}

fn login_data(password: &str) -> LoginData {
    LoginData {
        email: "ann@example.com".to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn register_posts_json_and_returns_body() {
    let base_url = start_server().await;
    let client = client(&base_url);

    let body = register_user(&client, &register_data("Ann", "ann@example.com"))
        .await
        .expect("register must succeed");

    assert_eq!(body["id"], "u-1");
    assert_eq!(body["name"], "Ann");
    assert_eq!(body["email"], "ann@example.com");
    assert_eq!(body["content_type"], "application/json");
}

#[tokio::test]
async fn register_conflict_carries_server_payload() {
    let base_url = start_server().await;
    let client = client(&base_url);

    let err = register_user(&client, &register_data("Ann", "taken@example.com"))
        .await
        .expect_err("register must fail");

    match err {
        AuthClientError::Server { status, payload } => {
            assert_eq!(status.as_u16(), 409);
            assert_eq!(payload, json!({"message": "Email already registered"}));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn empty_success_body_is_null() {
    let base_url = start_server().await;
    let client = client(&base_url);

    let body = register_user(&client, &register_data("empty", "e@example.com"))
        .await
        .expect("register must succeed");
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn plain_text_success_body_is_returned_as_string() {
    let base_url = start_server().await;
    let client = client(&base_url);

    let body = register_user(&client, &register_data("plain", "p@example.com"))
        .await
        .expect("register must succeed");
    assert_eq!(body, json!("User registered successfully"));
}

#[tokio::test]
async fn signup_form_treats_plain_text_success_as_success() {
    let base_url = start_server().await;
    let client = client(&base_url);

    let mut form: SignupForm<AuthClientError> = SignupForm::new();
    form.data = register_data("plain", "p@example.com");

    let outcome = form.submit(&client).await;

    assert_eq!(outcome.navigate, Some(Route::Login));
    assert_eq!(form.data, RegisterData::default());
    assert!(form.error().is_none());
}

#[tokio::test]
async fn text_error_body_is_kept_as_string() {
    let base_url = start_server().await;
    let client = client(&base_url);

    let err = register_user(&client, &register_data("crash", "c@example.com"))
        .await
        .expect_err("register must fail");
    match err {
        AuthClientError::Server { status, payload } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(payload, json!("oops"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn login_cookie_is_sent_on_next_request() {
    let base_url = start_server().await;
    let client = client(&base_url);

    let first = login_user(&client, &login_data("secret"))
        .await
        .expect("login must succeed");
    assert_eq!(first["cookie_seen"], false);

    let second = login_user(&client, &login_data("secret"))
        .await
        .expect("login must succeed");
    assert_eq!(second["cookie_seen"], true);
}

#[tokio::test]
async fn slow_server_times_out() {
    let base_url = start_server().await;
    let client = ApiClient::new(
        ClientConfig::new(&base_url).with_timeout(Duration::from_millis(200)),
    )
    .expect("client must build");

    let err = register_user(&client, &register_data("slow", "s@example.com"))
        .await
        .expect_err("request must time out");
    assert!(matches!(err, AuthClientError::Timeout), "got {err:?}");
}

#[tokio::test]
async fn unreachable_server_is_http_error() {
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0))
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let client = client(&format!("http://{addr}/api/v1"));
    let err = login_user(&client, &login_data("secret"))
        .await
        .expect_err("connection must fail");
    assert!(matches!(err, AuthClientError::Http(_)), "got {err:?}");
}

#[tokio::test]
async fn login_form_shows_server_message_on_failure() {
    let base_url = start_server().await;
    let client = client(&base_url);

    let mut form: LoginForm<AuthClientError> = LoginForm::new();
    form.data = login_data("wrong");

    let outcome = form.submit(&client).await;

    assert!(outcome.request_sent);
    assert_eq!(outcome.navigate, None);
    assert!(!form.loading());
    assert_eq!(form.alert_message().as_deref(), Some("Invalid credentials"));
}

#[tokio::test]
async fn signup_form_navigates_to_login_on_success() {
    let base_url = start_server().await;
    let client = client(&base_url);

    let mut form: SignupForm<AuthClientError> = SignupForm::new();
    form.data = register_data("Ann", "ann@example.com");

    let outcome = form.submit(&client).await;

    assert_eq!(outcome.navigate, Some(Route::Login));
    assert_eq!(form.data, RegisterData::default());
}
