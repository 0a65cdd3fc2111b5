mod logging;

use std::process;

use anyhow::{Context, Result, anyhow};
use auth_client::{ApiClient, AuthClientError, ClientConfig, login_user, register_user};
use auth_core::{
    FailureMessage, LoginData, LoginForm, RegisterData, SignupForm, SubmitOutcome, Toast,
    ToastKind,
};
use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Debug, Parser)]
#[command(name = "auth-cli", version, about = "CLI клиент для auth API")]
struct Cli {
    /// Базовый URL API. По умолчанию `AUTH_API_BASE_URL` или
    /// `http://localhost:8083/api/v1`.
    #[arg(long, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Регистрация пользователя.
    Register {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
    },
    /// Вход пользователя.
    Login {
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
    },
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Ошибка: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init_logging()?;

    let cli = Cli::parse();
    let config = resolve_config(cli.server)?;
    let client = ApiClient::new(config).context("не удалось создать HTTP-клиент")?;

    match cli.command {
        Command::Register {
            name,
            email,
            password,
        } => {
            let mut form: SignupForm<AuthClientError> = SignupForm::new();
            form.data = RegisterData {
                name,
                email,
                password,
            };

            // Поля проверяются до любого обращения к сети.
            let payload = form.begin_submit().map_err(rejected)?;
            let result = register_user(&client, &payload).await;
            print_body(&result)?;

            let outcome = form.finish_submit(result);
            report(&outcome);
            match form.error() {
                Some(err) => Err(anyhow!(describe_error(err))),
                None => Ok(()),
            }
        }
        Command::Login { email, password } => {
            let mut form: LoginForm<AuthClientError> = LoginForm::new();
            form.data = LoginData { email, password };

            let payload = form.begin_submit().map_err(rejected)?;
            let result = login_user(&client, &payload).await;
            print_body(&result)?;

            let outcome = form.finish_submit(result);
            report(&outcome);
            match (form.error(), form.alert_message()) {
                (Some(err), Some(alert)) => Err(anyhow!("{alert} ({})", describe_error(err))),
                _ => Ok(()),
            }
        }
    }
}

fn resolve_config(server: Option<String>) -> Result<ClientConfig> {
    let mut config = ClientConfig::from_env().context("некорректная конфигурация клиента")?;
    if let Some(server) = server {
        config.base_url = normalize_server(server);
        config
            .validate()
            .context("некорректный адрес сервера в --server")?;
    }
    Ok(config)
}

fn normalize_server(server: String) -> String {
    if server.starts_with("http://") || server.starts_with("https://") {
        return server;
    }

    format!("http://{server}")
}

fn rejected(toast: Toast) -> anyhow::Error {
    print_toast(&toast);
    anyhow!("форма не отправлена: {}", toast.message)
}

fn describe_error(err: &AuthClientError) -> String {
    match err {
        AuthClientError::Timeout => "сервер не ответил вовремя".to_string(),
        AuthClientError::Http(err) => format!("ошибка HTTP: {err}"),
        AuthClientError::Server { status, .. } => match err.server_message() {
            Some(message) => format!("сервер вернул {status}: {message}"),
            None => format!("сервер вернул {status}"),
        },
        AuthClientError::Config(err) => format!("некорректная конфигурация: {err}"),
    }
}

fn print_body(result: &Result<Value, AuthClientError>) -> Result<()> {
    if let Ok(body) = result {
        let pretty = serde_json::to_string_pretty(body).context("не удалось вывести ответ")?;
        println!("{pretty}");
    }
    Ok(())
}

fn print_toast(toast: &Toast) {
    match toast.kind {
        ToastKind::Success => println!("[ok] {}", toast.message),
        ToastKind::Error => eprintln!("[error] {}", toast.message),
    }
}

fn report(outcome: &SubmitOutcome) {
    print_toast(&outcome.toast);
    if let Some(route) = outcome.navigate {
        println!("next: {route}");
    }
}
