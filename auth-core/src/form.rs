use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::models::{LoginData, RegisterData};
use crate::route::Route;

/// Текст inline-ошибки входа, если сервер не прислал `message`.
pub const GENERIC_LOGIN_ERROR: &str = "Something went wrong. Please try again.";

const REGISTER_SUCCESS: &str = "Registration successful! Please log in.";
const REGISTER_FAILURE: &str = "Registration failed. Please try again.";
const LOGIN_SUCCESS: &str = "Login successful!";
const LOGIN_FAILURE: &str = "Login failed. Please try again.";

/// Ошибка транспорта, из которой можно достать сообщение сервера.
pub trait FailureMessage {
    /// Значение поля `message` из тела ответа сервера, если оно есть.
    fn server_message(&self) -> Option<String>;
}

/// Достаёт поле `message` из JSON-тела ошибки в том виде, в каком его прислал
/// сервер. Пустое или состоящее из пробелов сообщение считается отсутствующим.
pub fn message_from_payload(payload: &Value) -> Option<String> {
    payload
        .get("message")
        .and_then(Value::as_str)
        .filter(|message| !message.trim().is_empty())
        .map(str::to_string)
}

/// Разбирает тело ответа: JSON, если разбирается, иначе строка как есть.
/// Пустое тело превращается в `null`. Не-JSON тело не делает успешный
/// ответ ошибкой.
pub fn payload_from_text(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// Вызовы auth API, которые используют контроллеры форм.
///
/// Реализации не перехватывают и не преобразуют ошибки: всё, что вернул
/// транспорт, уходит вызывающему как есть.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Ошибка транспорта.
    type Error: FailureMessage + std::fmt::Display + Send;

    /// `POST /auth/register`.
    async fn register_user(&self, data: &RegisterData) -> Result<Value, Self::Error>;

    /// `POST /auth/login`.
    async fn login_user(&self, data: &LoginData) -> Result<Value, Self::Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Вид toast-уведомления.
pub enum ToastKind {
    /// Успех.
    Success,
    /// Ошибка.
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Короткое неблокирующее уведомление для пользователя.
pub struct Toast {
    /// Вид уведомления.
    pub kind: ToastKind,
    /// Текст.
    pub message: String,
}

impl Toast {
    /// Уведомление об успехе.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    /// Уведомление об ошибке.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Итог одной отправки формы.
pub struct SubmitOutcome {
    /// Уведомление, которое нужно показать.
    pub toast: Toast,
    /// Страница, на которую нужно перейти.
    pub navigate: Option<Route>,
    /// Был ли отправлен запрос (false, если форма не прошла проверку).
    pub request_sent: bool,
}

impl SubmitOutcome {
    fn rejected(toast: Toast) -> Self {
        Self {
            toast,
            navigate: None,
            request_sent: false,
        }
    }
}

/// Состояние страницы регистрации.
///
/// Отправка идёт в две фазы: [`SignupForm::begin_submit`] проверяет поля и
/// включает `loading`, [`SignupForm::finish_submit`] применяет результат
/// запроса и выключает `loading`. Браузер вызывает фазы вокруг `spawn_local`,
/// остальные клиенты используют [`SignupForm::submit`].
#[derive(Debug, Clone)]
pub struct SignupForm<E> {
    /// Текущие значения полей.
    pub data: RegisterData,
    loading: bool,
    error: Option<E>,
}

impl<E> Default for SignupForm<E> {
    fn default() -> Self {
        Self {
            data: RegisterData::default(),
            loading: false,
            error: None,
        }
    }
}

impl<E: FailureMessage + std::fmt::Display> SignupForm<E> {
    /// Пустая форма.
    pub fn new() -> Self {
        Self::default()
    }

    /// Идёт ли сейчас запрос.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Ошибка последней неудачной отправки.
    pub fn error(&self) -> Option<&E> {
        self.error.as_ref()
    }

    /// Проверяет поля и переводит форму в состояние загрузки.
    ///
    /// При пустом поле возвращает toast с ошибкой; запрос отправлять нельзя.
    pub fn begin_submit(&mut self) -> Result<RegisterData, Toast> {
        if let Err(err) = self.data.check_required() {
            debug!(error = %err, "signup form rejected");
            return Err(Toast::error(err.to_string()));
        }

        self.loading = true;
        self.error = None;
        Ok(self.data.clone())
    }

    /// Применяет результат запроса регистрации.
    pub fn finish_submit(&mut self, result: Result<Value, E>) -> SubmitOutcome {
        self.loading = false;

        match result {
            Ok(_) => {
                info!("registration succeeded");
                self.data = RegisterData::default();
                SubmitOutcome {
                    toast: Toast::success(REGISTER_SUCCESS),
                    navigate: Some(Route::Login),
                    request_sent: true,
                }
            }
            Err(err) => {
                warn!(error = %err, "registration failed");
                self.error = Some(err);
                SubmitOutcome {
                    toast: Toast::error(REGISTER_FAILURE),
                    navigate: None,
                    request_sent: true,
                }
            }
        }
    }

    /// Полный цикл отправки через `api`.
    pub async fn submit<A>(&mut self, api: &A) -> SubmitOutcome
    where
        A: AuthApi<Error = E> + ?Sized,
    {
        let payload = match self.begin_submit() {
            Ok(payload) => payload,
            Err(toast) => return SubmitOutcome::rejected(toast),
        };

        let result = api.register_user(&payload).await;
        self.finish_submit(result)
    }
}

/// Состояние страницы входа. Та же двухфазная схема, что у [`SignupForm`],
/// плюс inline-сообщение об ошибке.
#[derive(Debug, Clone)]
pub struct LoginForm<E> {
    /// Текущие значения полей.
    pub data: LoginData,
    loading: bool,
    error: Option<E>,
}

impl<E> Default for LoginForm<E> {
    fn default() -> Self {
        Self {
            data: LoginData::default(),
            loading: false,
            error: None,
        }
    }
}

impl<E: FailureMessage + std::fmt::Display> LoginForm<E> {
    /// Пустая форма.
    pub fn new() -> Self {
        Self::default()
    }

    /// Идёт ли сейчас запрос.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Ошибка последней неудачной отправки.
    pub fn error(&self) -> Option<&E> {
        self.error.as_ref()
    }

    /// Текст inline-алерта: `message` из ответа сервера или общий текст.
    /// `None`, пока ошибки не было.
    pub fn alert_message(&self) -> Option<String> {
        self.error.as_ref().map(|err| {
            err.server_message()
                .unwrap_or_else(|| GENERIC_LOGIN_ERROR.to_string())
        })
    }

    /// Проверяет поля и переводит форму в состояние загрузки.
    pub fn begin_submit(&mut self) -> Result<LoginData, Toast> {
        if let Err(err) = self.data.check_required() {
            debug!(error = %err, "login form rejected");
            return Err(Toast::error(err.to_string()));
        }

        self.loading = true;
        self.error = None;
        Ok(self.data.clone())
    }

    /// Применяет результат запроса входа.
    pub fn finish_submit(&mut self, result: Result<Value, E>) -> SubmitOutcome {
        self.loading = false;

        match result {
            Ok(_) => {
                info!("login succeeded");
                SubmitOutcome {
                    toast: Toast::success(LOGIN_SUCCESS),
                    navigate: Some(Route::Dashboard),
                    request_sent: true,
                }
            }
            Err(err) => {
                warn!(error = %err, "login failed");
                self.error = Some(err);
                SubmitOutcome {
                    toast: Toast::error(LOGIN_FAILURE),
                    navigate: None,
                    request_sent: true,
                }
            }
        }
    }

    /// Полный цикл отправки через `api`.
    pub async fn submit<A>(&mut self, api: &A) -> SubmitOutcome
    where
        A: AuthApi<Error = E> + ?Sized,
    {
        let payload = match self.begin_submit() {
            Ok(payload) => payload,
            Err(toast) => return SubmitOutcome::rejected(toast),
        };

        let result = api.login_user(&payload).await;
        self.finish_submit(result)
    }
}
