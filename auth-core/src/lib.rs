//! Платформенно-независимое ядро auth-app.
//!
//! Содержит модели форм (`LoginData`, `RegisterData`), их валидацию,
//! контроллеры форм входа и регистрации и маршруты SPA. Крейт не выполняет
//! I/O: транспорт подставляется через трейт [`AuthApi`], поэтому одни и те же
//! контроллеры используются и в браузере (`auth-wasm`), и в CLI.
#![warn(missing_docs)]

mod form;
mod models;
mod route;

pub use form::{
    AuthApi, FailureMessage, GENERIC_LOGIN_ERROR, LoginForm, SignupForm, SubmitOutcome, Toast,
    ToastKind, message_from_payload, payload_from_text,
};
pub use models::{Field, FieldError, LoginData, RegisterData};
pub use route::Route;
