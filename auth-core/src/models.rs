use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

/// Поле формы, которое может не пройти проверку.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Имя пользователя.
    Name,
    /// Email.
    Email,
    /// Пароль.
    Password,
}

impl Field {
    fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Password => "Password",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
/// Ошибка клиентской проверки обязательных полей.
pub enum FieldError {
    /// Поле пустое или состоит только из пробелов.
    #[error("{0} is required")]
    Required(Field),
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

// validator складывает ошибки в HashMap, поэтому порядок восстанавливаем сами.
fn first_missing(errors: &ValidationErrors, order: &[Field]) -> Option<Field> {
    let fields = errors.field_errors();
    order
        .iter()
        .copied()
        .find(|field| fields.contains_key(field.key()))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
/// Данные формы входа. Живут ровно одну отправку.
pub struct LoginData {
    /// Email.
    #[validate(custom(function = "not_blank"))]
    pub email: String,
    /// Пароль.
    #[validate(custom(function = "not_blank"))]
    pub password: String,
}

impl LoginData {
    /// Проверяет, что все поля заполнены. Возвращает первое пустое поле
    /// в порядке email, password.
    pub fn check_required(&self) -> Result<(), FieldError> {
        match self.validate() {
            Ok(()) => Ok(()),
            Err(errors) => {
                let field = first_missing(&errors, &[Field::Email, Field::Password])
                    .unwrap_or(Field::Email);
                Err(FieldError::Required(field))
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
/// Данные формы регистрации.
pub struct RegisterData {
    /// Отображаемое имя.
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    /// Email.
    #[validate(custom(function = "not_blank"))]
    pub email: String,
    /// Пароль.
    #[validate(custom(function = "not_blank"))]
    pub password: String,
}

impl RegisterData {
    /// Проверяет, что все поля заполнены. Возвращает первое пустое поле
    /// в порядке name, email, password.
    pub fn check_required(&self) -> Result<(), FieldError> {
        match self.validate() {
            Ok(()) => Ok(()),
            Err(errors) => {
                let field = first_missing(&errors, &[Field::Name, Field::Email, Field::Password])
                    .unwrap_or(Field::Name);
                Err(FieldError::Required(field))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(name: &str, email: &str, password: &str) -> RegisterData {
        RegisterData {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn register_data_reports_first_blank_field_in_order() {
        let data = register("", "", "");
        assert_eq!(data.check_required(), Err(FieldError::Required(Field::Name)));

        let data = register("Ann", "   ", "");
        assert_eq!(data.check_required(), Err(FieldError::Required(Field::Email)));

        let data = register("Ann", "ann@example.com", "\t");
        assert_eq!(
            data.check_required(),
            Err(FieldError::Required(Field::Password))
        );
    }

    #[test]
    fn register_data_accepts_filled_fields() {
        let data = register("Ann", "ann@example.com", "secret");
        assert!(data.check_required().is_ok());
    }

    #[test]
    fn login_data_requires_email_before_password() {
        let data = LoginData {
            email: String::new(),
            password: String::new(),
        };
        assert_eq!(data.check_required(), Err(FieldError::Required(Field::Email)));

        let data = LoginData {
            email: "ann@example.com".to_string(),
            password: " ".to_string(),
        };
        assert_eq!(
            data.check_required(),
            Err(FieldError::Required(Field::Password))
        );
    }

    #[test]
    fn field_error_message_names_the_field() {
        assert_eq!(
            FieldError::Required(Field::Email).to_string(),
            "Email is required"
        );
    }

    #[test]
    fn register_data_serializes_wire_field_names() {
        let data = register("Ann", "ann@example.com", "secret");
        let json = serde_json::to_value(&data).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"name": "Ann", "email": "ann@example.com", "password": "secret"})
        );
    }
}
