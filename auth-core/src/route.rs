/// Страница SPA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// Главная (лендинг).
    #[default]
    Home,
    /// О проекте.
    About,
    /// Услуги.
    Services,
    /// Форма входа.
    Login,
    /// Форма регистрации.
    Signup,
    /// Личный кабинет.
    Dashboard,
}

impl Route {
    /// Путь страницы в адресной строке.
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Services => "/services",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Dashboard => "/dashboard",
        }
    }

    /// Разбирает путь из адресной строки. Query/fragment и завершающий `/`
    /// игнорируются, неизвестные пути ведут на главную.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        match path.trim_end_matches('/') {
            "/about" => Self::About,
            "/services" => Self::Services,
            "/login" => Self::Login,
            "/signup" => Self::Signup,
            "/dashboard" => Self::Dashboard,
            _ => Self::Home,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}
