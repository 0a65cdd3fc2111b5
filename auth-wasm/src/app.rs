use auth_core::Route;
use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::toast_stack::ToastStack;
use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::pages::marketing::{AboutPage, HomePage, ServicesPage};
use crate::pages::signup::SignupPage;
use crate::state::AppState;

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();

    // Кнопки «назад/вперёд» браузера.
    let _popstate = window_event_listener(leptos::ev::popstate, move |_| state.sync_route());

    let page = move || match state.route.get() {
        Route::Home => view! { <HomePage state=state /> }.into_any(),
        Route::About => view! { <AboutPage /> }.into_any(),
        Route::Services => view! { <ServicesPage /> }.into_any(),
        Route::Login => view! { <LoginPage state=state /> }.into_any(),
        Route::Signup => view! { <SignupPage state=state /> }.into_any(),
        Route::Dashboard => view! { <DashboardPage /> }.into_any(),
    };

    view! {
        <Navbar state=state />
        <ToastStack state=state />
        <main>{page}</main>
    }
}
