use auth_core::Route;
use leptos::prelude::*;

use crate::state::AppState;

const FEATURES: [&str; 3] = [
    "Encrypted JWT tokens",
    "Secure refresh token rotation",
    "CSRF & XSS protection",
];

#[component]
pub(crate) fn HomePage(state: AppState) -> impl IntoView {
    view! {
        <section class="page">
            <div class="card">
                <h1>"Secure authentication for modern apps"</h1>
                <p>"Sign up once and keep your sessions protected end to end."</p>
                <ul class="features">
                    {FEATURES.iter().map(|feature| view! { <li>"✔ " {*feature}</li> }).collect_view()}
                </ul>
                <button class="primary" on:click=move |_| state.navigate(Route::Signup)>
                    "Get started"
                </button>
                <p>
                    <span class="link" on:click=move |_| state.navigate(Route::About)>"About"</span>
                    " · "
                    <span class="link" on:click=move |_| state.navigate(Route::Services)>"Services"</span>
                </p>
            </div>
        </section>
    }
}

#[component]
pub(crate) fn AboutPage() -> impl IntoView {
    view! {
        <section class="page">
            <div class="card">
                <h1>"About"</h1>
                <p>"Auth App is a small front end for a token based authentication service."</p>
            </div>
        </section>
    }
}

#[component]
pub(crate) fn ServicesPage() -> impl IntoView {
    view! {
        <section class="page">
            <div class="card">
                <h1>"Services"</h1>
                <p>"Account registration, password login and cookie based sessions."</p>
            </div>
        </section>
    }
}
