use auth_core::Route;
use leptos::prelude::*;

use crate::state::AppState;

#[component]
pub(crate) fn Navbar(state: AppState) -> impl IntoView {
    view! {
        <nav class="navbar">
            <span class="brand" on:click=move |_| state.navigate(Route::Home)>
                "Auth App"
            </span>
            <div class="links">
                <span class="link" on:click=move |_| state.navigate(Route::Home)>"Home"</span>
                <button on:click=move |_| state.navigate(Route::Login)>"Login"</button>
                <button on:click=move |_| state.navigate(Route::Signup)>"Signup"</button>
            </div>
        </nav>
    }
}
