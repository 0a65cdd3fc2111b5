use auth_core::{LoginForm, Route};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::error::ApiError;
use crate::state::AppState;

#[component]
pub(crate) fn LoginPage(state: AppState) -> impl IntoView {
    let form = RwSignal::new(LoginForm::<ApiError>::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(started) = form.try_update(|f| f.begin_submit()) else {
            return;
        };
        let payload = match started {
            Ok(payload) => payload,
            Err(toast) => {
                state.notify(toast);
                return;
            }
        };

        spawn_local(async move {
            let result = api::login_user(&payload).await;
            if let Some(outcome) = form.try_update(|f| f.finish_submit(result)) {
                state.apply(outcome);
            }
        });
    };

    let loading = move || form.with(|f| f.loading());
    let alert = move || form.with(|f| f.alert_message());

    view! {
        <section class="page">
            <div class="card">
                <h1>"Welcome Back"</h1>
                <p>"Sign in to continue to your secure account"</p>

                <form on:submit=on_submit>
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || form.with(|f| f.data.email.clone())
                        on:input=move |ev| form.update(|f| f.data.email = event_target_value(&ev))
                    />

                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        placeholder="••••••••"
                        prop:value=move || form.with(|f| f.data.password.clone())
                        on:input=move |ev| form.update(|f| f.data.password = event_target_value(&ev))
                    />

                    <Show when=move || alert().is_some()>
                        <div class="alert">{move || alert().unwrap_or_default()}</div>
                    </Show>

                    <button class="primary" type="submit" disabled=loading>
                        {move || if loading() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>

                <p>
                    "Don’t have an account? "
                    <span class="link" on:click=move |_| state.navigate(Route::Signup)>"Sign up"</span>
                </p>
            </div>
        </section>
    }
}
