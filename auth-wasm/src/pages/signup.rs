use auth_core::{Route, SignupForm};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::error::ApiError;
use crate::state::AppState;

#[component]
pub(crate) fn SignupPage(state: AppState) -> impl IntoView {
    let form = RwSignal::new(SignupForm::<ApiError>::new());

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
            let result = api::register_user(&payload).await;
            if let Some(outcome) = form.try_update(|f| f.finish_submit(result)) {
                state.apply(outcome);
            }
        });
    };

    let loading = move || form.with(|f| f.loading());

    view! {
        <section class="page">
            <div class="card">
                <h1>"Create Account"</h1>
                <p>"Sign up to start securing your application"</p>

                <form on:submit=on_submit>
                    <label for="name">"Name"</label>
                    <input
                        id="name"
                        type="text"
                        name="name"
                        placeholder="John Doe"
                        prop:value=move || form.with(|f| f.data.name.clone())
                        on:input=move |ev| form.update(|f| f.data.name = event_target_value(&ev))
                    />

                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        name="email"
                        placeholder="you@example.com"
                        prop:value=move || form.with(|f| f.data.email.clone())
                        on:input=move |ev| form.update(|f| f.data.email = event_target_value(&ev))
                    />

                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        name="password"
                        placeholder="••••••••"
                        prop:value=move || form.with(|f| f.data.password.clone())
                        on:input=move |ev| form.update(|f| f.data.password = event_target_value(&ev))
                    />

                    <button class="primary" type="submit" disabled=loading>
                        {move || if loading() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>

                <p>
                    "Already have an account? "
                    <span class="link" on:click=move |_| state.navigate(Route::Login)>"Sign in"</span>
                </p>
            </div>
        </section>
    }
}
