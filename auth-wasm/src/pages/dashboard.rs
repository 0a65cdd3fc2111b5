use leptos::prelude::*;

#[component]
pub(crate) fn DashboardPage() -> impl IntoView {
    view! {
        <section class="page">
            <div class="card">
                <h1>"Dashboard"</h1>
                <p>"You are signed in."</p>
            </div>
        </section>
    }
}
