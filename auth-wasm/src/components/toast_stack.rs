use auth_core::ToastKind;
use leptos::prelude::*;

use crate::state::AppState;

#[component]
pub(crate) fn ToastStack(state: AppState) -> impl IntoView {
    let items = move || state.toasts.with(|queue| queue.items().to_vec());

    view! {
        <div class="toasts">
            <For
                each=items
                key=|(id, _)| *id
                children=move |(id, toast)| {
                    let class = match toast.kind {
                        ToastKind::Success => "toast success",
                        ToastKind::Error => "toast error",
                    };
                    view! {
                        <div class=class on:click=move |_| state.dismiss(id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
