use std::time::Duration;

use auth_core::{Route, SubmitOutcome, Toast};
use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::toasts::ToastQueue;

const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy)]
pub(crate) struct AppState {
    pub(crate) route: RwSignal<Route>,
    pub(crate) toasts: RwSignal<ToastQueue>,
}

impl AppState {
    pub(crate) fn new() -> Self {
        Self {
            route: RwSignal::new(current_route()),
            toasts: RwSignal::new(ToastQueue::default()),
        }
    }

    pub(crate) fn navigate(&self, route: Route) {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            if history
                .push_state_with_url(&JsValue::NULL, "", Some(route.path()))
                .is_err()
            {
                web_sys::console::warn_1(&"failed to push history state".into());
            }
        }
        self.route.set(route);
    }

    pub(crate) fn sync_route(&self) {
        self.route.set(current_route());
    }

    pub(crate) fn notify(&self, toast: Toast) {
        let toasts = self.toasts;
        let Some(id) = toasts.try_update(|queue| queue.push(toast)) else {
            return;
        };
        set_timeout(move || toasts.update(|queue| queue.dismiss(id)), TOAST_TTL);
    }

    pub(crate) fn dismiss(&self, id: u64) {
        self.toasts.update(|queue| queue.dismiss(id));
    }

    pub(crate) fn apply(&self, outcome: SubmitOutcome) {
        self.notify(outcome.toast);
        if let Some(route) = outcome.navigate {
            self.navigate(route);
        }
    }
}

fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or_default()
}
