//! Toast Host Component
//!
//! Renders the notifier's transient message stack.

use leptos::prelude::*;

use crate::notify::{use_notifier, ToastKind};

/// Toast stack overlay; clicking a toast dismisses it early
#[component]
pub fn ToastHost() -> impl IntoView {
    let notify = use_notifier();
    let toasts = notify.toasts();

    view! {
        <div class="toast-host">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                    };
                    view! {
                        <div class=class on:click=move |_| notify.dismiss(id)>
                            {toast.text.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
