//! Corner stack rendering the shared toast queue.

use leptos::prelude::*;

use crate::state::toasts::{Toast, ToastKind, ToastState};

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast: Toast| view! { <ToastCard toast=toast/> }
            />
        </div>
    }
}

/// One toast; dismissed on click or after its timeout.
#[component]
fn ToastCard(toast: Toast) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let id = toast.id;

    #[cfg(feature = "hydrate")]
    {
        let timeout_ms = toast.timeout_ms;
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(timeout_ms).await;
            toasts.update(|t| t.dismiss(id));
        });
    }

    let class = match toast.kind {
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
    };
    let details = toast.details;

    view! {
        <div class=class role="status" on:click=move |_| toasts.update(|t| t.dismiss(id))>
            <strong class="toast__title">{toast.title}</strong>
            <p class="toast__message">{toast.message}</p>
            {(!details.is_empty())
                .then(|| {
                    view! {
                        <ul class="toast__details">
                            {details.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                        </ul>
                    }
                })}
        </div>
    }
}
