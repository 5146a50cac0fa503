//! Owner create page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::owners::OwnerForm;
use crate::state::toasts::ToastState;

/// `/owners/create`.
#[component]
pub fn OwnerCreatePage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(OwnerForm::default());
    let busy = RwSignal::new(false);
    let finished = RwSignal::new(false);

    Effect::new(move || {
        if finished.get() {
            navigate("/owners", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let payload = form.with_untracked(OwnerForm::to_create);
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            use crate::state::owners::creation_error_message;

            leptos::task::spawn_local(async move {
                let result = crate::net::api::create_owner(&payload).await;
                busy.set(false);
                match result {
                    Ok(owner) => {
                        toasts.update(|t| {
                            t.success("Owner Created", format!("Owner {} successfully created.", owner.full_name()));
                        });
                        finished.set(true);
                    }
                    Err(e) => {
                        leptos::logging::warn!("creating owner failed: {e}");
                        toasts.update(|t| {
                            t.error("Could Not Create Owner", creation_error_message(&e));
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, toasts, finished);
        }
    };

    view! {
        <section class="owner-form">
            <h1>"Create New Owner"</h1>
            <form class="form" on:submit=on_submit>
                <label class="form__field">
                    "First name"
                    <input
                        type="text"
                        required=true
                        prop:value=move || form.with(|f| f.first_name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.first_name = value);
                        }
                    />
                </label>
                <label class="form__field">
                    "Last name"
                    <input
                        type="text"
                        required=true
                        prop:value=move || form.with(|f| f.last_name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.last_name = value);
                        }
                    />
                </label>
                <label class="form__field">
                    "Description"
                    <textarea
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.description = value);
                        }
                    ></textarea>
                </label>
                <div class="form__actions">
                    <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                        "Create"
                    </button>
                </div>
            </form>
        </section>
    }
}
