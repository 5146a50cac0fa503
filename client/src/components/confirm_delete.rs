//! Modal confirmation before a destructive action.

use leptos::prelude::*;

/// Asks whether `subject` should really be deleted.
#[component]
pub fn ConfirmDeleteDialog(
    #[prop(into)] subject: Signal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete " {move || subject.get()}</h2>
                <p class="dialog__danger">
                    "Do you really want to delete " {move || subject.get()} "? This cannot be undone."
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
