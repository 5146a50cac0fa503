//! Owner list page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Owner;
use crate::state::owners::OwnerListState;
use crate::state::toasts::ToastState;

/// `/owners`: every owner in a table.
#[component]
pub fn OwnerListPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let owners = RwSignal::new(OwnerListState { loading: true, ..OwnerListState::default() });

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::list_owners().await {
                Ok(items) => owners.set(OwnerListState { items, loading: false }),
                Err(e) => {
                    leptos::logging::warn!("owner list failed: {e}");
                    owners.update(|s| s.loading = false);
                    toasts.update(|t| {
                        t.api_error("Could Not Fetch Owners", &e);
                    });
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = toasts;
    }

    view! {
        <section class="owners">
            <header class="page__header">
                <h1>"Owners"</h1>
                <A href="/owners/create" attr:class="btn btn--primary">
                    "Create owner"
                </A>
            </header>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Description"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || owners.with(|s| s.items.clone())
                        key=|owner| owner.id
                        children=move |owner: Owner| {
                            view! {
                                <tr>
                                    <td>{owner.full_name()}</td>
                                    <td>{owner.description.clone().unwrap_or_default()}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <Show when=move || owners.with(|s| !s.loading && s.items.is_empty())>
                <p class="empty">"No owners yet."</p>
            </Show>
        </section>
    }
}
