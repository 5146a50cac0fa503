//! Family tree page for one horse.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route id and `?gen=` decide what is fetched. Changing the generation
//! input rewrites the query, which in turn re-fetches. Deleting any node
//! re-fetches the whole tree; deleting the root leaves for the horse list.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map, use_query_map};

use crate::components::confirm_delete::ConfirmDeleteDialog;
use crate::components::family_tree::FamilyTree;
use crate::net::types::HorseFamily;
use crate::state::family::{FamilyState, generations_from_query};
use crate::state::toasts::ToastState;

/// `/horses/:id/family?gen=N`.
#[component]
pub fn HorseFamilyPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let params = use_params_map();
    let query = use_query_map();
    let navigate = use_navigate();

    let family = RwSignal::new(FamilyState::default());
    let reload = RwSignal::new(0_u32);
    let leave_to = RwSignal::new(None::<String>);

    let horse_id = Memo::new(move |_| params.read().get("id").and_then(|raw| raw.parse::<i64>().ok()));
    let generations = Memo::new(move |_| generations_from_query(query.read().get("gen").as_deref()));

    Effect::new(move || {
        reload.track();
        let Some(id) = horse_id.get() else {
            family.update(|s| {
                s.tree = None;
                s.banner_error = Some("Invalid horse id.".to_owned());
            });
            return;
        };
        load_family(id, generations.get(), family);
    });

    Effect::new(move || {
        if let Some(path) = leave_to.get() {
            leave_to.set(None);
            navigate(&path, NavigateOptions::default());
        }
    });

    let on_generations = move |ev: leptos::ev::Event| {
        let Some(id) = horse_id.get_untracked() else {
            return;
        };
        let value = generations_from_query(Some(&event_target_value(&ev)));
        leave_to.set(Some(format!("/horses/{id}/family?gen={value}")));
    };

    let tree = Memo::new(move |_| family.with(|s| s.tree.clone()));
    let on_delete = Callback::new(move |node: HorseFamily| family.update(|s| s.pending_delete = Some(node)));
    let pending_name = Signal::derive(move || {
        family.with(|s| s.pending_delete.as_ref().map(|n| n.name.clone()).unwrap_or_default())
    });
    let on_cancel = Callback::new(move |()| family.update(|s| s.pending_delete = None));
    let on_confirm = Callback::new(move |()| {
        let Some(node) = family.try_update(|s| s.pending_delete.take()).flatten() else {
            return;
        };
        let Some(root_id) = horse_id.get_untracked() else {
            return;
        };
        delete_node(root_id, node, reload, leave_to, toasts);
    });

    view! {
        <section class="family">
            <header class="page__header">
                <h1>
                    "Family tree"
                    {move || family.with(|s| s.tree.as_ref().map(|t| format!(" of {}", t.name)))}
                </h1>
                <span class="muted">
                    {move || family.with(|s| s.tree.as_ref().map(|t| format!("{} ancestor generations shown", t.generations())))}
                </span>
                <label class="family__generations">
                    "Generations"
                    <input
                        type="number"
                        min="1"
                        prop:value=move || generations.get().to_string()
                        on:change=on_generations
                    />
                </label>
            </header>

            <Show when=move || family.with(|s| s.banner_error.is_some())>
                <p class="banner banner--error">{move || family.with(|s| s.banner_error.clone().unwrap_or_default())}</p>
            </Show>
            <Show when=move || family.with(|s| s.loading && s.tree.is_none())>
                <p class="muted">"Loading..."</p>
            </Show>

            {move || {
                tree.get().map(|tree| view! { <FamilyTree tree=tree on_delete=on_delete/> })
            }}

            <Show when=move || family.with(|s| s.pending_delete.is_some())>
                <ConfirmDeleteDialog subject=pending_name on_confirm=on_confirm on_cancel=on_cancel/>
            </Show>
        </section>
    }
}

fn load_family(id: i64, generations: u32, family: RwSignal<FamilyState>) {
    let seq = family.try_update(FamilyState::begin_fetch).unwrap_or_default();
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::get_family(id, generations).await;
            if let Err(e) = &result {
                leptos::logging::warn!("family of horse {id} failed: {e}");
            }
            family.update(|s| {
                s.apply_fetch_for(seq, id, result);
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (generations, seq);
    }
}

fn delete_node(
    root_id: i64,
    node: HorseFamily,
    reload: RwSignal<u32>,
    leave_to: RwSignal<Option<String>>,
    toasts: RwSignal<ToastState>,
) {
    #[cfg(feature = "hydrate")]
    {
        use crate::state::family::{AfterDelete, after_delete};

        leptos::task::spawn_local(async move {
            match crate::net::api::delete_horse(node.id).await {
                Ok(()) => {
                    toasts.update(|t| {
                        t.success("Horse Deleted", format!("Horse {} was successfully deleted", node.name));
                    });
                    match after_delete(root_id, node.id) {
                        AfterDelete::Reload => reload.update(|n| *n += 1),
                        AfterDelete::LeaveTree => leave_to.set(Some("/horses".to_owned())),
                    }
                }
                Err(e) => toasts.update(|t| {
                    t.api_error("Could Not Delete Horse", &e);
                }),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (root_id, node, reload, leave_to, toasts);
    }
}
