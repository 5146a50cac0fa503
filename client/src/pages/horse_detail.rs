//! Read-only view of one horse with edit, family and delete actions.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::confirm_delete::ConfirmDeleteDialog;
use crate::net::api;
use crate::net::types::{Horse, Owner};
use crate::state::family::{DEFAULT_GENERATIONS, fetch_error_banner};
use crate::state::toasts::ToastState;
use crate::util::date::format_display_date;

/// Horse plus its resolved parents.
#[derive(Clone, Debug, Default)]
struct Detail {
    horse: Option<Horse>,
    mother: Option<Horse>,
    father: Option<Horse>,
    error: Option<String>,
}

/// `/horses/:id`.
#[component]
pub fn HorseDetailPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    let detail = RwSignal::new(Detail::default());
    let confirm_open = RwSignal::new(false);
    let deleted = RwSignal::new(false);

    Effect::new(move || {
        let id = params.read().get("id").and_then(|raw| raw.parse::<i64>().ok());
        match id {
            Some(id) => load_detail(id, detail, toasts),
            None => detail.set(Detail { error: Some("Invalid horse id.".to_owned()), ..Detail::default() }),
        }
    });

    Effect::new(move || {
        if deleted.get() {
            navigate("/horses", NavigateOptions::default());
        }
    });

    let subject = Signal::derive(move || detail.with(|d| d.horse.as_ref().map(|h| h.name.clone()).unwrap_or_default()));
    let on_cancel = Callback::new(move |()| confirm_open.set(false));
    let on_confirm = Callback::new(move |()| {
        confirm_open.set(false);
        if let Some(horse) = detail.with_untracked(|d| d.horse.clone()) {
            delete_and_leave(horse, deleted, toasts);
        }
    });

    view! {
        <section class="horse-detail">
            <Show when=move || detail.with(|d| d.error.is_some())>
                <p class="banner banner--error">{move || detail.with(|d| d.error.clone().unwrap_or_default())}</p>
            </Show>
            {move || detail.with(|d| d.horse.clone()).map(|horse| {
                let (mother, father) = detail.with(|d| (d.mother.clone(), d.father.clone()));
                view! {
                    <header class="page__header">
                        <h1>{horse.name.clone()}</h1>
                        <div class="page__actions">
                            <A href=format!("/horses/{}/edit", horse.id) attr:class="btn">"Edit"</A>
                            <A
                                href=format!("/horses/{}/family?gen={DEFAULT_GENERATIONS}", horse.id)
                                attr:class="btn"
                            >
                                "Family tree"
                            </A>
                            <button class="btn btn--danger" on:click=move |_| confirm_open.set(true)>
                                "Delete"
                            </button>
                        </div>
                    </header>
                    {horse.image_id.map(|id| {
                        view! { <img class="horse-detail__image" src=api::image_url(id) alt=horse.name.clone()/> }
                    })}
                    <dl class="facts">
                        <dt>"Description"</dt>
                        <dd>{horse.description.clone().unwrap_or_default()}</dd>
                        <dt>"Date of birth"</dt>
                        <dd>{format_display_date(horse.date_of_birth)}</dd>
                        <dt>"Sex"</dt>
                        <dd>{horse.sex.label()}</dd>
                        <dt>"Owner"</dt>
                        <dd>{horse.owner.as_ref().map(Owner::full_name).unwrap_or_default()}</dd>
                        <dt>"Mother"</dt>
                        <dd>{parent_link(mother)}</dd>
                        <dt>"Father"</dt>
                        <dd>{parent_link(father)}</dd>
                    </dl>
                }
            })}
            <Show when=move || confirm_open.get()>
                <ConfirmDeleteDialog subject=subject on_confirm=on_confirm on_cancel=on_cancel/>
            </Show>
        </section>
    }
}

fn parent_link(parent: Option<Horse>) -> AnyView {
    match parent {
        Some(parent) => view! { <A href=format!("/horses/{}", parent.id)>{parent.name}</A> }.into_any(),
        None => view! { <span class="muted">"Unknown"</span> }.into_any(),
    }
}

fn load_detail(id: i64, detail: RwSignal<Detail>, toasts: RwSignal<ToastState>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let horse = match api::get_horse(id).await {
                Ok(horse) => horse,
                Err(e) => {
                    detail.set(Detail { error: Some(fetch_error_banner(id, &e)), ..Detail::default() });
                    toasts.update(|t| {
                        t.api_error("Could Not Fetch Horse", &e);
                    });
                    return;
                }
            };
            let mother = api::get_parent(horse.mother_id).await;
            let father = api::get_parent(horse.father_id).await;
            if let Err(e) = mother.as_ref().and(father.as_ref()) {
                toasts.update(|t| {
                    t.api_error("Could Not Fetch Parents", e);
                });
            }
            detail.set(Detail {
                horse: Some(horse),
                mother: mother.ok().flatten(),
                father: father.ok().flatten(),
                error: None,
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, detail, toasts);
    }
}

fn delete_and_leave(horse: Horse, deleted: RwSignal<bool>, toasts: RwSignal<ToastState>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match api::delete_horse(horse.id).await {
                Ok(()) => {
                    toasts.update(|t| {
                        t.success("Horse Deleted", format!("Horse {} was successfully deleted", horse.name));
                    });
                    deleted.set(true);
                }
                Err(e) => toasts.update(|t| {
                    t.api_error("Could Not Delete Horse", &e);
                }),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (horse, deleted, toasts);
    }
}
