//! Horse list page with search filters and delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route. Every filter change re-runs the search; only the answer to
//! the most recent search is rendered. Deletes remove the row locally instead
//! of re-fetching.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::autocomplete::Autocomplete;
use crate::components::confirm_delete::ConfirmDeleteDialog;
use crate::net::api;
use crate::net::types::{Horse, HorseSearch, Owner, Sex};
use crate::state::family::DEFAULT_GENERATIONS;
use crate::state::horses::{HorseFilters, HorseListState};
use crate::state::toasts::ToastState;
use crate::util::date::format_display_date;

/// Horse list page: filter form, result table, delete confirmation.
#[component]
pub fn HorseListPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let list = RwSignal::new(HorseListState::default());
    let filters = RwSignal::new(HorseFilters::default());

    Effect::new(move || {
        let search = filters.with(HorseFilters::to_search);
        run_search(list, toasts, search);
    });

    let owner_value = Signal::derive(move || filters.with(|f| f.owner.clone()));
    let on_owner = Callback::new(move |owner: Option<Owner>| filters.update(|f| f.owner = owner));

    let pending_name = Signal::derive(move || {
        list.with(|s| s.pending_delete.as_ref().map(|h| h.name.clone()).unwrap_or_default())
    });
    let on_delete_cancel = Callback::new(move |()| list.update(|s| s.pending_delete = None));
    let on_delete_confirm = Callback::new(move |()| {
        if let Some(horse) = list.with_untracked(|s| s.pending_delete.clone()) {
            delete_row(list, toasts, horse);
        }
    });

    view! {
        <section class="horses">
            <header class="page__header">
                <h1>"Horses"</h1>
                <A href="/horses/create" attr:class="btn btn--primary">
                    "Create horse"
                </A>
            </header>

            <form class="search" on:submit=|ev| ev.prevent_default()>
                <label class="search__field">
                    "Name"
                    <input
                        type="text"
                        prop:value=move || filters.with(|f| f.name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            filters.update(|f| f.name = value);
                        }
                    />
                </label>
                <label class="search__field">
                    "Description"
                    <input
                        type="text"
                        prop:value=move || filters.with(|f| f.description.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            filters.update(|f| f.description = value);
                        }
                    />
                </label>
                <label class="search__field">
                    "Date of birth"
                    <input
                        type="date"
                        prop:value=move || filters.with(|f| f.date_of_birth.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            filters.update(|f| f.date_of_birth = value);
                        }
                    />
                </label>
                <label class="search__field">
                    "Sex"
                    <select on:change=move |ev| {
                        let sex = Sex::from_wire(&event_target_value(&ev));
                        filters.update(|f| f.sex = sex);
                    }>
                        <option value="">"Any"</option>
                        <option value=Sex::Female.as_wire()>{Sex::Female.label()}</option>
                        <option value=Sex::Male.as_wire()>{Sex::Male.label()}</option>
                    </select>
                </label>
                <label class="search__field">
                    "Owner"
                    <Autocomplete
                        value=owner_value
                        on_select=on_owner
                        suggestions=api::owner_suggestions
                        format=Owner::full_name
                        placeholder="Any owner"
                    />
                </label>
            </form>

            <Show when=move || list.with(|s| s.banner_error.is_some())>
                <p class="banner banner--error">
                    {move || list.with(|s| s.banner_error.clone().unwrap_or_default())}
                </p>
            </Show>

            <table class="table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Description"</th>
                        <th>"Date of birth"</th>
                        <th>"Sex"</th>
                        <th>"Owner"</th>
                        <th class="table__actions">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || list.with(|s| s.items.clone())
                        key=|horse| horse.id
                        children=move |horse: Horse| {
                            let to_delete = horse.clone();
                            view! {
                                <tr>
                                    <td>
                                        <A href=format!("/horses/{}", horse.id)>{horse.name.clone()}</A>
                                    </td>
                                    <td>{horse.description.clone().unwrap_or_default()}</td>
                                    <td>{format_display_date(horse.date_of_birth)}</td>
                                    <td>{horse.sex.label()}</td>
                                    <td>{horse.owner.as_ref().map(Owner::full_name).unwrap_or_default()}</td>
                                    <td class="table__actions">
                                        <A
                                            href=format!("/horses/{}/family?gen={DEFAULT_GENERATIONS}", horse.id)
                                            attr:class="btn"
                                        >
                                            "Family"
                                        </A>
                                        <A href=format!("/horses/{}/edit", horse.id) attr:class="btn">
                                            "Edit"
                                        </A>
                                        <button
                                            class="btn btn--danger"
                                            on:click=move |_| {
                                                let target = to_delete.clone();
                                                list.update(|s| s.pending_delete = Some(target));
                                            }
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <Show when=move || list.with(|s| !s.loading && s.items.is_empty() && s.banner_error.is_none())>
                <p class="empty">"No horses found."</p>
            </Show>

            <Show when=move || list.with(|s| s.pending_delete.is_some())>
                <ConfirmDeleteDialog subject=pending_name on_confirm=on_delete_confirm on_cancel=on_delete_cancel/>
            </Show>
        </section>
    }
}

fn run_search(list: RwSignal<HorseListState>, toasts: RwSignal<ToastState>, search: HorseSearch) {
    let seq = list.try_update(HorseListState::begin_search).unwrap_or_default();
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = api::search_horses(&search).await;
            if let Err(e) = &result {
                leptos::logging::warn!("horse search failed: {e}");
                if seq == list.with_untracked(HorseListState::latest_search) {
                    toasts.update(|t| {
                        t.api_error("Could Not Fetch Horses", e);
                    });
                }
            }
            list.update(|s| {
                s.apply_search_for(seq, result);
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (toasts, search, seq);
    }
}

fn delete_row(list: RwSignal<HorseListState>, toasts: RwSignal<ToastState>, horse: Horse) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match api::delete_horse(horse.id).await {
                Ok(()) => {
                    list.update(|s| s.remove(horse.id));
                    toasts.update(|t| {
                        t.success("Horse Deleted", format!("Horse {} was successfully deleted", horse.name));
                    });
                }
                Err(e) => {
                    list.update(|s| s.pending_delete = None);
                    toasts.update(|t| {
                        t.api_error("Could Not Delete Horse", &e);
                    });
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (list, toasts, horse);
    }
}
