//! Create and edit pages sharing one horse form.
//!
//! SYSTEM CONTEXT
//! ==============
//! `FormMode` picks heading, submit label, success verb, and whether the
//! submission creates or updates. Edit mode loads the horse first, then
//! resolves mother and father records so their inputs can be pre-filled.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::autocomplete::Autocomplete;
use crate::net::api::{self, ImageUpload};
use crate::net::types::{Horse, Owner, Sex};
use crate::state::horse_form::{FormMode, HorseForm};
use crate::state::toasts::ToastState;

/// `/horses/create`.
#[component]
pub fn HorseCreatePage() -> impl IntoView {
    view! { <HorseFormView mode=FormMode::Create horse_id=None/> }
}

/// `/horses/:id/edit`.
#[component]
pub fn HorseEditPage() -> impl IntoView {
    let params = use_params_map();
    let horse_id = move || params.read().get("id").and_then(|raw| raw.parse::<i64>().ok());

    move || match horse_id() {
        Some(id) => view! { <HorseFormView mode=FormMode::Edit horse_id=Some(id)/> }.into_any(),
        None => view! { <p class="banner banner--error">"Invalid horse id."</p> }.into_any(),
    }
}

fn horse_name(horse: &Horse) -> String {
    horse.name.clone()
}

#[component]
fn HorseFormView(mode: FormMode, horse_id: Option<i64>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(HorseForm::default());
    let image = RwSignal::new_local(None::<ImageUpload>);
    let current_image = RwSignal::new(None::<i64>);
    let load_error = RwSignal::new(None::<String>);
    let show_problems = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let finished = RwSignal::new(false);

    if let Some(id) = horse_id {
        load_horse(id, form, current_image, load_error, toasts);
    }

    Effect::new(move || {
        if finished.get() {
            navigate("/horses", NavigateOptions::default());
        }
    });

    let owner_value = Signal::derive(move || form.with(|f| f.owner.clone()));
    let on_owner = Callback::new(move |owner: Option<Owner>| form.update(|f| f.owner = owner));
    let mother_value = Signal::derive(move || form.with(|f| f.mother().cloned()));
    let on_mother = Callback::new(move |mother: Option<Horse>| form.update(|f| f.set_mother(mother)));
    let father_value = Signal::derive(move || form.with(|f| f.father().cloned()));
    let on_father = Callback::new(move |father: Option<Horse>| form.update(|f| f.set_father(father)));

    let name_invalid = move || show_problems.get() && form.with(|f| f.problems().name);
    let date_invalid = move || show_problems.get() && form.with(|f| f.problems().date_of_birth);

    let on_image = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::Event| {
                use wasm_bindgen::JsCast;

                let file = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                    .and_then(|input| input.files())
                    .and_then(|files| files.get(0));
                image.set(file.map(ImageUpload::new));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::Event| {}
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let write = match form.with_untracked(HorseForm::to_write) {
            Ok(write) => write,
            Err(_) => {
                show_problems.set(true);
                return;
            }
        };
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let upload = image.get_untracked();
            leptos::task::spawn_local(async move {
                let result = match horse_id {
                    Some(id) if mode == FormMode::Edit => api::update_horse(id, &write, upload).await,
                    _ => api::create_horse(&write, upload).await,
                };
                busy.set(false);
                match result {
                    Ok(saved) => {
                        toasts.update(|t| {
                            t.success(
                                "Horse Saved",
                                format!("Horse {} successfully {}.", saved.name, mode.action_finished()),
                            );
                        });
                        finished.set(true);
                    }
                    Err(e) => {
                        leptos::logging::warn!("saving horse failed: {e}");
                        toasts.update(|t| {
                            t.api_error("Could Not Save Horse", &e);
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (write, toasts, image);
        }
    };

    view! {
        <section class="horse-form">
            <h1>{mode.heading()}</h1>

            <Show when=move || load_error.get().is_some()>
                <p class="banner banner--error">{move || load_error.get().unwrap_or_default()}</p>
            </Show>

            <form class="form" on:submit=on_submit novalidate=true>
                <label class="form__field">
                    "Name"
                    <input
                        type="text"
                        class:is-invalid=name_invalid
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.name = value);
                        }
                    />
                    <Show when=name_invalid>
                        <span class="form__hint">"Name is required."</span>
                    </Show>
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

                <label class="form__field">
                    "Date of birth"
                    <input
                        type="date"
                        class:is-invalid=date_invalid
                        prop:value=move || form.with(|f| f.date_of_birth.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.date_of_birth = value);
                        }
                    />
                    <Show when=date_invalid>
                        <span class="form__hint">"A valid date of birth is required."</span>
                    </Show>
                </label>

                <label class="form__field">
                    "Sex"
                    <select
                        prop:value=move || form.with(|f| f.sex.as_wire())
                        on:change=move |ev| {
                            if let Some(sex) = Sex::from_wire(&event_target_value(&ev)) {
                                form.update(|f| f.sex = sex);
                            }
                        }
                    >
                        <option value=Sex::Female.as_wire()>{Sex::Female.label()}</option>
                        <option value=Sex::Male.as_wire()>{Sex::Male.label()}</option>
                    </select>
                </label>

                <label class="form__field">
                    "Owner"
                    <Autocomplete
                        id="horse-owner"
                        value=owner_value
                        on_select=on_owner
                        suggestions=api::owner_suggestions
                        format=Owner::full_name
                    />
                </label>

                <label class="form__field">
                    "Mother"
                    <Autocomplete
                        id="horse-mother"
                        value=mother_value
                        on_select=on_mother
                        suggestions=api::mother_suggestions
                        format=horse_name
                    />
                </label>

                <label class="form__field">
                    "Father"
                    <Autocomplete
                        id="horse-father"
                        value=father_value
                        on_select=on_father
                        suggestions=api::father_suggestions
                        format=horse_name
                    />
                </label>

                <div class="form__field">
                    "Image"
                    {move || {
                        current_image
                            .get()
                            .map(|id| {
                                view! { <img class="horse-form__image" src=api::image_url(id) alt="Current image"/> }
                            })
                    }}
                    <input type="file" accept="image/*" on:change=on_image/>
                </div>

                <div class="form__actions">
                    <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                        {mode.submit_label()}
                    </button>
                </div>
            </form>
        </section>
    }
}

fn load_horse(
    id: i64,
    form: RwSignal<HorseForm>,
    current_image: RwSignal<Option<i64>>,
    load_error: RwSignal<Option<String>>,
    toasts: RwSignal<ToastState>,
) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let horse = match api::get_horse(id).await {
                Ok(horse) => horse,
                Err(e) => {
                    load_error.set(Some(format!("Could not load horse {id}: {}", e.user_message())));
                    toasts.update(|t| {
                        t.api_error("Could Not Fetch Horse", &e);
                    });
                    return;
                }
            };
            current_image.set(horse.image_id);
            form.set(HorseForm::from_horse(&horse));

            let (mother, father) = (api::get_parent(horse.mother_id).await, api::get_parent(horse.father_id).await);
            if let Some(e) = form.try_update(|f| f.resolve_parents(mother, father)).flatten() {
                toasts.update(|t| {
                    t.api_error("Could Not Fetch Parents", &e);
                });
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, form, current_image, load_error, toasts);
    }
}
