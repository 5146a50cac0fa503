//! Generic typeahead input.
//!
//! DESIGN
//! ======
//! The caller supplies a suggestion source (input text -> future of items)
//! and a formatter for display text. The widget owns only its input text and
//! the suggestion list; the selected value lives with the caller and is
//! changed through `on_select`.

use leptos::prelude::*;

use crate::net::api::Suggestions;
use crate::state::autocomplete::{clears_selection, synced_text, SuggestionState};

/// Typeahead bound to an optional selected value.
///
/// Empty input clears the selection and never queries the source. Typing
/// over a selected label clears the selection but keeps the text.
#[component]
pub fn Autocomplete<T, F>(
    #[prop(into)] value: Signal<Option<T>>,
    on_select: Callback<Option<T>>,
    suggestions: F,
    format: fn(&T) -> String,
    #[prop(optional, into)] id: String,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView
where
    T: Clone + PartialEq + Send + Sync + 'static,
    F: Fn(String) -> Suggestions<T> + Clone + Send + Sync + 'static,
{
    let text = RwSignal::new(String::new());
    let state = RwSignal::new(SuggestionState::<T>::default());
    let selected = Memo::new(move |_| value.get());

    // Keep the input text in step with the externally selected value.
    Effect::new(move |previous: Option<String>| {
        let label = selected.get().as_ref().map(format).unwrap_or_default();
        if let Some(next) = synced_text(&text.get_untracked(), previous.as_deref(), &label) {
            text.set(next);
        }
        label
    });

    let on_input = move |ev: leptos::ev::Event| {
        let input = event_target_value(&ev);
        text.set(input.clone());
        let selected_label = selected.with_untracked(|s| s.as_ref().map(format));
        if clears_selection(&input, selected_label.as_deref()) {
            on_select.run(None);
        }
        let Some(query) = state.try_update(|s| s.begin(&input)).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let pending = suggestions(query.text.clone());
            leptos::task::spawn_local(async move {
                match pending.await {
                    Ok(items) => state.update(|s| {
                        s.accept(query.seq, items);
                    }),
                    Err(e) => leptos::logging::warn!("suggestions for {:?} failed: {e}", query.text),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&suggestions, query);
        }
    };

    let pick = move |item: T| {
        text.set(format(&item));
        state.update(SuggestionState::close);
        on_select.run(Some(item));
    };

    let on_clear = move |_| {
        text.set(String::new());
        state.update(SuggestionState::close);
        on_select.run(None);
    };

    view! {
        <div class="autocomplete">
            <div class="autocomplete__field">
                <input
                    class="autocomplete__input"
                    type="text"
                    autocomplete="off"
                    id=id
                    placeholder=placeholder
                    prop:value=move || text.get()
                    on:input=on_input
                    on:blur=move |_| state.update(|s| s.open = false)
                />
                <Show when=move || !text.get().is_empty()>
                    <button type="button" class="autocomplete__clear" title="Clear" on:click=on_clear>
                        "✕"
                    </button>
                </Show>
            </div>
            <Show when=move || state.with(|s| s.open && !s.items.is_empty())>
                <ul class="autocomplete__list" role="listbox">
                    {move || {
                        state
                            .with(|s| s.items.clone())
                            .into_iter()
                            .map(|item| {
                                let label = format(&item);
                                view! {
                                    <li>
                                        <button
                                            type="button"
                                            class="autocomplete__option"
                                            on:mousedown=move |ev| {
                                                ev.prevent_default();
                                                pick(item.clone());
                                            }
                                        >
                                            {label}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </div>
    }
}
