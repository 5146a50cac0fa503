//! Top navigation bar.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <header class="nav-bar toolbar">
            <span class="toolbar__board-name">"Paddock"</span>
            <span class="toolbar__divider" aria-hidden="true"></span>
            <A href="/horses" attr:class="nav-bar__link">"Horses"</A>
            <A href="/owners" attr:class="nav-bar__link">"Owners"</A>
        </header>
    }
}
