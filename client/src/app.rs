//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::{nav_bar::NavBar, toast_host::ToastHost};
use crate::pages::{
    horse_detail::HorseDetailPage,
    horse_edit::{HorseCreatePage, HorseEditPage},
    horse_family::HorseFamilyPage,
    horses::HorseListPage,
    owner_create::OwnerCreatePage,
    owners::OwnerListPage,
};
use crate::state::toasts::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the toast queue and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = RwSignal::new(ToastState::default());
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/paddock.css"/>
        <Title text="Paddock"/>

        <Router>
            <NavBar/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path="/horses"/> }/>
                    <Route path=StaticSegment("horses") view=HorseListPage/>
                    <Route path=(StaticSegment("horses"), StaticSegment("create")) view=HorseCreatePage/>
                    <Route path=(StaticSegment("horses"), ParamSegment("id")) view=HorseDetailPage/>
                    <Route
                        path=(StaticSegment("horses"), ParamSegment("id"), StaticSegment("edit"))
                        view=HorseEditPage
                    />
                    <Route
                        path=(StaticSegment("horses"), ParamSegment("id"), StaticSegment("family"))
                        view=HorseFamilyPage
                    />
                    <Route path=StaticSegment("owners") view=OwnerListPage/>
                    <Route path=(StaticSegment("owners"), StaticSegment("create")) view=OwnerCreatePage/>
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}
