//! Root application component with routing and the navigation context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_panel::NavPanel;
use crate::pages::catalog::SITE_NAME;
use crate::pages::home::HomePage;
use crate::pages::tools::{AccessoriesPage, CreationsPage, CuttingPage, DrillingPage, NotFoundPage};
use crate::state::nav::MenuConfig;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions, menu: MenuConfig) -> impl IntoView {
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
                <App menu=menu/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// `menu` is validated by the host before mounting and shared read-only
/// through context.
#[component]
pub fn App(menu: MenuConfig) -> impl IntoView {
    provide_meta_context();
    provide_context(menu);

    view! {
        <Title text=SITE_NAME/>

        <Router>
            <NavPanel/>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("drilling") view=DrillingPage/>
                <Route path=StaticSegment("cutting") view=CuttingPage/>
                <Route path=StaticSegment("accessories") view=AccessoriesPage/>
                <Route path=StaticSegment("creations") view=CreationsPage/>
            </Routes>
        </Router>
    }
}
