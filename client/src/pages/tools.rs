//! Placeholder pages for the upcoming tool generators.

use leptos::prelude::*;

use super::catalog::{ACCESSORIES, CREATIONS, CUTTING, DRILLING};
use super::info_page::InfoPage;

#[component]
pub fn DrillingPage() -> impl IntoView {
    view! { <InfoPage page=&DRILLING/> }
}

#[component]
pub fn CuttingPage() -> impl IntoView {
    view! { <InfoPage page=&CUTTING/> }
}

#[component]
pub fn AccessoriesPage() -> impl IntoView {
    view! { <InfoPage page=&ACCESSORIES/> }
}

#[component]
pub fn CreationsPage() -> impl IntoView {
    view! { <InfoPage page=&CREATIONS/> }
}

/// Rendered for routes outside the catalog.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="page page--not-found">
            <div class="page__container">
                <h1 class="page__title">"Page not found."</h1>
                <a href="/" class="page__link">"Back to home"</a>
            </div>
        </main>
    }
}
