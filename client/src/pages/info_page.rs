//! Shared layout for the static placeholder pages.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use super::catalog::PageContent;

/// Title, description and a bulleted list taken from a catalog entry.
/// Optional children render below the list.
#[component]
pub fn InfoPage(page: &'static PageContent, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <Title text=page.title/>
        <Meta name="description" content=page.summary/>
        <main class=format!("page page--{}", page.id)>
            <div class="page__container">
                <h1 class="page__title">{page.heading}</h1>
                <p class="page__description">{page.description}</p>
                <section class="page__info-box">
                    <h2 class="page__subtitle">{page.list_heading}</h2>
                    <ul class="page__list">
                        {page.bullets.iter().map(|bullet| view! { <li>{*bullet}</li> }).collect_view()}
                    </ul>
                </section>
                {children.map(|children| children())}
            </div>
        </main>
    }
}
