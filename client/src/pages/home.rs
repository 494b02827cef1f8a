//! Landing page with a shortcut to the health endpoint.

use leptos::prelude::*;

use super::catalog::HOME;
use super::info_page::InfoPage;

pub const HEALTH_PATH: &str = "/api/health";

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <InfoPage page=&HOME>
            <div class="page__links">
                <a href=HEALTH_PATH class="page__link" rel="external">
                    "Test the API →"
                </a>
            </div>
        </InfoPage>
    }
}
