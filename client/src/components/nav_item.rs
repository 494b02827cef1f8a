//! Single link row inside the navigation panel.

use leptos::prelude::*;

use crate::state::nav::NavEntry;

/// Link to one destination; `on_select` fires on click.
#[component]
pub fn NavItem(entry: NavEntry, on_select: Callback<()>) -> impl IntoView {
    let NavEntry { label, href, icon, aria_label, active, .. } = entry;
    let class = if active { "menu-item-link menu-item-link--active" } else { "menu-item-link" };

    view! {
        <li class="menu-item">
            <a
                href=href
                class=class
                aria-current=active.then_some("page")
                aria-label=aria_label
                on:click=move |_| on_select.run(())
            >
                {icon.map(|icon| view! { <span class="menu-item-link__icon">{icon}</span> })}
                <span class="menu-item-link__label">{label}</span>
            </a>
        </li>
    }
}
