//! Collapsible site navigation panel.
//!
//! ARCHITECTURE
//! ============
//! Reads the validated `MenuConfig` from context and owns a `MenuState`
//! signal for its mounted lifetime. The active item follows the router
//! location; the open flag follows the toggle button and the three dismiss
//! paths (outside press, cancel key, item selection). Above the configured
//! breakpoint the generated stylesheet hides the toggle and overlay, so the
//! open flag has no visual effect there.

#[cfg(test)]
#[path = "nav_panel_test.rs"]
mod nav_panel_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::nav_item::NavItem;
use crate::state::nav::{DismissTrigger, MenuConfig, MenuPosition, MenuState, PanelEvent, nav_entries};

/// DOM id of the `<nav>` element, referenced by the toggle's `aria-controls`.
pub const PANEL_ID: &str = "site-menu";

#[must_use]
pub fn toggle_label(is_open: bool) -> &'static str {
    if is_open { "Close menu" } else { "Open menu" }
}

#[must_use]
pub fn panel_class(is_open: bool) -> &'static str {
    if is_open { "menu-nav menu-open" } else { "menu-nav" }
}

/// Stylesheet applying the configured width, side and mobile breakpoint.
#[must_use]
pub fn panel_css(config: &MenuConfig) -> String {
    let side = config.position().as_str();
    // The border and shadow sit on the edge facing the page.
    let (hidden_offset, inner_edge, shadow_x) = match config.position() {
        MenuPosition::Left => ("-100%", "right", "2px"),
        MenuPosition::Right => ("100%", "left", "-2px"),
    };
    let width = config.width();
    // "Below the breakpoint" is exclusive.
    let mobile_max = config.mobile_breakpoint() - 1;

    format!(
        ".menu-nav {{ position: fixed; top: 0; {side}: 0; width: {width}px; height: 100vh; \
         overflow-y: auto; z-index: 1000; transition: transform 0.3s ease-in-out; \
         background-color: #ffffff; border-{inner_edge}: 1px solid #e2e8f0; \
         box-shadow: {shadow_x} 0 8px rgba(0, 0, 0, 0.1); }}\n\
         .menu-nav__list {{ margin: 0; padding: 20px 0; list-style: none; }}\n\
         .menu-item {{ list-style: none; margin: 0; }}\n\
         .menu-item-link {{ display: flex; align-items: center; gap: 12px; padding: 12px 20px; \
         color: #475569; text-decoration: none; transition: all 0.2s ease; \
         border-left: 3px solid transparent; }}\n\
         .menu-item-link--active {{ color: #3b82f6; background-color: #eff6ff; \
         border-left-color: #3b82f6; font-weight: 600; }}\n\
         .menu-toggle {{ display: none; position: fixed; top: 20px; {side}: 20px; z-index: 1001; }}\n\
         .menu-overlay {{ display: none; position: fixed; inset: 0; z-index: 999; \
         background-color: rgba(0, 0, 0, 0.5); }}\n\
         @media (max-width: {mobile_max}px) {{\n\
         \x20 .menu-toggle {{ display: block; }}\n\
         \x20 .menu-overlay {{ display: block; }}\n\
         \x20 .menu-nav {{ transform: translateX({hidden_offset}); }}\n\
         \x20 .menu-nav.menu-open {{ transform: translateX(0); }}\n\
         }}\n"
    )
}

#[cfg(feature = "hydrate")]
fn log_dismiss(trigger: DismissTrigger) {
    log::debug!("nav panel dismissed: {}", trigger.as_str());
}

#[cfg(not(feature = "hydrate"))]
fn log_dismiss(_trigger: DismissTrigger) {}

/// Site navigation: hamburger toggle, dismissible overlay and link list.
#[component]
pub fn NavPanel() -> impl IntoView {
    let config = expect_context::<MenuConfig>();
    let location = use_location();
    let menu = RwSignal::new(MenuState::mounted(&config, &location.pathname.get_untracked()));

    let panel_ref = NodeRef::<leptos::html::Nav>::new();
    let toggle_ref = NodeRef::<leptos::html::Button>::new();

    let location_config = config.clone();
    Effect::new(move || {
        let path = location.pathname.get();
        menu.update(|m| m.on_location_change(&location_config, &path));
    });

    let handle = move |event: PanelEvent| {
        if let Some(trigger) = menu.with_untracked(|m| m.dismissal_for(&event)) {
            log_dismiss(trigger);
            menu.update(MenuState::dismiss);
        }
    };

    // Observers exist only while open. The slot is owned by this component,
    // so unmounting drops the guard and detaches them too.
    #[cfg(feature = "hydrate")]
    {
        use crate::util::dismiss::DismissListeners;

        let listeners = StoredValue::new_local(None::<DismissListeners>);
        Effect::new(move || {
            let open = menu.with(MenuState::is_open);
            listeners.update_value(|slot| {
                if !open {
                    *slot = None;
                } else if slot.is_none() {
                    *slot = DismissListeners::attach(
                        panel_ref.get_untracked().map(web_sys::Element::from),
                        toggle_ref.get_untracked().map(web_sys::Element::from),
                        handle,
                    );
                }
            });
        });
    }

    let on_select = Callback::new(move |()| handle(PanelEvent::ItemSelected));

    let active_id = Memo::new(move |_| menu.with(|m| m.active_item_id().map(str::to_owned)));
    let render_config = config.clone();
    let entries = move || nav_entries(&render_config, active_id.get().as_deref());
    let css = panel_css(&config);

    view! {
        <style>{css}</style>
        <button
            node_ref=toggle_ref
            class="menu-toggle"
            on:click=move |_| menu.update(MenuState::toggle)
            aria-label=move || toggle_label(menu.with(MenuState::is_open))
            aria-expanded=move || if menu.with(MenuState::is_open) { "true" } else { "false" }
            aria-controls=PANEL_ID
        >
            <span class="menu-toggle__icon">"☰"</span>
        </button>

        <Show when=move || menu.with(MenuState::is_open)>
            <div
                class="menu-overlay"
                on:click=move |_| handle(PanelEvent::PointerDown { inside_panel: false, inside_toggle: false })
            ></div>
        </Show>

        <nav
            node_ref=panel_ref
            id=PANEL_ID
            class=move || panel_class(menu.with(MenuState::is_open))
            aria-label="Main menu"
        >
            <ul class="menu-nav__list">
                {move || {
                    entries()
                        .into_iter()
                        .map(|entry| view! { <NavItem entry=entry on_select=on_select/> })
                        .collect_view()
                }}
            </ul>
        </nav>
    }
}
