//! # coopcraft-client
//!
//! Leptos frontend for the CoopCraft placeholder site: routed pages, the
//! collapsible navigation panel and its state. Built with `ssr` for the
//! server binary and with `hydrate` for the WASM bundle.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point. Validates the menu before mounting; an invalid menu
/// leaves the server-rendered markup inert.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use app::App;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    match pages::catalog::site_menu() {
        Ok(menu) => {
            leptos::mount::hydrate_body(move || view! { <App menu=menu/> });
        }
        Err(e) => log::error!("navigation menu rejected: {e}"),
    }
}
