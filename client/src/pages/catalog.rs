//! Static copy for every routed page and the menu derived from it.
//!
//! Each page appears exactly once here, so the router, the page views and the
//! navigation panel cannot drift apart.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::state::nav::{MenuConfig, MenuItem, MenuPosition, NavError};

pub const MENU_WIDTH_PX: u32 = 280;
pub const MENU_MOBILE_BREAKPOINT_PX: u32 = 768;
pub const SITE_NAME: &str = "CoopCraft";

#[derive(Clone, Copy, Debug)]
pub struct PageContent {
    pub id: &'static str,
    pub href: &'static str,
    pub menu_label: &'static str,
    pub icon: &'static str,
    /// Document title.
    pub title: &'static str,
    /// Meta description, also used as the menu item's accessible label.
    pub summary: &'static str,
    pub heading: &'static str,
    pub description: &'static str,
    pub list_heading: &'static str,
    pub bullets: &'static [&'static str],
}

pub const HOME: PageContent = PageContent {
    id: "home",
    href: "/",
    menu_label: "Home",
    icon: "🏠",
    title: "Home - CoopCraft",
    summary: "Welcome to CoopCraft",
    heading: "Welcome to CoopCraft 🚀",
    description: "A platform for generating custom 3D workshop tools",
    list_heading: "Technical environment initialized",
    bullets: &[
        "✅ Rust with Leptos server-side rendering",
        "✅ Simple layout: one page, one module",
        "✅ Server listening on port 4000",
        "✅ JSON health endpoint",
    ],
};

pub const DRILLING: PageContent = PageContent {
    id: "drilling",
    href: "/drilling",
    menu_label: "Drilling jigs",
    icon: "🔨",
    title: "Drilling jigs - CoopCraft",
    summary: "Create custom drilling jigs",
    heading: "🔨 Drilling jigs",
    description: "Create custom drilling jigs for your DIY projects.",
    list_heading: "Features to come",
    bullets: &[
        "✨ Custom jig creation",
        "📏 Dimension adjustment",
        "🎯 Precise hole positioning",
        "💾 STL/3MF export",
    ],
};

pub const CUTTING: PageContent = PageContent {
    id: "cutting",
    href: "/cutting",
    menu_label: "Cutting guides",
    icon: "✂️",
    title: "Cutting guides - CoopCraft",
    summary: "Generate precise cutting guides",
    heading: "✂️ Cutting guides",
    description: "Generate precise cutting guides for your workshop cuts.",
    list_heading: "Features to come",
    bullets: &[
        "✨ Custom guide creation",
        "📐 Adjustable cutting angles",
        "📏 Precise measurements",
        "💾 STL/3MF export",
    ],
};

pub const ACCESSORIES: PageContent = PageContent {
    id: "accessories",
    href: "/accessories",
    menu_label: "Workshop accessories",
    icon: "🔧",
    title: "Workshop accessories - CoopCraft",
    summary: "Assorted tools and accessories for the workshop",
    heading: "🔧 Workshop accessories",
    description: "Discover a collection of practical tools and accessories for your workshop.",
    list_heading: "Features to come",
    bullets: &[
        "✨ Holders and storage",
        "🔩 Tool organizers",
        "📦 Storage boxes",
        "💾 STL/3MF export",
    ],
};

pub const CREATIONS: PageContent = PageContent {
    id: "creations",
    href: "/creations",
    menu_label: "My creations",
    icon: "💾",
    title: "My creations - CoopCraft",
    summary: "Manage your saved creations",
    heading: "💾 My creations",
    description: "Find and manage all of your custom 3D tool creations.",
    list_heading: "Features to come",
    bullets: &[
        "✨ Project saving",
        "📂 Organization by category",
        "🔄 Editing your creations",
        "💾 Export and sharing",
    ],
};

/// All pages in menu order.
pub const PAGES: &[PageContent] = &[HOME, DRILLING, CUTTING, ACCESSORIES, CREATIONS];

/// Build the site navigation menu, one item per page.
///
/// # Errors
///
/// Returns a `NavError` if the catalog violates the menu invariants.
pub fn site_menu() -> Result<MenuConfig, NavError> {
    let items = PAGES
        .iter()
        .map(|page| {
            MenuItem::new(page.id, page.menu_label, page.href)
                .with_icon(page.icon)
                .with_description(page.summary)
        })
        .collect();
    MenuConfig::new(items, MENU_WIDTH_PX, MENU_MOBILE_BREAKPOINT_PX, MenuPosition::Right)
}
