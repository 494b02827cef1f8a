//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome around the routed pages and read the
//! navigation config from Leptos context.

pub mod nav_item;
pub mod nav_panel;
