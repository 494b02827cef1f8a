//! Navigation panel configuration and open/active state.
//!
//! DESIGN
//! ======
//! `MenuConfig` is validated once when the host builds it and is read-only
//! afterwards. `MenuState` is the only mutable piece: an open flag driven by
//! toggle/dismiss events and an active item id projected from the current
//! location. Both are plain data so the transitions are testable without a
//! reactive runtime; components wrap `MenuState` in an `RwSignal`.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use std::collections::HashSet;

use crate::util::dismiss::{is_cancel_key, pointer_dismisses};

/// Errors raised while building a `MenuConfig`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    #[error("menu must contain at least one item")]
    EmptyItems,
    #[error("duplicate menu item id: {0}")]
    DuplicateId(String),
    #[error("duplicate menu item href: {0}")]
    DuplicateHref(String),
    #[error("menu item id must not be empty")]
    EmptyId,
    #[error("menu {field} must be a positive pixel value")]
    NonPositive { field: &'static str },
}

/// Side of the viewport the panel is fixed to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuPosition {
    Left,
    #[default]
    Right,
}

impl MenuPosition {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// A single navigable destination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub id: String,
    pub label: String,
    pub href: String,
    pub icon: Option<String>,
    /// Accessible description; falls back to `label` when absent.
    pub description: Option<String>,
}

impl MenuItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>, href: impl Into<String>) -> Self {
        Self { id: id.into(), label: label.into(), href: href.into(), icon: None, description: None }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Label announced by assistive technology.
    #[must_use]
    pub fn aria_label(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.label)
    }
}

/// Validated, immutable panel configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuConfig {
    items: Vec<MenuItem>,
    width: u32,
    mobile_breakpoint: u32,
    position: MenuPosition,
}

impl MenuConfig {
    /// Build a config, rejecting empty item lists, duplicate ids or hrefs,
    /// and zero pixel sizes.
    ///
    /// # Errors
    ///
    /// Returns the first `NavError` found.
    pub fn new(
        items: Vec<MenuItem>,
        width: u32,
        mobile_breakpoint: u32,
        position: MenuPosition,
    ) -> Result<Self, NavError> {
        if items.is_empty() {
            return Err(NavError::EmptyItems);
        }
        if width == 0 {
            return Err(NavError::NonPositive { field: "width" });
        }
        if mobile_breakpoint == 0 {
            return Err(NavError::NonPositive { field: "mobile breakpoint" });
        }

        let mut ids = HashSet::new();
        let mut hrefs = HashSet::new();
        for item in &items {
            if item.id.is_empty() {
                return Err(NavError::EmptyId);
            }
            if !ids.insert(item.id.as_str()) {
                return Err(NavError::DuplicateId(item.id.clone()));
            }
            if !hrefs.insert(item.href.as_str()) {
                return Err(NavError::DuplicateHref(item.href.clone()));
            }
        }

        Ok(Self { items, width, mobile_breakpoint, position })
    }

    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn mobile_breakpoint(&self) -> u32 {
        self.mobile_breakpoint
    }

    #[must_use]
    pub fn position(&self) -> MenuPosition {
        self.position
    }
}

/// Id of the item whose `href` equals `location`, if any.
#[must_use]
pub fn active_item_id<'a>(config: &'a MenuConfig, location: &str) -> Option<&'a str> {
    config
        .items()
        .iter()
        .find(|item| item.href == location)
        .map(|item| item.id.as_str())
}

/// Render-ready projection of one menu item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub id: String,
    pub label: String,
    pub href: String,
    pub icon: Option<String>,
    pub aria_label: String,
    pub active: bool,
}

/// Project the config into display-ordered entries, marking at most one active.
#[must_use]
pub fn nav_entries(config: &MenuConfig, active_id: Option<&str>) -> Vec<NavEntry> {
    config
        .items()
        .iter()
        .map(|item| NavEntry {
            id: item.id.clone(),
            label: item.label.clone(),
            href: item.href.clone(),
            icon: item.icon.clone(),
            aria_label: item.aria_label().to_owned(),
            active: active_id == Some(item.id.as_str()),
        })
        .collect()
}

/// What caused the panel to close.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissTrigger {
    /// Pointer pressed outside the panel (including the overlay).
    OutsidePointer,
    /// Cancellation key pressed.
    CancelKey,
    /// A menu item was selected.
    ItemSelected,
}

impl DismissTrigger {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OutsidePointer => "outside_pointer",
            Self::CancelKey => "cancel_key",
            Self::ItemSelected => "item_selected",
        }
    }
}

/// Input the panel reacts to while mounted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelEvent {
    /// Pointer pressed somewhere in the document (or on the overlay).
    PointerDown { inside_panel: bool, inside_toggle: bool },
    /// Key pressed, as reported by `KeyboardEvent.key`.
    Key(String),
    /// A menu item was clicked.
    ItemSelected,
}

/// Transient panel state. Starts closed with no active item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    is_open: bool,
    active_item_id: Option<String>,
}

impl MenuState {
    /// State for a panel mounted at `location`.
    #[must_use]
    pub fn mounted(config: &MenuConfig, location: &str) -> Self {
        let mut state = Self::default();
        state.on_location_change(config, location);
        state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn active_item_id(&self) -> Option<&str> {
        self.active_item_id.as_deref()
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Close the panel. No-op when already closed.
    pub fn dismiss(&mut self) {
        self.is_open = false;
    }

    /// Which dismiss path `event` takes, or `None` if it leaves the panel as
    /// is. Nothing dismisses a closed panel.
    #[must_use]
    pub fn dismissal_for(&self, event: &PanelEvent) -> Option<DismissTrigger> {
        if !self.is_open {
            return None;
        }
        match event {
            PanelEvent::PointerDown { inside_panel, inside_toggle } => {
                pointer_dismisses(*inside_panel, *inside_toggle).then_some(DismissTrigger::OutsidePointer)
            }
            PanelEvent::Key(key) => is_cancel_key(key).then_some(DismissTrigger::CancelKey),
            // The active item follows the location change the link triggers.
            PanelEvent::ItemSelected => Some(DismissTrigger::ItemSelected),
        }
    }

    /// Apply `event`, returning the trigger if it closed the panel.
    pub fn handle(&mut self, event: &PanelEvent) -> Option<DismissTrigger> {
        let trigger = self.dismissal_for(event)?;
        self.dismiss();
        Some(trigger)
    }

    /// Recompute the active item. Never touches `is_open`.
    pub fn on_location_change(&mut self, config: &MenuConfig, location: &str) {
        self.active_item_id = active_item_id(config, location).map(str::to_owned);
    }
}
