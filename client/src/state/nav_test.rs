use super::*;

fn two_item_config() -> MenuConfig {
    MenuConfig::new(
        vec![MenuItem::new("home", "Home", "/"), MenuItem::new("drilling", "Drilling jigs", "/drilling")],
        280,
        768,
        MenuPosition::Right,
    )
    .unwrap()
}

// =============================================================
// MenuConfig validation
// =============================================================

#[test]
fn config_rejects_empty_items() {
    let err = MenuConfig::new(Vec::new(), 280, 768, MenuPosition::Left).unwrap_err();
    assert_eq!(err, NavError::EmptyItems);
}

#[test]
fn config_rejects_duplicate_ids() {
    let items = vec![MenuItem::new("home", "Home", "/"), MenuItem::new("home", "Other", "/other")];
    let err = MenuConfig::new(items, 280, 768, MenuPosition::Left).unwrap_err();
    assert_eq!(err, NavError::DuplicateId("home".into()));
}

#[test]
fn config_rejects_duplicate_hrefs() {
    let items = vec![MenuItem::new("home", "Home", "/"), MenuItem::new("start", "Start", "/")];
    let err = MenuConfig::new(items, 280, 768, MenuPosition::Left).unwrap_err();
    assert_eq!(err, NavError::DuplicateHref("/".into()));
}

#[test]
fn config_rejects_empty_id() {
    let items = vec![MenuItem::new("", "Home", "/")];
    let err = MenuConfig::new(items, 280, 768, MenuPosition::Left).unwrap_err();
    assert_eq!(err, NavError::EmptyId);
}

#[test]
fn config_rejects_zero_sizes() {
    let items = || vec![MenuItem::new("home", "Home", "/")];
    assert_eq!(
        MenuConfig::new(items(), 0, 768, MenuPosition::Left).unwrap_err(),
        NavError::NonPositive { field: "width" }
    );
    assert_eq!(
        MenuConfig::new(items(), 280, 0, MenuPosition::Left).unwrap_err(),
        NavError::NonPositive { field: "mobile breakpoint" }
    );
}

#[test]
fn config_keeps_display_order_and_sizes() {
    let config = two_item_config();
    let ids: Vec<&str> = config.items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, ["home", "drilling"]);
    assert_eq!(config.width(), 280);
    assert_eq!(config.mobile_breakpoint(), 768);
    assert_eq!(config.position(), MenuPosition::Right);
}

#[test]
fn nav_error_messages_are_readable() {
    assert_eq!(NavError::DuplicateId("x".into()).to_string(), "duplicate menu item id: x");
    assert_eq!(
        NavError::NonPositive { field: "width" }.to_string(),
        "menu width must be a positive pixel value"
    );
}

// =============================================================
// Active item projection
// =============================================================

#[test]
fn active_item_matches_exact_href() {
    let config = two_item_config();
    assert_eq!(active_item_id(&config, "/drilling"), Some("drilling"));
    assert_eq!(active_item_id(&config, "/"), Some("home"));
}

#[test]
fn active_item_is_none_for_unknown_location() {
    let config = two_item_config();
    assert_eq!(active_item_id(&config, "/unknown"), None);
    assert_eq!(active_item_id(&config, "/drilling/"), None);
    assert_eq!(active_item_id(&config, ""), None);
}

#[test]
fn location_change_updates_active_item() {
    let config = two_item_config();
    let mut state = MenuState::default();

    state.on_location_change(&config, "/drilling");
    assert_eq!(state.active_item_id(), Some("drilling"));

    state.on_location_change(&config, "/unknown");
    assert_eq!(state.active_item_id(), None);
}

#[test]
fn location_change_does_not_touch_open_flag() {
    let config = two_item_config();
    let mut state = MenuState::default();
    state.toggle();

    state.on_location_change(&config, "/drilling");
    assert!(state.is_open());

    state.dismiss();
    state.on_location_change(&config, "/");
    assert!(!state.is_open());
}

#[test]
fn mounted_state_is_closed_with_projected_active_item() {
    let config = two_item_config();
    let state = MenuState::mounted(&config, "/drilling");
    assert!(!state.is_open());
    assert_eq!(state.active_item_id(), Some("drilling"));
}

// =============================================================
// Open/closed transitions
// =============================================================

#[test]
fn default_state_is_closed() {
    let state = MenuState::default();
    assert!(!state.is_open());
    assert_eq!(state.active_item_id(), None);
}

#[test]
fn toggle_flips_and_double_toggle_restores() {
    let mut state = MenuState::default();
    state.toggle();
    assert!(state.is_open());
    state.toggle();
    assert!(!state.is_open());
}

#[test]
fn dismiss_closes_open_panel() {
    let mut state = MenuState::default();
    state.toggle();
    state.dismiss();
    assert!(!state.is_open());
}

#[test]
fn dismiss_is_noop_when_closed() {
    let mut state = MenuState::default();
    let before = state.clone();
    state.dismiss();
    assert_eq!(state, before);
}

// =============================================================
// Dismiss events
// =============================================================

fn press(inside_panel: bool, inside_toggle: bool) -> PanelEvent {
    PanelEvent::PointerDown { inside_panel, inside_toggle }
}

fn open_state() -> MenuState {
    let mut state = MenuState::default();
    state.toggle();
    state
}

#[test]
fn outside_press_closes_open_panel() {
    let mut state = open_state();
    assert_eq!(state.handle(&press(false, false)), Some(DismissTrigger::OutsidePointer));
    assert!(!state.is_open());
}

#[test]
fn press_inside_panel_or_on_toggle_keeps_panel_open() {
    for (inside_panel, inside_toggle) in [(true, false), (false, true), (true, true)] {
        let mut state = open_state();
        assert_eq!(state.handle(&press(inside_panel, inside_toggle)), None);
        assert!(state.is_open(), "press panel={inside_panel} toggle={inside_toggle} closed the panel");
    }
}

#[test]
fn toggle_press_then_click_closes_once() {
    // mousedown on the toggle is ignored; the click that follows toggles.
    let mut state = open_state();
    assert_eq!(state.handle(&press(false, true)), None);
    state.toggle();
    assert!(!state.is_open());
}

#[test]
fn cancel_key_closes_open_panel() {
    let mut state = open_state();
    assert_eq!(state.handle(&PanelEvent::Key("Escape".into())), Some(DismissTrigger::CancelKey));
    assert!(!state.is_open());
}

#[test]
fn cancel_key_twice_stays_closed() {
    let mut state = open_state();
    let escape = PanelEvent::Key("Escape".into());
    assert_eq!(state.handle(&escape), Some(DismissTrigger::CancelKey));
    assert_eq!(state.handle(&escape), None);
    assert!(!state.is_open());
}

#[test]
fn other_keys_keep_panel_open() {
    let mut state = open_state();
    assert_eq!(state.handle(&PanelEvent::Key("Enter".into())), None);
    assert!(state.is_open());
}

#[test]
fn nothing_dismisses_closed_panel() {
    let state = MenuState::default();
    for event in [press(false, false), PanelEvent::Key("Escape".into()), PanelEvent::ItemSelected] {
        assert_eq!(state.dismissal_for(&event), None, "{event:?}");
    }
}

#[test]
fn selecting_any_item_closes_panel() {
    let config = two_item_config();
    for item in config.items() {
        let mut state = MenuState::mounted(&config, "/");
        state.toggle();
        assert_eq!(state.handle(&PanelEvent::ItemSelected), Some(DismissTrigger::ItemSelected));
        assert!(!state.is_open(), "select of {} left panel open", item.id);
        state.on_location_change(&config, &item.href);
        assert_eq!(state.active_item_id(), Some(item.id.as_str()));
    }
}

// =============================================================
// Render projection
// =============================================================

#[test]
fn nav_entries_mark_single_active_item() {
    let config = two_item_config();
    let entries = nav_entries(&config, Some("drilling"));
    assert_eq!(entries.len(), 2);
    assert!(!entries[0].active);
    assert!(entries[1].active);
    assert_eq!(entries[1].href, "/drilling");
}

#[test]
fn nav_entries_without_active_id_mark_nothing() {
    let config = two_item_config();
    assert!(nav_entries(&config, None).iter().all(|e| !e.active));
}

#[test]
fn nav_entries_use_description_for_aria_label() {
    let config = MenuConfig::new(
        vec![
            MenuItem::new("home", "Home", "/").with_icon("🏠").with_description("Back to the home page"),
            MenuItem::new("cutting", "Cutting guides", "/cutting"),
        ],
        280,
        768,
        MenuPosition::Left,
    )
    .unwrap();

    let entries = nav_entries(&config, None);
    assert_eq!(entries[0].aria_label, "Back to the home page");
    assert_eq!(entries[0].icon.as_deref(), Some("🏠"));
    assert_eq!(entries[1].aria_label, "Cutting guides");
    assert_eq!(entries[1].icon, None);
}

#[test]
fn dismiss_trigger_names_are_stable() {
    assert_eq!(DismissTrigger::OutsidePointer.as_str(), "outside_pointer");
    assert_eq!(DismissTrigger::CancelKey.as_str(), "cancel_key");
    assert_eq!(DismissTrigger::ItemSelected.as_str(), "item_selected");
}

#[test]
fn menu_position_default_is_right() {
    assert_eq!(MenuPosition::default(), MenuPosition::Right);
    assert_eq!(MenuPosition::Left.as_str(), "left");
}
