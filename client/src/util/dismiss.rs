//! Document-level listeners that close the navigation panel.
//!
//! DESIGN
//! ======
//! Outside-pointer and cancel-key observers must only exist while the panel
//! is open. They report raw facts as `PanelEvent`s; whether an event closes
//! the panel is decided by `MenuState` using the pure helpers below.
//! `DismissListeners` owns both closures and detaches them in `Drop`, so
//! clearing the slot that holds it (on close or on unmount) is the single
//! release path.

#[cfg(test)]
#[path = "dismiss_test.rs"]
mod dismiss_test;

/// Keys that cancel an open panel.
#[must_use]
pub fn is_cancel_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Whether a pointer press closes the panel. The toggle button counts as part
/// of the panel, so pressing it never dismisses ahead of its own click.
#[must_use]
pub fn pointer_dismisses(inside_panel: bool, inside_toggle: bool) -> bool {
    !(inside_panel || inside_toggle)
}

#[cfg(feature = "hydrate")]
pub use listeners::DismissListeners;

#[cfg(feature = "hydrate")]
mod listeners {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use crate::state::nav::PanelEvent;

    const POINTER_EVENT: &str = "mousedown";
    const KEY_EVENT: &str = "keydown";

    /// Attached pointer/key observers. Detached when dropped.
    pub struct DismissListeners {
        document: web_sys::Document,
        on_pointer: Closure<dyn FnMut(web_sys::MouseEvent)>,
        on_key: Closure<dyn FnMut(web_sys::KeyboardEvent)>,
    }

    impl DismissListeners {
        /// Attach observers on the document and forward every press and key
        /// to `on_event`, tagged with whether the press landed in the panel or
        /// on the toggle. Returns `None` when there is no document or the
        /// browser refuses a listener; anything already attached is released.
        pub fn attach<F>(panel: Option<web_sys::Element>, toggle: Option<web_sys::Element>, on_event: F) -> Option<Self>
        where
            F: Fn(PanelEvent) + Clone + 'static,
        {
            let document = web_sys::window()?.document()?;

            let pointer_event = on_event.clone();
            let on_pointer = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
                let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
                pointer_event(PanelEvent::PointerDown {
                    inside_panel: contains(panel.as_ref(), target.as_ref()),
                    inside_toggle: contains(toggle.as_ref(), target.as_ref()),
                });
            });

            let on_key = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
                on_event(PanelEvent::Key(ev.key()));
            });

            let listeners = Self { document, on_pointer, on_key };
            listeners
                .document
                .add_event_listener_with_callback(POINTER_EVENT, listeners.on_pointer.as_ref().unchecked_ref())
                .ok()?;
            listeners
                .document
                .add_event_listener_with_callback(KEY_EVENT, listeners.on_key.as_ref().unchecked_ref())
                .ok()?;
            Some(listeners)
        }
    }

    fn contains(element: Option<&web_sys::Element>, target: Option<&web_sys::Node>) -> bool {
        match (element, target) {
            (Some(element), Some(target)) => element.contains(Some(target)),
            _ => false,
        }
    }

    impl Drop for DismissListeners {
        fn drop(&mut self) {
            let _ = self
                .document
                .remove_event_listener_with_callback(POINTER_EVENT, self.on_pointer.as_ref().unchecked_ref());
            let _ = self
                .document
                .remove_event_listener_with_callback(KEY_EVENT, self.on_key.as_ref().unchecked_ref());
        }
    }
}
