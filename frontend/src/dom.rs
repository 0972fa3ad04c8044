use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Window,
};

use crate::anchor::Anchor;
use crate::error::DomError;

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn scroll_y() -> Result<f64, DomError> {
    window()?
        .scroll_y()
        .map_err(|e| DomError::js("read scroll offset", e))
}

/// A listener on `window` that is removed when dropped.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    /// Registers a passive listener: it never calls `preventDefault`, so the
    /// browser does not wait on it before scrolling.
    pub fn passive<F>(event: &'static str, callback: F) -> Result<Self, DomError>
    where
        F: FnMut(Event) + 'static,
    {
        let window = window()?;
        let callback = Closure::<dyn FnMut(Event)>::new(callback);

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|e| DomError::js("add window listener", e))?;

        Ok(Self { window, event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            warn!("{}", DomError::js("remove window listener", e));
        }
    }
}

pub fn scroll_to_anchor(anchor: Anchor) -> Result<(), DomError> {
    let document = window()?.document().ok_or(DomError::NoDocument)?;
    let element = document
        .get_element_by_id(anchor.id())
        .ok_or_else(|| DomError::MissingElement(anchor.id().to_string()))?;

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

pub fn scroll_to_top() -> Result<(), DomError> {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Opens `url` in a new browsing context.
pub fn open_external(url: &str) -> Result<(), DomError> {
    window()?
        .open_with_url_and_target(url, "_blank")
        .map(|_| ())
        .map_err(|e| DomError::js("open external link", e))
}

/// Smooth-scrolls to `anchor`, logging instead of failing.
pub fn go_to(anchor: Anchor) {
    if let Err(e) = scroll_to_anchor(anchor) {
        warn!("could not scroll to #{}: {}", anchor.id(), e);
    }
}
