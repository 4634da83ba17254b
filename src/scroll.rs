//! Smooth scrolling to the response panel
//!
//! The documentation site may or may not ship a smooth-scroll helper, so
//! the preview takes the scroller as an injected collaborator; when none
//! is supplied the scroll is skipped.

use web_sys::Element;

/// Scrolls an element into view with a pixel offset from the viewport top.
pub trait ResponseScroller: Send + Sync {
    fn scroll_to(&self, target: &Element, offset: f64);
}

/// Native `window.scrollTo` with smooth behavior.
pub struct WindowScroller;

impl ResponseScroller for WindowScroller {
    fn scroll_to(&self, target: &Element, offset: f64) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let top = target.get_bounding_client_rect().top()
            + window.scroll_y().unwrap_or(0.0)
            + offset;
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
