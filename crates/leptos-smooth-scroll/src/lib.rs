//! Leptos Smooth-Scroll Utilities
//!
//! In-page anchor navigation for Leptos.
//! Fragment links (`href="#section"`) scroll their target into view smoothly
//! instead of jumping.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Returns the CSS selector for a fragment href, or `None` when the href
/// does not point inside the page.
///
/// A bare `#` has no target and is rejected as well.
pub fn fragment_selector(href: &str) -> Option<&str> {
    let href = href.trim();
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() && !id.contains(char::is_whitespace) => Some(href),
        _ => None,
    }
}

/// Scroll the first element matching `selector` into view.
/// Returns false when no such element exists.
pub fn scroll_to_selector(selector: &str) -> bool {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    match doc.query_selector(selector) {
        Ok(Some(target)) => {
            let opts = web_sys::ScrollIntoViewOptions::new();
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&opts);
            true
        }
        Ok(None) => false,
        Err(_) => {
            log::debug!("[scroll] invalid selector {}", selector);
            false
        }
    }
}

/// Click handler for anchors.
///
/// Reads `href` from the element the listener is attached to, so one handler
/// serves every link. Non-fragment links keep their default behavior.
pub fn on_anchor_click(ev: web_sys::MouseEvent) {
    let href = ev
        .current_target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.get_attribute("href"));
    let Some(href) = href else { return };

    if let Some(selector) = fragment_selector(&href) {
        ev.prevent_default();
        if !scroll_to_selector(selector) {
            log::debug!("[scroll] no target for {}", selector);
        }
    }
}

/// Anchor that scrolls smoothly to an in-page target
#[component]
pub fn AnchorLink(
    #[prop(into)] href: String,
    children: Children,
) -> impl IntoView {
    view! {
        <a href=href on:click=on_anchor_click>
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_selector() {
        assert_eq!(fragment_selector("#products"), Some("#products"));
        assert_eq!(fragment_selector("  #about "), Some("#about"));
        assert_eq!(fragment_selector("#"), None);
        assert_eq!(fragment_selector("/login"), None);
        assert_eq!(fragment_selector("https://example.com/#top"), None);
        assert_eq!(fragment_selector("#two words"), None);
    }
}
