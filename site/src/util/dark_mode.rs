//! Theme for the site chrome.
//!
//! The mode follows the system `prefers-color-scheme` setting and is mirrored
//! onto the `<html>` element as `data-theme`. The navigation toggle overrides
//! it for the current page session only; nothing is stored. Server rendering
//! always starts light.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

/// Value written to `data-theme` for a given mode.
#[must_use]
pub fn theme_name(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}

/// Whether the system color scheme asks for dark mode.
#[must_use]
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Set `data-theme` on the document element.
pub fn apply(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("data-theme", theme_name(dark));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark;
    }
}

/// Flip the mode and apply it.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    next
}
