#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn server_render_defaults_to_light() {
    assert!(!system_prefers_dark());
}

#[test]
fn toggle_flips_mode() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[test]
fn theme_names_match_css_selectors() {
    assert_eq!(theme_name(true), "dark");
    assert_eq!(theme_name(false), "light");
}

#[test]
fn apply_is_callable_without_a_browser() {
    apply(true);
    apply(false);
}
