use super::*;

#[test]
fn validate_accepts_kebab_case() {
    assert!(validate("building-scalable-react-applications").is_ok());
    assert!(validate("web3").is_ok());
}

#[test]
fn validate_rejects_malformed_slugs() {
    for bad in ["", "-leading", "trailing-", "double--dash", "Upper", "has space", "../etc", "slash/x"] {
        assert_eq!(validate(bad), Err(ContentError::InvalidSlug(bad.to_owned())), "{bad}");
    }
}

#[test]
fn slugify_collapses_punctuation() {
    assert_eq!(slugify("1. Component Composition"), "1-component-composition");
    assert_eq!(slugify("Progressive Web Apps (PWAs) Evolution"), "progressive-web-apps-pwas-evolution");
    assert_eq!(slugify("  **Bold** heading!  "), "bold-heading");
}

#[test]
fn slugify_of_symbols_is_empty() {
    assert_eq!(slugify("!!! ---"), "");
}

#[test]
fn anchors_suffix_repeats() {
    let mut anchors = Anchors::new();
    assert_eq!(anchors.next("Conclusion"), "conclusion");
    assert_eq!(anchors.next("Conclusion"), "conclusion-2");
    assert_eq!(anchors.next("conclusion!"), "conclusion-3");
    assert_eq!(anchors.next("Other"), "other");
}

#[test]
fn anchors_fall_back_for_symbol_headings() {
    let mut anchors = Anchors::new();
    assert_eq!(anchors.next("***"), "section");
    assert_eq!(anchors.next("---"), "section-2");
}
