use super::*;

#[test]
fn home_matches_only_root() {
    assert!(is_active("/", "/"));
    assert!(!is_active("/about", "/"));
}

#[test]
fn sections_match_their_detail_pages() {
    assert!(is_active("/blog", "/blog"));
    assert!(is_active("/blog/mastering-typescript", "/blog"));
    assert!(is_active("/projects/", "/projects"));
}

#[test]
fn prefix_without_separator_does_not_match() {
    assert!(!is_active("/blogroll", "/blog"));
    assert!(!is_active("/contact", "/about"));
}

#[test]
fn every_nav_link_is_active_on_itself() {
    for (_, href) in NAV_LINKS {
        assert!(is_active(href, href), "{href}");
    }
}
