use super::*;

#[test]
fn back_links_return_to_listing() {
    assert_eq!(back_link(Some(ContentKind::Post)), ("/blog", "Back to Blog"));
    assert_eq!(back_link(Some(ContentKind::Project)), ("/projects", "Back to Projects"));
    assert_eq!(back_link(None), ("/", "Back Home"));
}
