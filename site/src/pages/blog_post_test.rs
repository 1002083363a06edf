use content::{ContentSource, StaticContent};

use crate::util::markdown::render_markdown;

#[test]
fn outline_lists_sections_below_the_title() {
    let post = StaticContent::builtin().post("building-scalable-react-applications").unwrap();
    let sections = render_markdown(post.content).outline();
    let top: Vec<_> = sections.iter().filter(|e| e.level == 2).map(|e| e.text.as_str()).collect();
    assert_eq!(
        top,
        ["Component Architecture", "State Management", "Performance Optimization", "Testing Strategy", "Conclusion"]
    );
    assert!(sections.iter().all(|e| (2..=3).contains(&e.level)));
}

#[test]
fn code_inside_fences_never_becomes_a_section() {
    let post = StaticContent::builtin().post("building-scalable-react-applications").unwrap();
    let sections = render_markdown(post.content).outline();
    assert!(sections.iter().all(|e| !e.text.contains("Instead of this")));
}
