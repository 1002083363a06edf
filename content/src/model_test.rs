use time::macros::date;

use super::*;
use crate::catalog::{ContentSource, StaticContent};

fn project() -> &'static Project {
    StaticContent::builtin().project("ecommerce-platform").unwrap()
}

#[test]
fn long_and_short_dates() {
    assert_eq!(long_date(date!(2024 - 01 - 15)), "January 15, 2024");
    assert_eq!(short_date(date!(2023 - 12 - 05)), "12/5/2023");
}

#[test]
fn technology_preview_caps_at_three() {
    let summary = StaticContent::builtin().project_summaries()[0];
    let (shown, hidden) = summary.technology_preview();
    assert_eq!(shown, &["React", "Node.js", "MongoDB"]);
    assert_eq!(hidden, 3);
}

#[test]
fn technology_preview_with_few_items_hides_none() {
    let summary = ProjectSummary { technologies: &["Rust"], ..StaticContent::builtin().project_summaries()[0] };
    assert_eq!(summary.technology_preview(), (&["Rust"][..], 0));
}

#[test]
fn long_description_splits_on_blank_lines() {
    let paragraphs = project().paragraphs();
    assert_eq!(paragraphs.len(), 2);
    assert!(paragraphs[0].starts_with("This full-stack e-commerce platform"));
    assert!(paragraphs[1].starts_with("The platform includes"));
}

#[test]
fn gallery_alt_is_one_based() {
    assert_eq!(project().gallery_alt(0), "E-Commerce Platform screenshot 1");
}

#[test]
fn empty_image_falls_back_to_placeholder() {
    let summary = PostSummary { image: "", ..StaticContent::builtin().post_summaries()[0] };
    assert_eq!(summary.image_src(), PLACEHOLDER_IMAGE);
    assert_eq!(summary.href(), "/blog/building-scalable-react-applications");
}

#[test]
fn mailto_links_are_not_external() {
    let profile = StaticContent::builtin().profile();
    let email = profile.socials.iter().find(|s| s.label == "Email").unwrap();
    assert!(!email.is_external());
    assert_eq!(profile.mailto(), "mailto:priyav@example.com");
}
