use std::collections::HashSet;

use super::*;

fn content() -> &'static StaticContent {
    StaticContent::builtin()
}

#[test]
fn every_known_post_slug_resolves_to_its_title() {
    for slug in content().post_slugs() {
        let post = content().find_post(slug).unwrap();
        assert_eq!(post.slug, slug);
        assert!(!post.title.is_empty());
    }
    assert_eq!(
        content().find_post("future-of-web-development").unwrap().title,
        "The Future of Web Development"
    );
}

#[test]
fn every_known_project_slug_resolves_to_its_title() {
    for slug in content().project_slugs() {
        let project = content().find_project(slug).unwrap();
        assert_eq!(project.slug, slug);
    }
    assert_eq!(content().find_project("ecommerce-platform").unwrap().title, "E-Commerce Platform");
}

#[test]
fn unknown_slug_is_not_found() {
    assert_eq!(
        content().find_post("no-such-post"),
        Err(ContentError::NotFound { kind: ContentKind::Post, slug: "no-such-post".into() })
    );
    assert_eq!(
        content().find_project("no-such-project"),
        Err(ContentError::NotFound { kind: ContentKind::Project, slug: "no-such-project".into() })
    );
}

#[test]
fn malformed_slug_is_rejected_before_lookup() {
    assert_eq!(content().find_post("../secret"), Err(ContentError::InvalidSlug("../secret".into())));
    assert_eq!(content().find_project("Ecommerce"), Err(ContentError::InvalidSlug("Ecommerce".into())));
}

#[test]
fn listed_post_without_detail_is_not_found() {
    let listed: Vec<&str> = content().post_summaries().iter().map(|p| p.slug).collect();
    assert!(listed.contains(&"mastering-typescript"));
    assert!(content().post("mastering-typescript").is_none());
}

#[test]
fn listings_keep_source_order_and_size() {
    let posts: Vec<&str> = content().post_summaries().iter().map(|p| p.slug).collect();
    assert_eq!(posts, vec![
        "building-scalable-react-applications",
        "future-of-web-development",
        "mastering-typescript",
        "modern-css-techniques",
        "api-design-best-practices",
        "performance-optimization-tips",
    ]);
    assert_eq!(content().project_summaries().len(), 6);
    assert_eq!(content().project_summaries()[0].slug, "ecommerce-platform");
}

#[test]
fn featured_split_partitions_in_source_order() {
    let featured: Vec<&str> = content().featured_projects().iter().map(|p| p.slug).collect();
    let other: Vec<&str> = content().other_projects().iter().map(|p| p.slug).collect();
    assert_eq!(featured, vec!["ecommerce-platform", "task-management-app", "social-media-app"]);
    assert_eq!(other, vec!["weather-dashboard", "blog-platform", "portfolio-website"]);
    assert_eq!(featured.len() + other.len(), content().project_summaries().len());
}

#[test]
fn all_slugs_are_valid_and_detail_slugs_unique() {
    let listing_slugs = content()
        .post_summaries()
        .iter()
        .map(|p| p.slug)
        .chain(content().project_summaries().iter().map(|p| p.slug));
    for slug in listing_slugs {
        assert!(slug::validate(slug).is_ok(), "{slug}");
    }

    let posts: HashSet<&str> = content().post_slugs().into_iter().collect();
    assert_eq!(posts.len(), content().post_slugs().len());
    let projects: HashSet<&str> = content().project_slugs().into_iter().collect();
    assert_eq!(projects.len(), content().project_slugs().len());
}

#[test]
fn first_duplicate_slug_wins() {
    let base = posts::POSTS[0];
    let dupes: &'static [BlogPost] =
        Box::leak(vec![BlogPost { title: "First", ..base }, BlogPost { title: "Second", ..base }].into_boxed_slice());
    let content = StaticContent::new(&[], dupes, &[], &[], &profile::PROFILE);
    assert_eq!(content.post(base.slug).map(|p| p.title), Some("First"));
}

#[test]
fn works_through_a_trait_object() {
    let source: &dyn ContentSource = content();
    assert_eq!(source.profile().name, "Priyav");
    assert_eq!(source.post_summaries().len(), 6);
}
