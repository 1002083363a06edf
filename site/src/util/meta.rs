//! Document titles for each route.

#[cfg(test)]
#[path = "meta_test.rs"]
mod meta_test;

use content::{BlogPost, ContentKind, Profile, Project};

#[must_use]
pub fn home_title(profile: &Profile) -> String {
    format!("{} - {}", profile.name, profile.role)
}

/// `About - Priyav`.
#[must_use]
pub fn page_title(page: &str, profile: &Profile) -> String {
    format!("{page} - {}", profile.name)
}

#[must_use]
pub fn post_title(post: &BlogPost, profile: &Profile) -> String {
    format!("{} - {}'s Blog", post.title, profile.name)
}

#[must_use]
pub fn project_title(project: &Project, profile: &Profile) -> String {
    format!("{} - {}", project.title, profile.name)
}

#[must_use]
pub fn not_found_title(kind: Option<ContentKind>) -> String {
    match kind {
        Some(ContentKind::Post) => "Post Not Found".to_owned(),
        Some(ContentKind::Project) => "Project Not Found".to_owned(),
        None => "Page Not Found".to_owned(),
    }
}
