//! Slug-keyed access to the content tables.
//!
//! DESIGN
//! ======
//! `ContentSource` is the only door the page layer uses. Listings are plain
//! slices in source order; detail records are looked up through a slug index
//! built once over the static tables. A file-backed or CMS-backed provider
//! would implement the same trait.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{ContentError, ContentKind};
use crate::model::{BlogPost, PostSummary, Profile, Project, ProjectSummary};
use crate::{posts, profile, projects, slug};

/// Read-only content provider queried by the page layer.
pub trait ContentSource: Send + Sync {
    /// Blog listing entries in source order.
    fn post_summaries(&self) -> &[PostSummary];

    /// Detail record for `slug`, if one exists.
    fn post(&self, slug: &str) -> Option<&BlogPost>;

    /// Projects listing entries in source order.
    fn project_summaries(&self) -> &[ProjectSummary];

    /// Detail record for `slug`, if one exists.
    fn project(&self, slug: &str) -> Option<&Project>;

    fn profile(&self) -> &Profile;

    /// Slugs that have a post detail page, in source order.
    fn post_slugs(&self) -> Vec<&str>;

    /// Slugs that have a project detail page, in source order.
    fn project_slugs(&self) -> Vec<&str>;

    /// Look up a post, rejecting malformed slugs before touching the index.
    ///
    /// # Errors
    ///
    /// [`ContentError::InvalidSlug`] for a malformed slug,
    /// [`ContentError::NotFound`] when no post has that slug.
    fn find_post(&self, slug: &str) -> Result<&BlogPost, ContentError> {
        slug::validate(slug)?;
        self.post(slug)
            .ok_or_else(|| ContentError::NotFound { kind: ContentKind::Post, slug: slug.to_owned() })
    }

    /// Look up a project, rejecting malformed slugs before touching the index.
    ///
    /// # Errors
    ///
    /// [`ContentError::InvalidSlug`] for a malformed slug,
    /// [`ContentError::NotFound`] when no project has that slug.
    fn find_project(&self, slug: &str) -> Result<&Project, ContentError> {
        slug::validate(slug)?;
        self.project(slug)
            .ok_or_else(|| ContentError::NotFound { kind: ContentKind::Project, slug: slug.to_owned() })
    }

    /// Featured listing entries, source order preserved.
    fn featured_projects(&self) -> Vec<&ProjectSummary> {
        self.project_summaries().iter().filter(|p| p.featured).collect()
    }

    /// Non-featured listing entries, source order preserved.
    fn other_projects(&self) -> Vec<&ProjectSummary> {
        self.project_summaries().iter().filter(|p| !p.featured).collect()
    }
}

/// Content compiled into the binary.
pub struct StaticContent {
    post_summaries: &'static [PostSummary],
    posts: &'static [BlogPost],
    post_index: HashMap<&'static str, usize>,
    project_summaries: &'static [ProjectSummary],
    projects: &'static [Project],
    project_index: HashMap<&'static str, usize>,
    profile: &'static Profile,
}

static BUILTIN: LazyLock<StaticContent> = LazyLock::new(|| {
    StaticContent::new(
        posts::POST_SUMMARIES,
        posts::POSTS,
        projects::PROJECT_SUMMARIES,
        projects::PROJECTS,
        &profile::PROFILE,
    )
});

impl StaticContent {
    /// Build a provider over the given tables. Later duplicates of a slug
    /// are ignored so the first record in source order wins.
    #[must_use]
    pub fn new(
        post_summaries: &'static [PostSummary],
        posts: &'static [BlogPost],
        project_summaries: &'static [ProjectSummary],
        projects: &'static [Project],
        profile: &'static Profile,
    ) -> Self {
        Self {
            post_summaries,
            posts,
            post_index: index_by_slug(posts.iter().map(|p| p.slug)),
            project_summaries,
            projects,
            project_index: index_by_slug(projects.iter().map(|p| p.slug)),
            profile,
        }
    }

    /// The site's own content.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }
}

impl ContentSource for StaticContent {
    fn post_summaries(&self) -> &[PostSummary] {
        self.post_summaries
    }

    fn post(&self, slug: &str) -> Option<&BlogPost> {
        self.post_index.get(slug).map(|&i| &self.posts[i])
    }

    fn project_summaries(&self) -> &[ProjectSummary] {
        self.project_summaries
    }

    fn project(&self, slug: &str) -> Option<&Project> {
        self.project_index.get(slug).map(|&i| &self.projects[i])
    }

    fn profile(&self) -> &Profile {
        self.profile
    }

    fn post_slugs(&self) -> Vec<&str> {
        self.posts.iter().map(|p| p.slug).collect()
    }

    fn project_slugs(&self) -> Vec<&str> {
        self.projects.iter().map(|p| p.slug).collect()
    }
}

fn index_by_slug(slugs: impl Iterator<Item = &'static str>) -> HashMap<&'static str, usize> {
    let mut index = HashMap::new();
    for (i, slug) in slugs.enumerate() {
        index.entry(slug).or_insert(i);
    }
    index
}
