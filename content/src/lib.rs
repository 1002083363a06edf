//! Read-only content provider for the portfolio site.
//!
//! This crate owns every record the pages render: blog posts, projects, and
//! the site owner's profile. Records are compile-time literals exposed through
//! the [`ContentSource`] trait so the page layer queries by slug and never
//! reaches into the static tables directly.

pub mod catalog;
pub mod error;
pub mod markup;
pub mod model;
pub mod slug;

mod posts;
mod profile;
mod projects;

pub use catalog::{ContentSource, StaticContent};
pub use error::{ContentError, ContentKind};
pub use markup::Block;
pub use model::{
    BlogPost, ContactChannel, Experience, Faq, PostSummary, Profile, Project, ProjectSummary, Skill, SocialLink, Stat,
    TechGroup,
};
