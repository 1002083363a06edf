//! Content record types.
//!
//! DESIGN
//! ======
//! Every record is a compile-time literal, so fields borrow `'static` data and
//! the types are `Copy`. Listing records (`PostSummary`, `ProjectSummary`) are
//! kept separate from detail records (`BlogPost`, `Project`): listings carry
//! their own blurbs and may name slugs that have no detail page yet.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use time::Date;

/// Number of technology badges shown on a project card before `+N more`.
pub const TECH_PREVIEW_LIMIT: usize = 3;

/// Image shown when a record has no image of its own.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

// =============================================================================
// BLOG
// =============================================================================

/// A full blog post, keyed by `slug` in the detail table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Body text with `#`/`##`/`###` heading markers and fenced code blocks.
    pub content: &'static str,
    pub image: &'static str,
    pub date: Date,
    pub read_time: &'static str,
    pub category: &'static str,
    pub tags: &'static [&'static str],
}

impl BlogPost {
    #[must_use]
    pub fn image_src(&self) -> &'static str {
        image_or_placeholder(self.image)
    }

    /// Date as shown in the article header, e.g. `January 15, 2024`.
    #[must_use]
    pub fn long_date(&self) -> String {
        long_date(self.date)
    }
}

/// One entry in the blog listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostSummary {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub date: Date,
    pub read_time: &'static str,
    pub category: &'static str,
}

impl PostSummary {
    #[must_use]
    pub fn href(&self) -> String {
        format!("/blog/{}", self.slug)
    }

    #[must_use]
    pub fn image_src(&self) -> &'static str {
        image_or_placeholder(self.image)
    }

    /// Date as shown on listing cards, e.g. `1/15/2024`.
    #[must_use]
    pub fn short_date(&self) -> String {
        short_date(self.date)
    }
}

// =============================================================================
// PROJECTS
// =============================================================================

/// A full project write-up, keyed by `slug` in the detail table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Paragraphs separated by a blank line.
    pub long_description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub live_url: &'static str,
    pub github_url: &'static str,
    pub features: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub gallery: &'static [&'static str],
}

impl Project {
    #[must_use]
    pub fn image_src(&self) -> &'static str {
        image_or_placeholder(self.image)
    }

    /// Split the long description on blank lines, dropping empty pieces.
    #[must_use]
    pub fn paragraphs(&self) -> Vec<&'static str> {
        self.long_description
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }

    /// Alt text for the gallery image at zero-based `index`.
    #[must_use]
    pub fn gallery_alt(&self, index: usize) -> String {
        format!("{} screenshot {}", self.title, index + 1)
    }
}

/// One entry in the projects listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectSummary {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub live_url: &'static str,
    pub github_url: &'static str,
    pub featured: bool,
}

impl ProjectSummary {
    #[must_use]
    pub fn href(&self) -> String {
        format!("/projects/{}", self.slug)
    }

    #[must_use]
    pub fn image_src(&self) -> &'static str {
        image_or_placeholder(self.image)
    }

    /// Technologies shown as badges, plus how many were left out.
    #[must_use]
    pub fn technology_preview(&self) -> (&'static [&'static str], usize) {
        let shown = self.technologies.len().min(TECH_PREVIEW_LIMIT);
        (&self.technologies[..shown], self.technologies.len() - shown)
    }
}

// =============================================================================
// PROFILE
// =============================================================================

/// Site owner details shared by the hero, about, and contact pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub availability: &'static str,
    pub intro: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub resume_href: &'static str,
    pub socials: &'static [SocialLink],
    pub stats: &'static [Stat],
    pub skills: &'static [Skill],
    pub journey: &'static [&'static str],
    pub tech_groups: &'static [TechGroup],
    pub experience: &'static [Experience],
    pub contact_channels: &'static [ContactChannel],
    pub services: &'static [&'static str],
    pub faqs: &'static [Faq],
}

impl Profile {
    #[must_use]
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

impl SocialLink {
    /// `mailto:` links open in place; everything else opens a new tab.
    #[must_use]
    pub fn is_external(&self) -> bool {
        !self.href.starts_with("mailto:")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub title: &'static str,
    pub description: &'static str,
    /// CSS gradient modifier, e.g. `blue` renders `skill-icon--blue`.
    pub accent: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechGroup {
    pub category: &'static str,
    pub techs: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub title: &'static str,
    pub value: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

// =============================================================================
// HELPERS
// =============================================================================

fn image_or_placeholder(image: &'static str) -> &'static str {
    if image.is_empty() { PLACEHOLDER_IMAGE } else { image }
}

/// `January 15, 2024`.
#[must_use]
pub fn long_date(date: Date) -> String {
    format!("{} {}, {}", date.month(), date.day(), date.year())
}

/// `1/15/2024`.
#[must_use]
pub fn short_date(date: Date) -> String {
    format!("{}/{}/{}", u8::from(date.month()), date.day(), date.year())
}
