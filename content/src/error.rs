//! Lookup errors surfaced to the page layer.

use std::fmt;

/// Which table a slug was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Post,
    Project,
}

impl ContentKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Project => "project",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("{kind} not found: {slug}")]
    NotFound { kind: ContentKind, slug: String },
    #[error("invalid slug: {0:?}")]
    InvalidSlug(String),
}

impl ContentError {
    /// Grepable code, mirroring the error-code convention used on the server.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "E_CONTENT_NOT_FOUND",
            Self::InvalidSlug(_) => "E_INVALID_SLUG",
        }
    }
}
