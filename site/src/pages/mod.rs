//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page reads the content provider from context, resolves any route
//! slug, and delegates rendering details to `components`.

pub mod about;
pub mod blog;
pub mod blog_post;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod project_detail;
pub mod projects;
