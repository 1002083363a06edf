//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Primitives (`button`, `card`, `field`, `tag`, `icon`) carry typed
//! configuration; listing cards and site chrome (`navigation`, `hero`, `footer`) compose them.

pub mod button;
pub mod card;
pub mod field;
pub mod footer;
pub mod hero;
pub mod icon;
pub mod navigation;
pub mod post_card;
pub mod project_card;
pub mod tag;
