//! Utility helpers shared across site UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and string building
//! from page and component logic to improve reuse and testability.

pub mod dark_mode;
pub mod markdown;
pub mod meta;
