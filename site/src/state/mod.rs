//! Client-side UI state.
//!
//! The only mutable state in the site is the contact form; everything else
//! is read from the static content catalog.

pub mod contact;
