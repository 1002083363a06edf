//! Small pill labels for categories, technologies and tags.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TagTone {
    #[default]
    Neutral,
    Accent,
    Outline,
}

impl TagTone {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Neutral => "tag",
            Self::Accent => "tag tag--accent",
            Self::Outline => "tag tag--outline",
        }
    }
}

#[component]
pub fn Tag(#[prop(optional)] tone: TagTone, children: Children) -> impl IntoView {
    view! { <span class=tone.class()>{children()}</span> }
}
