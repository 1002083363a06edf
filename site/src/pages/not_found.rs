//! Not-found page for unknown routes and unknown slugs.

#[cfg(test)]
#[path = "not_found_test.rs"]
mod not_found_test;

use content::ContentKind;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::button::{ButtonVariant, LinkButton};
use crate::components::icon::{Icon, IconKind};
use crate::util::meta;

/// Where to send a visitor back to, per missing record kind.
#[must_use]
pub fn back_link(kind: Option<ContentKind>) -> (&'static str, &'static str) {
    match kind {
        Some(ContentKind::Post) => ("/blog", "Back to Blog"),
        Some(ContentKind::Project) => ("/projects", "Back to Projects"),
        None => ("/", "Back Home"),
    }
}

#[component]
pub fn NotFoundPage(#[prop(optional)] kind: Option<ContentKind>) -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(http::StatusCode::NOT_FOUND);
    }

    let (href, label) = back_link(kind);
    let message = match kind {
        Some(kind) => format!("The {kind} you're looking for doesn't exist or has been moved."),
        None => "The page you're looking for doesn't exist.".to_owned(),
    };

    view! {
        <Title text=meta::not_found_title(kind)/>
        <section class="not-found fade-up">
            <p class="not-found__code">"404"</p>
            <h1>{meta::not_found_title(kind)}</h1>
            <p class="not-found__message">{message}</p>
            <LinkButton href=href variant=ButtonVariant::Outline>
                <Icon kind=IconKind::ArrowLeft size=16/>
                {label}
            </LinkButton>
        </section>
    }
}
