//! Card primitives and the animated card wrapper.

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

use leptos::prelude::*;

/// Seconds between successive entrance animations in a list.
pub const STAGGER_STEP: f64 = 0.1;

/// Entrance delay for the `index`-th card of a list.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn stagger(index: usize) -> f64 {
    index as f64 * STAGGER_STEP
}

#[must_use]
pub fn animation_style(delay: f64) -> String {
    format!("animation-delay: {delay:.2}s")
}

#[must_use]
pub fn animated_card_class(hover: bool, extra: &str) -> String {
    let mut class = String::from("card animated-card");
    if hover {
        class.push_str(" animated-card--hover");
    }
    let extra = extra.trim();
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

fn with_extra(base: &str, extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() { base.to_owned() } else { format!("{base} {extra}") }
}

#[component]
pub fn Card(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=with_extra("card", &class)>{children()}</div> }
}

#[component]
pub fn CardHeader(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=with_extra("card__header", &class)>{children()}</div> }
}

#[component]
pub fn CardTitle(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <h3 class=with_extra("card__title", &class)>{children()}</h3> }
}

#[component]
pub fn CardDescription(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <p class=with_extra("card__description", &class)>{children()}</p> }
}

#[component]
pub fn CardContent(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=with_extra("card__content", &class)>{children()}</div> }
}

/// Card that fades up after `delay` seconds and lifts on hover.
#[component]
pub fn AnimatedCard(
    #[prop(optional)] delay: f64,
    #[prop(default = true)] hover: bool,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=animated_card_class(hover, &class) style=animation_style(delay)>
            {children()}
        </div>
    }
}
