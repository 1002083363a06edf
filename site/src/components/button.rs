//! Buttons and link buttons, plain and animated.
//!
//! DESIGN
//! ======
//! Visual configuration is a closed set of enums mapped to CSS classes, so a
//! misspelled variant is a compile error rather than an unstyled element.
//! The animated wrapper composes [`LinkButton`] instead of forwarding
//! arbitrary attributes.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
    Ghost,
    Secondary,
}

impl ButtonVariant {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Default => "btn--default",
            Self::Outline => "btn--outline",
            Self::Ghost => "btn--ghost",
            Self::Secondary => "btn--secondary",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Sm => "btn--sm",
            Self::Md => "btn--md",
            Self::Lg => "btn--lg",
        }
    }
}

/// Hover glow for [`AnimatedButton`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GlowColor {
    #[default]
    Blue,
    Purple,
    Pink,
    Green,
}

impl GlowColor {
    #[must_use]
    pub fn shadow(self) -> &'static str {
        match self {
            Self::Blue => "0 0 20px rgba(59, 130, 246, 0.5)",
            Self::Purple => "0 0 20px rgba(147, 51, 234, 0.5)",
            Self::Pink => "0 0 20px rgba(236, 72, 153, 0.5)",
            Self::Green => "0 0 20px rgba(34, 197, 94, 0.5)",
        }
    }
}

/// Class list for a button of the given configuration.
#[must_use]
pub fn button_class(variant: ButtonVariant, size: ButtonSize, full_width: bool, extra: &str) -> String {
    let mut class = format!("btn {} {}", variant.class(), size.class());
    if full_width {
        class.push_str(" btn--full");
    }
    let extra = extra.trim();
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// `rel`/`target` pair for links leaving the site.
#[must_use]
pub fn external_attrs(external: bool) -> (Option<&'static str>, Option<&'static str>) {
    if external {
        (Some("_blank"), Some("noopener noreferrer"))
    } else {
        (None, None)
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] full_width: bool,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] title: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <button type="button" class=button_class(variant, size, full_width, &class) title=title>
            {children()}
        </button>
    }
}

/// A button-styled anchor.
#[component]
pub fn LinkButton(
    #[prop(into)] href: String,
    #[prop(optional)] external: bool,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] full_width: bool,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let (target, rel) = external_attrs(external);
    view! {
        <a href=href target=target rel=rel class=button_class(variant, size, full_width, &class)>
            {children()}
        </a>
    }
}

/// [`LinkButton`] inside a spring-hover wrapper with a colored glow.
#[component]
pub fn AnimatedButton(
    #[prop(into)] href: String,
    #[prop(optional)] glow: GlowColor,
    #[prop(optional)] external: bool,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] full_width: bool,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let wrapper_class = if full_width { "spring-hover spring-hover--full" } else { "spring-hover" };
    view! {
        <div class=wrapper_class style=format!("--glow: {}", glow.shadow())>
            <LinkButton
                href=href
                external=external
                variant=variant
                size=size
                full_width=full_width
                class=class
            >
                {children()}
            </LinkButton>
        </div>
    }
}
