//! Home page hero section.

use content::Profile;
use leptos::prelude::*;

use crate::components::button::{AnimatedButton, ButtonSize, ButtonVariant, GlowColor};
use crate::components::icon::{Icon, IconKind};

#[component]
pub fn Hero(profile: &'static Profile) -> impl IntoView {
    let socials = profile
        .socials
        .iter()
        .filter(|social| social.label != "Twitter")
        .filter_map(|social| {
            IconKind::for_social(social.label).map(|kind| {
                let (target, rel) = crate::components::button::external_attrs(social.is_external());
                view! {
                    <a
                        href=social.href
                        target=target
                        rel=rel
                        class="hero__social"
                        aria-label=social.label
                    >
                        <Icon kind=kind size=24/>
                    </a>
                }
            })
        })
        .collect_view();

    view! {
        <section class="hero">
            <div class="hero__backdrop" aria-hidden="true">
                <span class="hero__orb hero__orb--blue"></span>
                <span class="hero__orb hero__orb--purple"></span>
            </div>
            <div class="hero__content fade-up">
                <span class="hero__badge">
                    <Icon kind=IconKind::Sparkles size=16/>
                    {profile.availability}
                </span>
                <h1 class="hero__title">
                    "Hi, I'm " <span class="gradient-text">{profile.name}</span>
                </h1>
                <p class="hero__role">{profile.role}</p>
                <p class="hero__tagline">{profile.tagline}</p>
                <div class="hero__actions">
                    <AnimatedButton href="/projects" size=ButtonSize::Lg glow=GlowColor::Blue>
                        "View My Work"
                        <Icon kind=IconKind::ArrowRight size=18/>
                    </AnimatedButton>
                    <AnimatedButton
                        href="/contact"
                        size=ButtonSize::Lg
                        variant=ButtonVariant::Outline
                        glow=GlowColor::Purple
                    >
                        "Get In Touch"
                    </AnimatedButton>
                </div>
                <div class="hero__socials">{socials}</div>
            </div>
            <a href="#featured" class="hero__scroll" aria-label="Scroll down">
                <Icon kind=IconKind::ArrowDown size=24/>
            </a>
        </section>
    }
}
