//! About page: stats, skills, journey, technologies and experience.

#[cfg(test)]
#[path = "about_test.rs"]
mod about_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::app::use_content;
use crate::components::button::{AnimatedButton, GlowColor};
use crate::components::card::{AnimatedCard, CardContent, stagger};
use crate::components::icon::{Icon, IconKind};
use crate::components::tag::Tag;
use crate::util::meta;

pub fn skill_icon(title: &str) -> IconKind {
    match title {
        "Design" => IconKind::Palette,
        "Performance" => IconKind::Zap,
        "Collaboration" => IconKind::Users,
        _ => IconKind::Code,
    }
}

pub fn stat_icon(label: &str) -> IconKind {
    let label = label.to_ascii_lowercase();
    if label.contains("coffee") {
        IconKind::Coffee
    } else if label.contains("client") {
        IconKind::Users
    } else if label.contains("code") {
        IconKind::Code
    } else {
        IconKind::Award
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    let profile = use_content().profile();

    view! {
        <Title text=meta::page_title("About", profile)/>
        <div class="page">
            <header class="page__header fade-up">
                <span class="pill pop-in">
                    <Icon kind=IconKind::Sparkles size=16/>
                    "Get to know me"
                </span>
                <h1 class="gradient-text">"About Me"</h1>
                <p>{profile.intro}</p>
            </header>

            <section class="grid grid--4">
                {profile
                    .stats
                    .iter()
                    .enumerate()
                    .map(|(index, stat)| {
                        view! {
                            <AnimatedCard delay=stagger(index) class="stat">
                                <Icon kind=stat_icon(stat.label) size=28 class="stat__icon"/>
                                <div class="stat__value gradient-text">{stat.value}</div>
                                <div class="stat__label">{stat.label}</div>
                            </AnimatedCard>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="grid grid--4">
                {profile
                    .skills
                    .iter()
                    .enumerate()
                    .map(|(index, skill)| {
                        view! {
                            <AnimatedCard delay=stagger(index) class="skill">
                                <CardContent>
                                    <div class=format!("skill__icon skill__icon--{}", skill.accent)>
                                        <Icon kind=skill_icon(skill.title) size=28/>
                                    </div>
                                    <h3>{skill.title}</h3>
                                    <p class="muted">{skill.description}</p>
                                </CardContent>
                            </AnimatedCard>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="split">
                <div>
                    <h2 class="gradient-text">"My Journey"</h2>
                    {profile.journey.iter().map(|p| view! { <p class="muted">{*p}</p> }).collect_view()}
                    <AnimatedButton href=profile.resume_href glow=GlowColor::Blue>
                        <Icon kind=IconKind::Download size=16/>
                        "Download Resume"
                    </AnimatedButton>
                </div>
                <AnimatedCard hover=false class="tech-groups">
                    <CardContent>
                        <h3>"Technologies I work with"</h3>
                        {profile
                            .tech_groups
                            .iter()
                            .map(|group| {
                                view! {
                                    <div class="tech-group">
                                        <h4>{group.category} ":"</h4>
                                        <div class="tag-list">
                                            {group.techs.iter().map(|tech| view! { <Tag>{*tech}</Tag> }).collect_view()}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </CardContent>
                </AnimatedCard>
            </section>

            <section class="section section--flush">
                <h2 class="section__title section__title--center gradient-text">"Experience"</h2>
                <div class="timeline">
                    {profile
                        .experience
                        .iter()
                        .enumerate()
                        .map(|(index, exp)| {
                            view! {
                                <AnimatedCard delay=stagger(index) class="timeline__entry">
                                    <CardContent>
                                        <div class="timeline__head">
                                            <div>
                                                <h3>{exp.title}</h3>
                                                <p class="accent">{exp.company}</p>
                                            </div>
                                            <span class="timeline__period">
                                                <Icon kind=IconKind::Calendar size=14/>
                                                {exp.period}
                                            </span>
                                        </div>
                                        <p class="muted">{exp.description}</p>
                                        <div class="tag-list">
                                            {exp
                                                .achievements
                                                .iter()
                                                .map(|a| view! { <Tag>{*a}</Tag> })
                                                .collect_view()}
                                        </div>
                                    </CardContent>
                                </AnimatedCard>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
