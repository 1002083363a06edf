//! Project listing card.

#[cfg(test)]
#[path = "project_card_test.rs"]
mod project_card_test;

use content::ProjectSummary;
use leptos::prelude::*;

use crate::components::button::{AnimatedButton, ButtonSize, ButtonVariant, GlowColor};
use crate::components::card::{AnimatedCard, CardContent, CardDescription, CardHeader, CardTitle, stagger};
use crate::components::icon::{Icon, IconKind};
use crate::components::tag::{Tag, TagTone};

/// Label for technologies beyond the preview, e.g. `+2 more`.
#[must_use]
pub fn more_label(hidden: usize) -> Option<String> {
    (hidden > 0).then(|| format!("+{hidden} more"))
}

#[component]
pub fn ProjectCard(project: &'static ProjectSummary, index: usize) -> impl IntoView {
    let (preview, hidden) = project.technology_preview();

    view! {
        <AnimatedCard delay=stagger(index) class="project-card">
            <div class="card__media">
                <img src=project.image_src() alt=project.title loading="lazy"/>
                {project.featured.then(|| view! { <span class="card__badge">"Featured"</span> })}
            </div>
            <CardHeader>
                <CardTitle>{project.title}</CardTitle>
                <CardDescription>{project.description}</CardDescription>
            </CardHeader>
            <CardContent>
                <div class="tag-list">
                    {preview.iter().map(|tech| view! { <Tag tone=TagTone::Neutral>{*tech}</Tag> }).collect_view()}
                    {more_label(hidden).map(|label| view! { <Tag tone=TagTone::Outline>{label}</Tag> })}
                </div>
                <div class="project-card__links">
                    <AnimatedButton href=project.live_url external=true size=ButtonSize::Sm glow=GlowColor::Blue>
                        <Icon kind=IconKind::ExternalLink size=16/>
                        "Live Demo"
                    </AnimatedButton>
                    <AnimatedButton
                        href=project.github_url
                        external=true
                        size=ButtonSize::Sm
                        variant=ButtonVariant::Outline
                        glow=GlowColor::Purple
                    >
                        <Icon kind=IconKind::Github size=16/>
                        "Code"
                    </AnimatedButton>
                </div>
                <AnimatedButton href=project.href() size=ButtonSize::Sm variant=ButtonVariant::Ghost full_width=true>
                    "View Details"
                </AnimatedButton>
            </CardContent>
        </AnimatedCard>
    }
}
