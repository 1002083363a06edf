//! Project case study at `/projects/{slug}`.

use content::{ContentKind, Profile, Project};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::app::use_content;
use crate::components::button::{AnimatedButton, ButtonSize, ButtonVariant, GlowColor, LinkButton};
use crate::components::card::{Card, CardContent};
use crate::components::icon::{Icon, IconKind};
use crate::components::tag::Tag;
use crate::pages::not_found::NotFoundPage;
use crate::util::meta;

#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let content = use_content();
    let params = use_params_map();

    move || {
        let slug = params.read().get("slug").unwrap_or_default();
        match content.find_project(&slug) {
            Ok(project) => view! { <ProjectCaseStudy project=project profile=content.profile()/> }.into_any(),
            Err(_) => view! { <NotFoundPage kind=ContentKind::Project/> }.into_any(),
        }
    }
}

#[component]
fn CheckList(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="check-list">
            {items
                .iter()
                .map(|item| {
                    view! {
                        <li>
                            <Icon kind=IconKind::Check size=16 class="check-list__mark"/>
                            <span>{*item}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[component]
fn ProjectCaseStudy(project: &'static Project, profile: &'static Profile) -> impl IntoView {
    view! {
        <Title text=meta::project_title(project, profile)/>
        <div class="page">
            <LinkButton href="/projects" variant=ButtonVariant::Ghost class="back-link">
                <Icon kind=IconKind::ArrowLeft size=16/>
                "Back to Projects"
            </LinkButton>

            <header class="project__header fade-up">
                <h1>{project.title}</h1>
                <p class="project__lede">{project.description}</p>
                <div class="project__actions">
                    <AnimatedButton href=project.live_url external=true glow=GlowColor::Blue>
                        <Icon kind=IconKind::ExternalLink size=16/>
                        "Live Demo"
                    </AnimatedButton>
                    <AnimatedButton
                        href=project.github_url
                        external=true
                        variant=ButtonVariant::Outline
                        glow=GlowColor::Purple
                    >
                        <Icon kind=IconKind::Github size=16/>
                        "View Code"
                    </AnimatedButton>
                </div>
            </header>

            <div class="project__hero-image">
                <img src=project.image_src() alt=project.title/>
            </div>

            <div class="project-layout">
                <div class="project-layout__main">
                    <section>
                        <h2>"About This Project"</h2>
                        {project.paragraphs().into_iter().map(|p| view! { <p class="muted">{p}</p> }).collect_view()}
                    </section>
                    <section>
                        <h2>"Key Features"</h2>
                        <CheckList items=project.features/>
                    </section>
                    <section>
                        <h2>"Technical Challenges"</h2>
                        <CheckList items=project.challenges/>
                    </section>
                    <section>
                        <h2>"Project Gallery"</h2>
                        <div class="gallery">
                            {project
                                .gallery
                                .iter()
                                .enumerate()
                                .map(|(index, image)| {
                                    let src = if image.is_empty() { content::model::PLACEHOLDER_IMAGE } else { *image };
                                    view! {
                                        <img src=src alt=project.gallery_alt(index) loading="lazy"/>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </section>
                </div>

                <aside class="project-layout__side">
                    <Card>
                        <CardContent>
                            <h3>"Technologies Used"</h3>
                            <div class="tag-list">
                                {project.technologies.iter().map(|tech| view! { <Tag>{*tech}</Tag> }).collect_view()}
                            </div>
                        </CardContent>
                    </Card>
                    <Card>
                        <CardContent>
                            <h3>"Project Links"</h3>
                            <div class="stack">
                                <LinkButton
                                    href=project.live_url
                                    external=true
                                    variant=ButtonVariant::Outline
                                    size=ButtonSize::Sm
                                    full_width=true
                                >
                                    <Icon kind=IconKind::ExternalLink size=16/>
                                    "Live Demo"
                                </LinkButton>
                                <LinkButton
                                    href=project.github_url
                                    external=true
                                    variant=ButtonVariant::Outline
                                    size=ButtonSize::Sm
                                    full_width=true
                                >
                                    <Icon kind=IconKind::Github size=16/>
                                    "Source Code"
                                </LinkButton>
                            </div>
                        </CardContent>
                    </Card>
                </aside>
            </div>
        </div>
    }
}
