//! Projects listing, split into featured and other work.

use content::ProjectSummary;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::app::use_content;
use crate::components::icon::{Icon, IconKind};
use crate::components::project_card::ProjectCard;
use crate::util::meta;

#[component]
fn ProjectSection(heading: &'static str, projects: Vec<&'static ProjectSummary>) -> impl IntoView {
    view! {
        <section class="section section--flush">
            <h2 class="section__title">{heading}</h2>
            <div class="grid grid--3">
                {projects
                    .into_iter()
                    .enumerate()
                    .map(|(index, project)| view! { <ProjectCard project=project index=index/> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let content = use_content();

    view! {
        <Title text=meta::page_title("Projects", content.profile())/>
        <div class="page">
            <header class="page__header fade-up">
                <span class="pill pop-in">
                    <Icon kind=IconKind::Sparkles size=16/>
                    "My work showcase"
                </span>
                <h1 class="gradient-text">"My Projects"</h1>
                <p>
                    "Here's a collection of projects I've worked on, showcasing my skills in web development, mobile apps, and more."
                </p>
            </header>
            <ProjectSection heading="Featured Projects" projects=content.featured_projects()/>
            <ProjectSection heading="Other Projects" projects=content.other_projects()/>
        </div>
    }
}
