//! Landing page: hero, featured work and latest writing.

use leptos::prelude::*;

use crate::app::use_content;
use crate::components::button::{AnimatedButton, ButtonVariant, GlowColor};
use crate::components::hero::Hero;
use crate::components::post_card::PostCard;
use crate::components::project_card::ProjectCard;

/// Number of posts previewed on the landing page.
pub const LATEST_POSTS: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    let content = use_content();
    let featured = content.featured_projects();
    let latest = &content.post_summaries()[..LATEST_POSTS.min(content.post_summaries().len())];

    view! {
        <div class="page page--home">
            <Hero profile=content.profile()/>

            <section id="featured" class="section">
                <div class="section__header">
                    <h2>"Featured Projects"</h2>
                    <p>"A few things I've built recently."</p>
                </div>
                <div class="grid grid--3">
                    {featured
                        .into_iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard project=project index=index/> })
                        .collect_view()}
                </div>
                <div class="section__footer">
                    <AnimatedButton href="/projects" variant=ButtonVariant::Outline glow=GlowColor::Blue>
                        "All Projects"
                    </AnimatedButton>
                </div>
            </section>

            <section class="section section--muted">
                <div class="section__header">
                    <h2>"Latest Blog Posts"</h2>
                    <p>
                        "I write about web development, technology trends, and share insights from my journey as a developer."
                    </p>
                </div>
                <div class="grid grid--3">
                    {latest
                        .iter()
                        .enumerate()
                        .map(|(index, post)| view! { <PostCard post=post index=index/> })
                        .collect_view()}
                </div>
                <div class="section__footer">
                    <AnimatedButton href="/blog" variant=ButtonVariant::Outline glow=GlowColor::Purple>
                        "View All Posts"
                    </AnimatedButton>
                </div>
            </section>
        </div>
    }
}
