//! Single blog post at `/blog/{slug}`.

#[cfg(test)]
#[path = "blog_post_test.rs"]
mod blog_post_test;

use content::{BlogPost, ContentKind, Profile};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::app::use_content;
use crate::components::button::{Button, ButtonSize, ButtonVariant, LinkButton};
use crate::components::card::{Card, CardContent};
use crate::components::icon::{Icon, IconKind};
use crate::components::tag::{Tag, TagTone};
use crate::pages::not_found::NotFoundPage;
use crate::util::markdown::render_markdown;
use crate::util::meta;

const AUTHOR_BIO: &str = "Full Stack Developer passionate about creating digital experiences that matter. I write about web development, technology trends, and share insights from my journey.";

#[component]
pub fn BlogPostPage() -> impl IntoView {
    let content = use_content();
    let params = use_params_map();

    move || {
        let slug = params.read().get("slug").unwrap_or_default();
        match content.find_post(&slug) {
            Ok(post) => view! { <PostArticle post=post profile=content.profile()/> }.into_any(),
            Err(_) => view! { <NotFoundPage kind=ContentKind::Post/> }.into_any(),
        }
    }
}

#[component]
fn PostArticle(post: &'static BlogPost, profile: &'static Profile) -> impl IntoView {
    let rendered = render_markdown(post.content);
    let sections = rendered.outline();
    let body = rendered.html;
    let initial = profile.name.chars().next().unwrap_or('?').to_string();

    view! {
        <Title text=meta::post_title(post, profile)/>
        <div class="page page--narrow">
            <LinkButton href="/blog" variant=ButtonVariant::Ghost class="back-link">
                <Icon kind=IconKind::ArrowLeft size=16/>
                "Back to Blog"
            </LinkButton>

            <div class="post-layout">
                <article class="post fade-up">
                    <header class="post__header">
                        <Tag tone=TagTone::Accent>{post.category}</Tag>
                        <h1>{post.title}</h1>
                        <p class="post__lede">{post.description}</p>
                        <div class="meta-row">
                            <span class="meta-row__item">
                                <Icon kind=IconKind::Calendar size=16/>
                                <time datetime=post.date.to_string()>{post.long_date()}</time>
                            </span>
                            <span class="meta-row__item">
                                <Icon kind=IconKind::Clock size=16/>
                                {post.read_time}
                            </span>
                        </div>
                        <div class="post__actions">
                            <Button variant=ButtonVariant::Outline size=ButtonSize::Sm title="Share">
                                <Icon kind=IconKind::Share size=16/>
                                "Share"
                            </Button>
                            <Button variant=ButtonVariant::Outline size=ButtonSize::Sm title="Bookmark">
                                <Icon kind=IconKind::Bookmark size=16/>
                                "Bookmark"
                            </Button>
                        </div>
                    </header>

                    <div class="post__image">
                        <img src=post.image_src() alt=post.title/>
                    </div>

                    <div class="prose" inner_html=body></div>

                    <footer class="post__tags">
                        <h3>"Tags"</h3>
                        <div class="tag-list">
                            {post.tags.iter().map(|tag| view! { <Tag>{*tag}</Tag> }).collect_view()}
                        </div>
                    </footer>
                </article>

                {(!sections.is_empty())
                    .then(|| {
                        view! {
                            <aside class="post-outline">
                                <h2>"On this page"</h2>
                                <ul>
                                    {sections
                                        .into_iter()
                                        .map(|entry| {
                                            view! {
                                                <li class=format!("post-outline__item post-outline__item--h{}", entry.level)>
                                                    <a href=format!("#{}", entry.anchor)>{entry.text}</a>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </aside>
                        }
                    })}
            </div>

            <Card class="author-card">
                <CardContent>
                    <div class="author-card__body">
                        <div class="author-card__avatar">{initial}</div>
                        <div>
                            <h3>{profile.name}</h3>
                            <p>{AUTHOR_BIO}</p>
                            <div class="author-card__links">
                                <LinkButton href="/about" variant=ButtonVariant::Outline size=ButtonSize::Sm>
                                    "Learn More"
                                </LinkButton>
                                <LinkButton href="/blog" variant=ButtonVariant::Outline size=ButtonSize::Sm>
                                    "More Posts"
                                </LinkButton>
                            </div>
                        </div>
                    </div>
                </CardContent>
            </Card>
        </div>
    }
}
