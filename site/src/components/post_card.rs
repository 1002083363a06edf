//! Blog listing card.

use content::PostSummary;
use leptos::prelude::*;

use crate::components::button::{ButtonVariant, LinkButton};
use crate::components::card::{AnimatedCard, CardContent, CardDescription, CardHeader, CardTitle, stagger};
use crate::components::icon::{Icon, IconKind};

#[component]
pub fn PostCard(post: &'static PostSummary, index: usize) -> impl IntoView {
    view! {
        <AnimatedCard delay=stagger(index) class="post-card">
            <div class="card__media">
                <img src=post.image_src() alt=post.title loading="lazy"/>
                <span class="card__badge">{post.category}</span>
            </div>
            <CardHeader>
                <div class="meta-row">
                    <span class="meta-row__item">
                        <Icon kind=IconKind::Calendar size=14/>
                        <time datetime=post.date.to_string()>{post.short_date()}</time>
                    </span>
                    <span class="meta-row__item">
                        <Icon kind=IconKind::Clock size=14/>
                        {post.read_time}
                    </span>
                </div>
                <CardTitle class="clamp-2">{post.title}</CardTitle>
                <CardDescription class="clamp-3">{post.description}</CardDescription>
            </CardHeader>
            <CardContent>
                <LinkButton href=post.href() variant=ButtonVariant::Ghost class="read-more">
                    "Read More"
                    <Icon kind=IconKind::ArrowRight size=16/>
                </LinkButton>
            </CardContent>
        </AnimatedCard>
    }
}
