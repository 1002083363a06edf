//! Blog listing.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::app::use_content;
use crate::components::post_card::PostCard;
use crate::util::meta;

#[component]
pub fn BlogPage() -> impl IntoView {
    let content = use_content();

    view! {
        <Title text=meta::page_title("Blog", content.profile())/>
        <div class="page">
            <header class="page__header fade-up">
                <h1>"Blog"</h1>
                <p>
                    "Thoughts, tutorials, and insights about web development, technology, and my journey as a developer."
                </p>
            </header>
            <div class="grid grid--3">
                {content
                    .post_summaries()
                    .iter()
                    .enumerate()
                    .map(|(index, post)| view! { <PostCard post=post index=index/> })
                    .collect_view()}
            </div>
        </div>
    }
}
