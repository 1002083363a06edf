//! Root application component with routing and context providers.

use content::{ContentSource, StaticContent};
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::SiteFooter;
use crate::components::navigation::Navigation;
use crate::pages::{
    about::AboutPage, blog::BlogPage, blog_post::BlogPostPage, contact::ContactPage, home::HomePage,
    not_found::NotFoundPage, project_detail::ProjectDetailPage, projects::ProjectsPage,
};
use crate::util::meta;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" type="image/svg+xml" href="/favicon.svg"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Read-only content provider shared with every page through context.
#[derive(Clone, Copy)]
pub struct ContentContext(pub &'static dyn ContentSource);

/// Content provider from context. Panics outside [`App`].
pub fn use_content() -> &'static dyn ContentSource {
    expect_context::<ContentContext>().0
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ContentContext(StaticContent::builtin()));

    let home_title = meta::home_title(use_content().profile());

    view! {
        <Stylesheet id="leptos" href="/pkg/folio.css"/>
        <Title text=home_title/>

        <Router>
            <Navigation/>
            <main class="site-main">
                <ErrorBoundary fallback=|errors| {
                    view! {
                        <section class="render-error">
                            <h1>"Something went wrong"</h1>
                            <ul>
                                {move || {
                                    errors
                                        .get()
                                        .into_iter()
                                        .map(|(_, err)| view! { <li>{err.to_string()}</li> })
                                        .collect_view()
                                }}
                            </ul>
                            <a href="/">"Back home"</a>
                        </section>
                    }
                }>
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("about") view=AboutPage/>
                        <Route path=StaticSegment("projects") view=ProjectsPage/>
                        <Route path=(StaticSegment("projects"), ParamSegment("slug")) view=ProjectDetailPage/>
                        <Route path=StaticSegment("blog") view=BlogPage/>
                        <Route path=(StaticSegment("blog"), ParamSegment("slug")) view=BlogPostPage/>
                        <Route path=StaticSegment("contact") view=ContactPage/>
                    </Routes>
                </ErrorBoundary>
            </main>
            <SiteFooter/>
        </Router>
    }
}
