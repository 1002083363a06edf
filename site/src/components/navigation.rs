//! Top navigation bar with active-link highlighting and theme toggle.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::icon::{Icon, IconKind};
use crate::util::dark_mode;

pub const NAV_LINKS: [(&str, &str); 5] = [
    ("Home", "/"),
    ("About", "/about"),
    ("Projects", "/projects"),
    ("Blog", "/blog"),
    ("Contact", "/contact"),
];

/// Whether `href` names the section `current` is in.
///
/// `/` matches only itself; other links also match their sub-paths, so
/// `/blog/some-post` highlights "Blog".
#[must_use]
pub fn is_active(current: &str, href: &str) -> bool {
    if href == "/" {
        return current == "/";
    }
    let current = current.strip_suffix('/').filter(|c| !c.is_empty()).unwrap_or(current);
    current == href || current.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Navigation() -> impl IntoView {
    let location = use_location();
    let menu_open = RwSignal::new(false);
    let dark = RwSignal::new(false);

    Effect::new(move || {
        let preferred = dark_mode::system_prefers_dark();
        dark_mode::apply(preferred);
        dark.set(preferred);
    });

    Effect::new(move || {
        location.pathname.track();
        menu_open.set(false);
    });

    let name = crate::app::use_content().profile().name;

    let links = move || {
        let current = location.pathname.get();
        NAV_LINKS
            .iter()
            .map(|(label, href)| {
                let active = is_active(&current, href);
                view! {
                    <a
                        href=*href
                        class="nav__link"
                        class:nav__link--active=active
                        aria-current=active.then_some("page")
                    >
                        {*label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="nav">
            <div class="nav__inner">
                <a href="/" class="nav__brand">{name}</a>
                <nav class="nav__links" class:nav__links--open=move || menu_open.get()>
                    {links}
                </nav>
                <div class="nav__actions">
                    <button
                        type="button"
                        class="nav__icon-button"
                        title="Toggle dark mode"
                        on:click=move |_| dark.update(|d| *d = dark_mode::toggle(*d))
                    >
                        {move || {
                            if dark.get() {
                                view! { <Icon kind=IconKind::Sun/> }.into_any()
                            } else {
                                view! { <Icon kind=IconKind::Moon/> }.into_any()
                            }
                        }}
                    </button>
                    <button
                        type="button"
                        class="nav__icon-button nav__menu-toggle"
                        title="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        {move || {
                            if menu_open.get() {
                                view! { <Icon kind=IconKind::Close/> }.into_any()
                            } else {
                                view! { <Icon kind=IconKind::Menu/> }.into_any()
                            }
                        }}
                    </button>
                </div>
            </div>
        </header>
    }
}
