//! Site footer.

use leptos::prelude::*;

use crate::app::use_content;
use crate::components::button::external_attrs;
use crate::components::icon::{Icon, IconKind};
use crate::components::navigation::NAV_LINKS;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let profile = use_content().profile();

    view! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__about">
                    <a href="/" class="footer__brand">{profile.name}</a>
                    <p>{profile.role}</p>
                </div>
                <nav class="footer__links">
                    {NAV_LINKS
                        .iter()
                        .map(|(label, href)| view! { <a href=*href>{*label}</a> })
                        .collect_view()}
                </nav>
                <div class="footer__socials">
                    {profile
                        .socials
                        .iter()
                        .filter_map(|social| {
                            IconKind::for_social(social.label)
                                .map(|kind| {
                                    let (target, rel) = external_attrs(social.is_external());
                                    view! {
                                        <a href=social.href target=target rel=rel aria-label=social.label>
                                            <Icon kind=kind size=18/>
                                        </a>
                                    }
                                })
                        })
                        .collect_view()}
                </div>
            </div>
            <p class="footer__note">
                "Made with " <Icon kind=IconKind::Heart size=14 class="footer__heart"/> " by " {profile.name}
            </p>
        </footer>
    }
}
