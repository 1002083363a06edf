//! Inline stroke icons.
//!
//! Paths follow a 24x24 grid with round caps, in the style of the Lucide
//! set, so they inherit `currentColor` and scale with font size.

#[cfg(test)]
#[path = "icon_test.rs"]
mod icon_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    ArrowLeft,
    ArrowRight,
    ArrowDown,
    Calendar,
    Clock,
    ExternalLink,
    Github,
    Linkedin,
    Twitter,
    Mail,
    Phone,
    MapPin,
    Send,
    Sparkles,
    Download,
    Share,
    Bookmark,
    Message,
    Menu,
    Close,
    Sun,
    Moon,
    Code,
    Palette,
    Zap,
    Users,
    Award,
    Coffee,
    Heart,
    Check,
}

impl IconKind {
    /// SVG path data, one entry per `<path>`.
    #[must_use]
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Self::ArrowLeft => &["m12 19-7-7 7-7", "M19 12H5"],
            Self::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Self::ArrowDown => &["M12 5v14", "m19 12-7 7-7-7"],
            Self::Calendar => &["M8 2v4", "M16 2v4", "M3 10h18", "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z"],
            Self::Clock => &["M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20z", "M12 6v6l4 2"],
            Self::ExternalLink => &["M15 3h6v6", "M10 14 21 3", "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"],
            Self::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            Self::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M4 2a2 2 0 1 0 0 4 2 2 0 1 0 0-4z",
            ],
            Self::Twitter => &[
                "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
            ],
            Self::Mail => &["M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z", "m22 7-10 6L2 7"],
            Self::Phone => &[
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z",
            ],
            Self::MapPin => &["M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z", "M12 7a3 3 0 1 0 0 6 3 3 0 1 0 0-6z"],
            Self::Send => &["m22 2-7 20-4-9-9-4z", "M22 2 11 13"],
            Self::Sparkles => &[
                "m12 3-1.9 5.8a2 2 0 0 1-1.3 1.3L3 12l5.8 1.9a2 2 0 0 1 1.3 1.3L12 21l1.9-5.8a2 2 0 0 1 1.3-1.3L21 12l-5.8-1.9a2 2 0 0 1-1.3-1.3z",
            ],
            Self::Download => &["M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4", "m7 10 5 5 5-5", "M12 15V3"],
            Self::Share => &["M4 12v8a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2v-8", "m16 6-4-4-4 4", "M12 2v13"],
            Self::Bookmark => &["m19 21-7-4-7 4V5a2 2 0 0 1 2-2h10a2 2 0 0 1 2 2v16z"],
            Self::Message => &["M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"],
            Self::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Self::Close => &["M18 6 6 18", "m6 6 12 12"],
            Self::Sun => &[
                "M12 8a4 4 0 1 0 0 8 4 4 0 1 0 0-8z",
                "M12 2v2",
                "M12 20v2",
                "m4.93 4.93 1.41 1.41",
                "m17.66 17.66 1.41 1.41",
                "M2 12h2",
                "M20 12h2",
                "m6.34 17.66-1.41 1.41",
                "m19.07 4.93-1.41 1.41",
            ],
            Self::Moon => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9z"],
            Self::Code => &["m16 18 6-6-6-6", "m8 6-6 6 6 6"],
            Self::Palette => &[
                "M12 2C6.5 2 2 6.5 2 12s4.5 10 10 10c.93 0 1.5-.75 1.5-1.5 0-.4-.15-.75-.4-1-.25-.28-.4-.63-.4-1 0-.83.67-1.5 1.5-1.5H16c3.31 0 6-2.69 6-6 0-4.96-4.5-9-10-9z",
            ],
            Self::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
            Self::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M9 3a4 4 0 1 0 0 8 4 4 0 1 0 0-8z",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            Self::Award => &["M12 2a6 6 0 1 0 0 12 6 6 0 1 0 0-12z", "M15.48 12.89 17 22l-5-3-5 3 1.52-9.11"],
            Self::Coffee => &["M17 8h1a4 4 0 1 1 0 8h-1", "M3 8h14v9a4 4 0 0 1-4 4H7a4 4 0 0 1-4-4Z", "M6 2v2", "M10 2v2", "M14 2v2"],
            Self::Heart => &[
                "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7z",
            ],
            Self::Check => &["M20 6 9 17l-5-5"],
        }
    }

    /// Icon for a social link label, if one exists.
    #[must_use]
    pub fn for_social(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "github" => Some(Self::Github),
            "linkedin" => Some(Self::Linkedin),
            "twitter" => Some(Self::Twitter),
            "email" | "mail" => Some(Self::Mail),
            _ => None,
        }
    }
}

#[component]
pub fn Icon(kind: IconKind, #[prop(default = 20)] size: u32, #[prop(optional)] class: &'static str) -> impl IntoView {
    let class = if class.is_empty() { "icon".to_owned() } else { format!("icon {class}") };
    view! {
        <svg
            class=class
            width=size.to_string()
            height=size.to_string()
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {kind.paths().iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}
