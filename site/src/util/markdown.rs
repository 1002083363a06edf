//! Markdown rendering for post bodies.
//!
//! DESIGN
//! ======
//! Bodies go through `pulldown-cmark` with raw HTML dropped, so authored
//! content can never inject markup. Heading ids are assigned on the event
//! stream, and the same pass records each heading's visible text and id.
//! The "On this page" outline is built from that record only, so its links
//! always point at a rendered heading.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use content::slug::Anchors;
use pulldown_cmark::{CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd, html};

/// Deepest heading level listed in the outline.
const OUTLINE_MAX_LEVEL: u8 = 3;

/// A heading as it appears in the rendered body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    pub level: u8,
    pub text: String,
    pub anchor: String,
}

/// Rendered HTML plus every heading it contains, in document order.
#[derive(Debug, Clone, Default)]
pub struct RenderedMarkdown {
    pub html: String,
    pub headings: Vec<OutlineEntry>,
}

impl RenderedMarkdown {
    /// Section headings for the outline: levels 2 and 3, title excluded.
    #[must_use]
    pub fn outline(&self) -> Vec<OutlineEntry> {
        self.headings
            .iter()
            .filter(|h| (2..=OUTLINE_MAX_LEVEL).contains(&h.level))
            .cloned()
            .collect()
    }
}

/// Render `markdown` to HTML safe for `inner_html`, collecting its headings.
#[must_use]
pub fn render_markdown(markdown: &str) -> RenderedMarkdown {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut events: Vec<Event<'_>> = Parser::new_ext(markdown, options)
        .filter(|event| !matches!(event, Event::Html(_) | Event::InlineHtml(_)))
        .collect();
    let headings = assign_heading_ids(&mut events);

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, events.into_iter());
    RenderedMarkdown { html: out, headings }
}

fn assign_heading_ids(events: &mut [Event<'_>]) -> Vec<OutlineEntry> {
    let mut anchors = Anchors::new();
    let mut headings = Vec::new();
    let mut i = 0;
    while i < events.len() {
        if let Event::Start(Tag::Heading { level, .. }) = &events[i] {
            let level = heading_level(*level);
            let mut text = String::new();
            let mut end = i + 1;
            while end < events.len() && !matches!(events[end], Event::End(TagEnd::Heading(_))) {
                if let Event::Text(t) | Event::Code(t) = &events[end] {
                    text.push_str(t);
                }
                end += 1;
            }
            let anchor = anchors.next(&text);
            if let Event::Start(Tag::Heading { id, .. }) = &mut events[i] {
                *id = Some(CowStr::from(anchor.clone()));
            }
            headings.push(OutlineEntry { level, text: text.trim().to_owned(), anchor });
            i = end;
        }
        i += 1;
    }
    headings
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
