use content::{ContentSource, StaticContent};

use super::*;

fn html(markdown: &str) -> String {
    render_markdown(markdown).html
}

#[test]
fn headings_get_slug_ids() {
    let html = html("# Title\n\n## Part One\n\ntext");
    assert!(html.contains(r#"<h1 id="title">Title</h1>"#), "{html}");
    assert!(html.contains(r#"<h2 id="part-one">Part One</h2>"#), "{html}");
}

#[test]
fn raw_html_is_dropped() {
    let html = html("hello <script>alert(1)</script> world\n\n<div>block</div>");
    assert!(!html.contains("<script>"), "{html}");
    assert!(!html.contains("<div>"), "{html}");
    assert!(html.contains("hello"));
}

#[test]
fn fenced_code_is_escaped_and_tagged() {
    let html = html("```jsx\n<Avatar src={x} />\n```");
    assert!(html.contains(r#"<code class="language-jsx">"#), "{html}");
    assert!(html.contains("&lt;Avatar"), "{html}");
}

#[test]
fn inline_formatting_renders() {
    let html = html("- **Code Generation**: faster");
    assert!(html.contains("<li><strong>Code Generation</strong>: faster</li>"), "{html}");
}

#[test]
fn heading_ids_use_visible_text_only() {
    let rendered = render_markdown("## Using `cargo` with [docs](https://doc.rust-lang.org)");
    assert!(rendered.html.contains(r#"<h2 id="using-cargo-with-docs">"#), "{}", rendered.html);
    assert_eq!(rendered.outline(), vec![OutlineEntry {
        level: 2,
        text: "Using cargo with docs".into(),
        anchor: "using-cargo-with-docs".into(),
    }]);
}

#[test]
fn deep_headings_count_toward_duplicate_suffixes() {
    let rendered = render_markdown("#### Setup\n\n## Setup");
    assert!(rendered.html.contains(r#"<h4 id="setup">Setup</h4>"#), "{}", rendered.html);
    assert!(rendered.html.contains(r#"<h2 id="setup-2">Setup</h2>"#), "{}", rendered.html);
    let outline = rendered.outline();
    assert_eq!(outline.len(), 1);
    assert_eq!(outline[0].level, 2);
    assert_eq!(outline[0].anchor, "setup-2");
}

#[test]
fn setext_headings_are_recorded() {
    let rendered = render_markdown("Overview\n--------\n\nbody");
    assert_eq!(rendered.outline()[0].anchor, "overview");
    assert!(rendered.html.contains(r#"<h2 id="overview">"#), "{}", rendered.html);
}

#[test]
fn outline_anchors_exist_in_rendered_posts() {
    let content = StaticContent::builtin();
    for slug in content.post_slugs() {
        let post = content.post(slug).unwrap();
        let rendered = render_markdown(post.content);
        let entries = rendered.outline();
        assert!(!entries.is_empty(), "{slug} has no sections");
        for entry in entries {
            assert!(rendered.html.contains(&format!(r#"id="{}""#, entry.anchor)), "{slug}: missing #{}", entry.anchor);
        }
    }
}
