use super::*;

#[test]
fn heading_prefixes_map_to_levels_with_prefix_stripped() {
    let blocks = parse_lines("# One\n## Two\n### Three");
    assert_eq!(
        blocks,
        vec![
            Block::Heading { level: 1, text: "One".into() },
            Block::Heading { level: 2, text: "Two".into() },
            Block::Heading { level: 3, text: "Three".into() },
        ]
    );
}

#[test]
fn four_hashes_is_a_paragraph() {
    assert_eq!(parse_lines("#### Deep"), vec![Block::Paragraph("#### Deep".into())]);
}

#[test]
fn hash_without_space_is_a_paragraph() {
    assert_eq!(parse_lines("#hashtag"), vec![Block::Paragraph("#hashtag".into())]);
}

#[test]
fn blank_and_whitespace_lines_become_breaks() {
    assert_eq!(parse_lines("a\n\n   \nb"), vec![
        Block::Paragraph("a".into()),
        Block::Break,
        Block::Break,
        Block::Paragraph("b".into()),
    ]);
}

#[test]
fn paragraphs_keep_the_full_line_unescaped() {
    let line = "  - **Bold** <b>x</b> & \"q\"";
    assert_eq!(parse_lines(line), vec![Block::Paragraph(line.into())]);
}

#[test]
fn leading_and_trailing_newlines_become_breaks() {
    let blocks = parse_lines("\n# Title\n    ");
    assert_eq!(blocks, vec![
        Block::Break,
        Block::Heading { level: 1, text: "Title".into() },
        Block::Break,
    ]);
}

#[test]
fn fenced_code_is_collected_not_interpreted() {
    let blocks = parse_lines("intro\n```jsx\n# not a heading\n\nconst x = 1\n```\nafter");
    assert_eq!(blocks, vec![
        Block::Paragraph("intro".into()),
        Block::Code { lang: Some("jsx".into()), code: "# not a heading\n\nconst x = 1".into() },
        Block::Paragraph("after".into()),
    ]);
}

#[test]
fn fence_without_language() {
    let blocks = parse_lines("```\nplain\n```");
    assert_eq!(blocks, vec![Block::Code { lang: None, code: "plain".into() }]);
}

#[test]
fn unterminated_fence_runs_to_end() {
    let blocks = parse_lines("```rust\nfn main() {}\n## still code");
    assert_eq!(blocks, vec![Block::Code {
        lang: Some("rust".into()),
        code: "fn main() {}\n## still code".into(),
    }]);
}

#[test]
fn empty_input_is_a_single_break() {
    assert_eq!(parse_lines(""), vec![Block::Break]);
}
