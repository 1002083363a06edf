//! Line-oriented text-to-markup pass for post bodies.
//!
//! DESIGN
//! ======
//! One eager pass over `\n`-separated lines. `# `, `## ` and `### ` prefixes
//! become headings with the prefix stripped, blank lines become breaks, and
//! anything else becomes a paragraph holding the line verbatim. Lines between
//! ```` ``` ```` fences are collected into a code block instead of being
//! interpreted. No escaping happens here; the view layer renders text nodes,
//! which escape on output.

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

const FENCE: &str = "```";
const HEADING_PREFIXES: [(&str, u8); 3] = [("# ", 1), ("## ", 2), ("### ", 3)];

/// One node of the line pass output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph(String),
    Break,
    Code { lang: Option<String>, code: String },
}

/// Split `text` into blocks.
#[must_use]
pub fn parse_lines(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut fence: Option<(Option<String>, Vec<&str>)> = None;

    for line in text.split('\n') {
        if let Some((lang, mut lines)) = fence.take() {
            if line.starts_with(FENCE) {
                blocks.push(Block::Code { lang, code: lines.join("\n") });
            } else {
                lines.push(line);
                fence = Some((lang, lines));
            }
            continue;
        }

        if let Some(info) = line.strip_prefix(FENCE) {
            let lang = info.trim();
            fence = Some(((!lang.is_empty()).then(|| lang.to_owned()), Vec::new()));
            continue;
        }

        blocks.push(classify(line));
    }

    // Unterminated fence runs to end of input.
    if let Some((lang, lines)) = fence {
        blocks.push(Block::Code { lang, code: lines.join("\n") });
    }

    blocks
}

fn classify(line: &str) -> Block {
    for (prefix, level) in HEADING_PREFIXES {
        if let Some(text) = line.strip_prefix(prefix) {
            return Block::Heading { level, text: text.to_owned() };
        }
    }
    if line.trim().is_empty() { Block::Break } else { Block::Paragraph(line.to_owned()) }
}
