//! Line-oriented parser for the chat markdown subset.
//!
//! Supported: `#`/`##`/`###` headings, `- `/`* ` list items, `1. ` ordered
//! items, fenced code blocks, blank-line breaks, and inline code, bold,
//! italic and links. Anything else is a paragraph. Parsing never fails.

use std::sync::LazyLock;

use regex_lite::{Captures, Regex};

use crate::app::domain::markdown::{Block, Inline};

const FENCE: &str = "```";

static ORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)\.\s").unwrap());

static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());
static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*([^*]+)\*").unwrap());
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

#[derive(Clone, Copy)]
enum InlineKind {
    Code,
    Bold,
    Italic,
    Link,
}

impl InlineKind {
    /// Evaluation order doubles as tie-break priority.
    const ALL: [InlineKind; 4] = [Self::Code, Self::Bold, Self::Italic, Self::Link];

    fn regex(self) -> &'static Regex {
        match self {
            Self::Code => &*INLINE_CODE,
            Self::Bold => &*BOLD,
            Self::Italic => &*ITALIC,
            Self::Link => &*LINK,
        }
    }

    fn build(self, caps: &Captures<'_>) -> Inline {
        let group = |i: usize| caps.get(i).map_or("", |m| m.as_str()).to_string();
        match self {
            Self::Code => Inline::Code(group(1)),
            Self::Bold => Inline::Bold(group(1)),
            Self::Italic => Inline::Italic(group(1)),
            Self::Link => Inline::Link {
                text: group(1),
                url: group(2),
            },
        }
    }
}

/// Parse a whole message into render nodes.
///
/// A fence left open at end of input is still emitted as a code block.
pub fn parse(input: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut in_fence = false;
    let mut language: Option<String> = None;
    let mut code = String::new();

    for line in input.lines() {
        if let Some(rest) = line.strip_prefix(FENCE) {
            if in_fence {
                blocks.push(Block::CodeBlock {
                    language: language.take(),
                    code: code.trim().to_string(),
                });
                code.clear();
            } else {
                let lang = rest.trim();
                language = (!lang.is_empty()).then(|| lang.to_string());
            }
            in_fence = !in_fence;
            continue;
        }

        if in_fence {
            code.push_str(line);
            code.push('\n');
            continue;
        }

        blocks.push(parse_line(line));
    }

    if in_fence {
        blocks.push(Block::CodeBlock {
            language,
            code: code.trim().to_string(),
        });
    }

    blocks
}

fn parse_line(line: &str) -> Block {
    if let Some(rest) = line.strip_prefix("### ") {
        return Block::Heading { level: 3, spans: parse_inline(rest) };
    }
    if let Some(rest) = line.strip_prefix("## ") {
        return Block::Heading { level: 2, spans: parse_inline(rest) };
    }
    if let Some(rest) = line.strip_prefix("# ") {
        return Block::Heading { level: 1, spans: parse_inline(rest) };
    }
    if let Some(rest) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        return Block::ListItem(parse_inline(rest));
    }
    if let Some(caps) = ORDERED_ITEM.captures(line) {
        let number = caps.get(1).and_then(|m| m.as_str().parse().ok()).unwrap_or(0);
        let end = caps.get(0).map_or(0, |m| m.end());
        return Block::OrderedListItem {
            number,
            spans: parse_inline(&line[end..]),
        };
    }
    if line.trim().is_empty() {
        return Block::LineBreak;
    }
    Block::Paragraph(parse_inline(line))
}

/// Split a line into typed spans. The earliest match wins; on a tie the
/// priority is code, bold, italic, link.
pub fn parse_inline(text: &str) -> Vec<Inline> {
    let mut spans = Vec::new();
    let mut rest = text;

    loop {
        let mut best: Option<(usize, usize, Inline)> = None;
        for kind in InlineKind::ALL {
            let Some(caps) = kind.regex().captures(rest) else { continue };
            let Some(m) = caps.get(0) else { continue };
            let earlier = match &best {
                Some((start, _, _)) => m.start() < *start,
                None => true,
            };
            if earlier {
                best = Some((m.start(), m.end(), kind.build(&caps)));
            }
        }

        match best {
            Some((start, end, span)) => {
                if start > 0 {
                    spans.push(Inline::Text(rest[..start].to_string()));
                }
                spans.push(span);
                rest = &rest[end..];
            }
            None => {
                if !rest.is_empty() {
                    spans.push(Inline::Text(rest.to_string()));
                }
                break;
            }
        }
    }

    spans
}
