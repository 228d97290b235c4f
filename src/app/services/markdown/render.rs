use crate::app::domain::markdown::{Block, Inline};

use super::sanitize::{escape_html, is_safe_url, sanitize_html};

#[derive(Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn of(block: &Block) -> Option<Self> {
        match block {
            Block::ListItem(_) => Some(Self::Unordered),
            Block::OrderedListItem { .. } => Some(Self::Ordered),
            _ => None,
        }
    }

    fn close_tag(self) -> &'static str {
        match self {
            Self::Unordered => "</ul>",
            Self::Ordered => "</ol>",
        }
    }
}

/// Render nodes to HTML. Consecutive list items share one `<ul>`/`<ol>`.
///
/// With `raw_markup` set, markup inside text spans is passed through the
/// sanitizer instead of being escaped. Code is always escaped.
pub fn to_html(blocks: &[Block], raw_markup: bool) -> String {
    let mut html = String::new();
    let mut open_list: Option<ListKind> = None;

    for block in blocks {
        let kind = ListKind::of(block);
        if open_list != kind {
            if let Some(open) = open_list {
                html.push_str(open.close_tag());
                html.push('\n');
            }
            match (kind, block) {
                (Some(ListKind::Ordered), Block::OrderedListItem { number, .. }) if *number != 1 => {
                    html.push_str(&format!("<ol start=\"{}\">\n", number));
                }
                (Some(ListKind::Ordered), _) => html.push_str("<ol>\n"),
                (Some(ListKind::Unordered), _) => html.push_str("<ul>\n"),
                (None, _) => {}
            }
            open_list = kind;
        }

        match block {
            Block::Paragraph(spans) => {
                html.push_str(&format!("<p>{}</p>", inline_html(spans, raw_markup)));
            }
            Block::Heading { level, spans } => {
                let level = (*level).clamp(1, 6);
                html.push_str(&format!("<h{0}>{1}</h{0}>", level, inline_html(spans, raw_markup)));
            }
            Block::ListItem(spans) | Block::OrderedListItem { spans, .. } => {
                html.push_str(&format!("<li>{}</li>", inline_html(spans, raw_markup)));
            }
            Block::CodeBlock { language, code } => {
                match language {
                    Some(lang) => html.push_str(&format!(
                        "<pre><code class=\"language-{}\">",
                        escape_html(lang)
                    )),
                    None => html.push_str("<pre><code>"),
                }
                html.push_str(&escape_html(code));
                html.push_str("</code></pre>");
            }
            Block::LineBreak => html.push_str("<br />"),
        }
        html.push('\n');
    }

    if let Some(open) = open_list {
        html.push_str(open.close_tag());
        html.push('\n');
    }

    html
}

fn inline_html(spans: &[Inline], raw_markup: bool) -> String {
    let mut out = String::new();
    for span in spans {
        match span {
            Inline::Text(s) => out.push_str(&text_html(s, raw_markup)),
            Inline::Bold(s) => {
                out.push_str(&format!("<strong>{}</strong>", text_html(s, raw_markup)));
            }
            Inline::Italic(s) => out.push_str(&format!("<em>{}</em>", text_html(s, raw_markup))),
            Inline::Code(s) => out.push_str(&format!("<code>{}</code>", escape_html(s))),
            Inline::Link { text, url } => {
                if is_safe_url(url) {
                    out.push_str(&format!(
                        "<a href=\"{}\">{}</a>",
                        escape_html(url.trim()),
                        text_html(text, raw_markup)
                    ));
                } else {
                    out.push_str(&text_html(text, raw_markup));
                }
            }
        }
    }
    out
}

fn text_html(text: &str, raw_markup: bool) -> String {
    if raw_markup {
        sanitize_html(text)
    } else {
        escape_html(text)
    }
}

/// Flatten nodes to plain text, one line per block.
pub fn to_plain_text(blocks: &[Block]) -> String {
    let lines: Vec<String> = blocks
        .iter()
        .map(|block| match block {
            Block::CodeBlock { code, .. } => code.clone(),
            Block::LineBreak => String::new(),
            other => other.spans().iter().map(Inline::text).collect(),
        })
        .collect();
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::markdown::parse;

    #[test]
    fn test_paragraph_and_heading() {
        let html = to_html(&parse("### Title\nsome **bold** text"), false);
        assert_eq!(html, "<h3>Title</h3>\n<p>some <strong>bold</strong> text</p>\n");
    }

    #[test]
    fn test_lists_grouped() {
        let html = to_html(&parse("- a\n- b\n1. one\n2. two\nend"), false);
        assert_eq!(
            html,
            "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n<ol>\n<li>one</li>\n<li>two</li>\n</ol>\n<p>end</p>\n"
        );
    }

    #[test]
    fn test_ordered_list_start() {
        let html = to_html(&parse("4. four"), false);
        assert_eq!(html, "<ol start=\"4\">\n<li>four</li>\n</ol>\n");
    }

    #[test]
    fn test_code_block_escaped() {
        let html = to_html(&parse("```html\n<b>x</b>\n```"), true);
        assert_eq!(
            html,
            "<pre><code class=\"language-html\">&lt;b&gt;x&lt;/b&gt;</code></pre>\n"
        );
    }

    #[test]
    fn test_text_escaped_without_raw_markup() {
        let html = to_html(&parse("<b>hi</b>"), false);
        assert_eq!(html, "<p>&lt;b&gt;hi&lt;/b&gt;</p>\n");
    }

    #[test]
    fn test_raw_markup_sanitized() {
        let html = to_html(&parse("<b onclick=\"x()\">hi</b><script>alert(1)</script>"), true);
        assert_eq!(html, "<p><b>hi</b></p>\n");
    }

    #[test]
    fn test_unsafe_link_renders_text_only() {
        let html = to_html(&parse("[click](javascript:alert(1))"), false);
        assert!(!html.contains("href"));
        assert!(html.contains("click"));
    }

    #[test]
    fn test_safe_link() {
        let html = to_html(&parse("[docs](https://example.com)"), false);
        assert_eq!(html, "<p><a href=\"https://example.com\">docs</a></p>\n");
    }

    #[test]
    fn test_line_break() {
        assert_eq!(to_html(&parse("a\n\nb"), false), "<p>a</p>\n<br />\n<p>b</p>\n");
    }

    #[test]
    fn test_plain_text() {
        let blocks = parse("# Hi\n**bold** and [link](/x)\n```\ncode\n```");
        assert_eq!(to_plain_text(&blocks), "Hi\nbold and link\ncode");
    }
}
