//! Chat markdown: subset parser, HTML renderer and allow-list sanitizer.

pub mod parser;
pub mod render;
pub mod sanitize;

pub use parser::{parse, parse_inline};
pub use render::{to_html, to_plain_text};
pub use sanitize::{escape_html, is_safe_url, sanitize_html, strip_blocks};

/// Parse and render in one step.
///
/// With `raw_markup` set, `<script>` and `<style>` blocks are removed from the
/// source before parsing, since a block may span lines or contain markdown
/// markers that would split it across spans.
pub fn render_markdown(text: &str, raw_markup: bool) -> String {
    if raw_markup {
        to_html(&parse(&strip_blocks(text)), true)
    } else {
        to_html(&parse(text), false)
    }
}
