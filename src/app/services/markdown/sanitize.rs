//! Allow-list HTML sanitizer for raw markup embedded in chat messages.
//!
//! Dangerous constructs are stripped first (script and style blocks, script
//! URL schemes, inline event handlers). Every remaining tag is then rebuilt
//! from the allow-list: unknown tags disappear but their text stays, known
//! tags keep only the attributes listed for them. Text between tags is
//! escaped, so the only `<` left in the output opens an allow-listed tag.

use std::sync::LazyLock;

use regex_lite::{Captures, Regex};
use tracing::debug;

static SCRIPT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").unwrap());

static STYLE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style\b[^>]*>.*?</style\s*>").unwrap());

static SCRIPT_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:javascript|vbscript|data)\s*:").unwrap());

static EVENT_HANDLER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bon\w+\s*=").unwrap());

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(/?)([a-zA-Z][a-zA-Z0-9]*)([^>]*)>").unwrap());

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([a-zA-Z_:][-a-zA-Z0-9_:.]*)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)
        .unwrap()
});

static SAFE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:https?:|mailto:|/|#)").unwrap());

/// Tag name -> attributes that survive sanitization.
const ALLOWED_TAGS: &[(&str, &[&str])] = &[
    ("a", &["href", "title", "target", "rel"]),
    ("img", &["src", "alt", "title", "width", "height"]),
    ("p", &[]),
    ("br", &[]),
    ("hr", &[]),
    ("strong", &[]),
    ("b", &[]),
    ("em", &[]),
    ("i", &[]),
    ("u", &[]),
    ("s", &[]),
    ("del", &[]),
    ("ins", &[]),
    ("mark", &[]),
    ("small", &[]),
    ("sub", &[]),
    ("sup", &[]),
    ("kbd", &[]),
    ("code", &["class"]),
    ("pre", &["class"]),
    ("span", &["class"]),
    ("div", &["class"]),
    ("blockquote", &[]),
    ("ul", &[]),
    ("ol", &["start"]),
    ("li", &[]),
    ("h1", &[]),
    ("h2", &[]),
    ("h3", &[]),
    ("h4", &[]),
    ("h5", &[]),
    ("h6", &[]),
    ("table", &[]),
    ("thead", &[]),
    ("tbody", &[]),
    ("tr", &[]),
    ("th", &["align", "colspan", "rowspan"]),
    ("td", &["align", "colspan", "rowspan"]),
];

/// Elements always written in self-closing form.
const VOID_TAGS: &[&str] = &["br", "hr", "img"];

const MAX_PASSES: usize = 16;

fn allowed_attributes(tag: &str) -> Option<&'static [&'static str]> {
    ALLOWED_TAGS
        .iter()
        .find(|(name, _)| *name == tag)
        .map(|(_, attrs)| *attrs)
}

/// True if `url` may appear in an `href` or `src` attribute.
pub fn is_safe_url(url: &str) -> bool {
    let url = url.trim();
    SAFE_URL.is_match(url) || url.starts_with('.')
}

/// Escape text for use between tags or inside a double-quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Sanitize raw HTML against the allow-list.
///
/// The pass is repeated until the output stops changing, so the result is a
/// fixed point: `sanitize_html(&sanitize_html(x)) == sanitize_html(x)`.
pub fn sanitize_html(input: &str) -> String {
    let mut current = input.to_string();
    for pass in 0..MAX_PASSES {
        let next = sanitize_pass(&current);
        if next == current {
            return next;
        }
        debug!(pass, "sanitizer output changed, running another pass");
        current = next;
    }
    // Still changing after the pass limit: neutralize every tag. With no `<`
    // left, stripping cannot reopen one, so the result is stable.
    strip_dangerous(&escape_html(&current))
}

/// Remove `<script>` and `<style>` blocks, repeating until none are left.
pub fn strip_blocks(input: &str) -> String {
    strip_until_stable(input, |text| {
        let stripped = SCRIPT_BLOCK.replace_all(text, "");
        STYLE_BLOCK.replace_all(&stripped, "").into_owned()
    })
}

/// Remove blocks, script URL schemes and `on<word>=` handlers until none are
/// left. Every removal shrinks the string, so this terminates.
fn strip_dangerous(input: &str) -> String {
    strip_until_stable(input, |text| {
        let stripped = strip_blocks(text);
        let stripped = SCRIPT_SCHEME.replace_all(&stripped, "");
        EVENT_HANDLER.replace_all(&stripped, "").into_owned()
    })
}

fn strip_until_stable(input: &str, strip: impl Fn(&str) -> String) -> String {
    let mut current = input.to_string();
    loop {
        let next = strip(&current);
        if next == current {
            return next;
        }
        current = next;
    }
}

fn sanitize_pass(input: &str) -> String {
    let stripped = strip_dangerous(input);

    let mut out = String::with_capacity(stripped.len());
    let mut last = 0;
    for caps in TAG.captures_iter(&stripped) {
        let Some(whole) = caps.get(0) else { continue };
        out.push_str(&escape_text(&stripped[last..whole.start()]));
        if let Some(tag) = rebuild_tag(&caps) {
            out.push_str(&tag);
        }
        last = whole.end();
    }
    out.push_str(&escape_text(&stripped[last..]));
    out
}

fn escape_text(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}

/// Rebuild one tag occurrence from the allow-list. `None` deletes it.
fn rebuild_tag(caps: &Captures<'_>) -> Option<String> {
    let closing = caps.get(1).is_some_and(|m| !m.as_str().is_empty());
    let name = caps.get(2)?.as_str().to_ascii_lowercase();
    let allowed = allowed_attributes(&name)?;
    let is_void = VOID_TAGS.contains(&name.as_str());

    if closing {
        return if is_void { None } else { Some(format!("</{}>", name)) };
    }

    let mut tag = format!("<{}", name);
    let raw_attrs = caps.get(3).map_or("", |m| m.as_str());
    for attr in ATTRIBUTE.captures_iter(raw_attrs) {
        let Some(attr_name) = attr.get(1) else { continue };
        let attr_name = attr_name.as_str().to_ascii_lowercase();
        if !allowed.contains(&attr_name.as_str()) {
            continue;
        }
        let value = attr
            .get(2)
            .or_else(|| attr.get(3))
            .or_else(|| attr.get(4))
            .map(|m| m.as_str());

        match value {
            Some(value) => {
                if (attr_name == "href" || attr_name == "src") && !is_safe_url(value) {
                    continue;
                }
                tag.push_str(&format!(" {}=\"{}\"", attr_name, escape_html(value)));
            }
            None => {
                // href/src without a value carry no URL to validate
                if attr_name == "href" || attr_name == "src" {
                    continue;
                }
                tag.push(' ');
                tag.push_str(&attr_name);
            }
        }
    }

    if is_void {
        tag.push_str(" />");
    } else {
        tag.push('>');
    }
    Some(tag)
}
