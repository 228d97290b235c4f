use pulldown_cmark::{html, Options, Parser};

use crate::app::services::markdown::{render_markdown, sanitize_html};

/// Which markdown dialect a chat message is rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// The built-in chat subset (headings, lists, fences, inline spans)
    #[default]
    Subset,
    /// Full CommonMark with tables and strikethrough
    CommonMark,
}

/// Renders chat message bodies to HTML and caches the last result.
pub struct MessagePreview {
    pub enabled: bool,
    pub mode: RenderMode,
    /// Let raw markup through the sanitizer instead of escaping it (subset mode)
    pub raw_markup: bool,
    cache: Option<(String, String)>,
}

impl MessagePreview {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            mode: RenderMode::default(),
            raw_markup: false,
            cache: None,
        }
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_raw_markup(mut self, raw_markup: bool) -> Self {
        self.raw_markup = raw_markup;
        self
    }

    /// Toggle preview state. Returns new enabled state.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    pub fn set_mode(&mut self, mode: RenderMode) {
        if self.mode != mode {
            self.mode = mode;
            self.cache = None;
        }
    }

    /// HTML for `text`, or `None` while the preview is disabled.
    pub fn render(&mut self, text: &str) -> Option<&str> {
        if !self.enabled {
            return None;
        }
        let stale = self.cache.as_ref().is_none_or(|(source, _)| source != text);
        if stale {
            let html = match self.mode {
                RenderMode::Subset => render_markdown(text, self.raw_markup),
                RenderMode::CommonMark => render_commonmark(text),
            };
            self.cache = Some((text.to_string(), html));
        }
        self.cache.as_ref().map(|(_, html)| html.as_str())
    }

    pub fn clear(&mut self) {
        self.cache = None;
    }
}

/// Render full CommonMark. Raw HTML in the source is always sanitized.
pub fn render_commonmark(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(text, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    sanitize_html(&html_output)
}
