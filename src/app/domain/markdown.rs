/// Inline span inside a block. Spans carry already-resolved text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Bold(String),
    Italic(String),
    Code(String),
    Link { text: String, url: String },
}

impl Inline {
    /// Visible text of the span, without markup
    pub fn text(&self) -> &str {
        match self {
            Self::Text(s) | Self::Bold(s) | Self::Italic(s) | Self::Code(s) => s,
            Self::Link { text, .. } => text,
        }
    }
}

/// One render node produced by the block scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(Vec<Inline>),
    Heading { level: u8, spans: Vec<Inline> },
    ListItem(Vec<Inline>),
    OrderedListItem { number: u32, spans: Vec<Inline> },
    CodeBlock { language: Option<String>, code: String },
    LineBreak,
}

impl Block {
    pub fn spans(&self) -> &[Inline] {
        match self {
            Self::Paragraph(spans) | Self::ListItem(spans) => spans,
            Self::Heading { spans, .. } | Self::OrderedListItem { spans, .. } => spans,
            Self::CodeBlock { .. } | Self::LineBreak => &[],
        }
    }
}
