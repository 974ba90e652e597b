use std::fmt;
use std::str::FromStr;

use crate::error::InlineError;

/// The closed set of inline styles a [`TextSpan`] can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    PlainText,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl SpanKind {
    pub const ALL: [SpanKind; 6] = [
        SpanKind::PlainText,
        SpanKind::Bold,
        SpanKind::Italic,
        SpanKind::Code,
        SpanKind::Link,
        SpanKind::Image,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SpanKind::PlainText => "PlainText",
            SpanKind::Bold => "Bold",
            SpanKind::Italic => "Italic",
            SpanKind::Code => "Code",
            SpanKind::Link => "Link",
            SpanKind::Image => "Image",
        }
    }

    /// Whether spans of this kind must carry a non-empty url.
    pub fn requires_url(self) -> bool {
        matches!(self, SpanKind::Link | SpanKind::Image)
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpanKind {
    type Err = InlineError;

    /// Parses a kind name case-insensitively; `text` and `normal` are
    /// accepted for [`SpanKind::PlainText`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plaintext" | "plain_text" | "text" | "normal" => Ok(SpanKind::PlainText),
            "bold" => Ok(SpanKind::Bold),
            "italic" => Ok(SpanKind::Italic),
            "code" => Ok(SpanKind::Code),
            "link" => Ok(SpanKind::Link),
            "image" => Ok(SpanKind::Image),
            _ => Err(InlineError::InvalidKind(s.to_string())),
        }
    }
}

/// A run of text tagged with one inline style.
///
/// Spans are immutable values compared structurally. The url is only
/// meaningful for [`SpanKind::Link`] and [`SpanKind::Image`], where it is
/// required; that requirement is checked when the span is converted to a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextSpan {
    text: String,
    kind: SpanKind,
    url: Option<String>,
}

impl TextSpan {
    pub fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
            url: None,
        }
    }

    pub fn with_url(text: impl Into<String>, kind: SpanKind, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
            url: Some(url.into()),
        }
    }

    /// Shorthand for a [`SpanKind::PlainText`] span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::PlainText)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> SpanKind {
        self.kind
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::PlainText
    }
}
