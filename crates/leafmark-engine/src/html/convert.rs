use crate::error::InlineError;
use crate::inline::{SpanKind, TextSpan, text_to_spans};

use super::{
    attributes::Attributes,
    node::{HtmlNode, LeafNode},
};

/// Maps a span to the leaf node that renders it.
///
/// | kind      | tag    | value       | attributes        |
/// |-----------|--------|-------------|-------------------|
/// | PlainText | none   | text        |                   |
/// | Bold      | `b`    | text        |                   |
/// | Italic    | `i`    | text        |                   |
/// | Code      | `code` | text        |                   |
/// | Link      | `a`    | text        | `href`            |
/// | Image     | `img`  | `""`        | `src`, `alt`      |
///
/// # Errors
/// [`InlineError::MissingRequiredField`] for a link or image span whose url
/// is absent or empty.
pub fn text_span_to_html_node(span: &TextSpan) -> Result<LeafNode, InlineError> {
    let text = span.text();
    let leaf = match span.kind() {
        SpanKind::PlainText => LeafNode::text(text),
        SpanKind::Bold => LeafNode::new("b", text),
        SpanKind::Italic => LeafNode::new("i", text),
        SpanKind::Code => LeafNode::new("code", text),
        SpanKind::Link => LeafNode::builder()
            .tag("a")
            .value(text)
            .attributes(Attributes::new().with("href", required_url(span)?))
            .build()?,
        SpanKind::Image => LeafNode::builder()
            .tag("img")
            .value("")
            .attributes(
                Attributes::new()
                    .with("src", required_url(span)?)
                    .with("alt", text),
            )
            .build()?,
    };
    Ok(leaf)
}

fn required_url(span: &TextSpan) -> Result<&str, InlineError> {
    match span.url() {
        Some(url) if !url.is_empty() => Ok(url),
        _ => Err(InlineError::MissingRequiredField {
            field: "url",
            kind: span.kind().name(),
        }),
    }
}

/// Converts spans in order, stopping at the first span that fails.
pub fn spans_to_nodes(spans: &[TextSpan]) -> Result<Vec<HtmlNode>, InlineError> {
    spans
        .iter()
        .map(|span| text_span_to_html_node(span).map(HtmlNode::Leaf))
        .collect()
}

/// Splits `text` into spans and converts each one to a leaf node.
pub fn text_to_nodes(text: &str) -> Result<Vec<HtmlNode>, InlineError> {
    spans_to_nodes(&text_to_spans(text)?)
}
