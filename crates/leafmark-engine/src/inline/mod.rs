//! # Inline Splitting
//!
//! Turns a run of inline Markdown into an ordered sequence of [`TextSpan`]s.
//!
//! ## Architecture
//!
//! Splitting happens in passes. Each pass takes the spans produced so far,
//! re-partitions only the `PlainText` ones, and hands the result to the next
//! pass. Spans typed by an earlier pass are never split again, which is what
//! keeps `*` from firing inside an already-recognised `**bold**`.
//!
//! ## Modules
//!
//! - **`types`**: `SpanKind` and `TextSpan`
//! - **`kinds`**: Per-construct types owning their delimiters
//! - **`cursor`**: `Cursor` for byte-wise scanning
//! - **`splitter`**: `split_spans_delimiter()` for paired delimiters
//! - **`references`**: link/image extraction and splitting
//!
//! ## Pass Order
//!
//! [`DELIMITER_PASSES`] runs bold, italic, then code. Images are split before
//! links so `![alt](url)` is never read as a link.

pub mod cursor;
pub mod kinds;
pub mod references;
pub mod splitter;
pub mod types;

pub use references::{
    extract_markdown_images, extract_markdown_links, split_spans_image, split_spans_link,
};
pub use splitter::split_spans_delimiter;
pub use types::{SpanKind, TextSpan};

use crate::error::InlineError;
use kinds::{Bold, CodeSpan, Italic};

/// Delimiter passes in the order they must run.
pub const DELIMITER_PASSES: [(&str, SpanKind); 3] = [
    (Bold::DELIMITER, SpanKind::Bold),
    (Italic::DELIMITER, SpanKind::Italic),
    (CodeSpan::DELIMITER, SpanKind::Code),
];

/// Runs every inline pass over `text`: delimiters, then images, then links.
///
/// # Errors
/// [`InlineError::UnbalancedDelimiter`] if any delimiter pass finds an odd
/// count in a plain span.
pub fn text_to_spans(text: &str) -> Result<Vec<TextSpan>, InlineError> {
    let mut spans = vec![TextSpan::plain(text)];
    for (delimiter, kind) in DELIMITER_PASSES {
        spans = split_spans_delimiter(&spans, delimiter, kind)?;
    }
    spans = split_spans_image(&spans);
    Ok(split_spans_link(&spans))
}
