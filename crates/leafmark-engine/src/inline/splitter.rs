use crate::error::InlineError;

use super::{
    cursor::Cursor,
    types::{SpanKind, TextSpan},
};

/// Re-partitions `spans` around paired occurrences of `delimiter`.
///
/// Only [`SpanKind::PlainText`] spans are scanned; already-typed spans pass
/// through untouched. Within one span, occurrences pair up first with second,
/// third with fourth, and so on. Text between a pair becomes a `target` span
/// (whitespace-trimmed, possibly empty); text around pairs stays plain and is
/// dropped when empty.
///
/// Each span is scanned on its own: a delimiter never pairs with one in a
/// neighbouring span.
///
/// # Caller ordering
/// When delimiters share a prefix, split the longer one first (`**` before
/// `*`), or the shorter delimiter matches inside the longer one.
///
/// # Errors
/// - [`InlineError::UnbalancedDelimiter`] if any single span holds an odd
///   number of occurrences. Nothing is returned for the other spans.
/// - [`InlineError::EmptyDelimiter`] if `delimiter` is empty.
pub fn split_spans_delimiter(
    spans: &[TextSpan],
    delimiter: &str,
    target: SpanKind,
) -> Result<Vec<TextSpan>, InlineError> {
    if delimiter.is_empty() {
        return Err(InlineError::EmptyDelimiter);
    }

    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span.clone());
            continue;
        }
        split_one(span, delimiter, target, &mut out)?;
    }
    Ok(out)
}

fn split_one(
    span: &TextSpan,
    delimiter: &str,
    target: SpanKind,
    out: &mut Vec<TextSpan>,
) -> Result<(), InlineError> {
    let text = span.text();
    let offsets = Cursor::new(text).find_all(delimiter);

    if offsets.is_empty() {
        out.push(span.clone());
        return Ok(());
    }
    if offsets.len() % 2 != 0 {
        return Err(InlineError::UnbalancedDelimiter {
            delimiter: delimiter.to_string(),
            text: text.to_string(),
        });
    }

    let mut rest_start = 0;
    for pair in offsets.chunks_exact(2) {
        let (open, close) = (pair[0], pair[1]);
        if open > rest_start {
            out.push(TextSpan::plain(&text[rest_start..open]));
        }
        let inner = &text[open + delimiter.len()..close];
        out.push(TextSpan::new(inner.trim(), target));
        rest_start = close + delimiter.len();
    }
    if rest_start < text.len() {
        out.push(TextSpan::plain(&text[rest_start..]));
    }
    Ok(())
}
