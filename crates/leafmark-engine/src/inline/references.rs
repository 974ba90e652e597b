use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::error::InlineError;

use super::{
    kinds::{Image, Link},
    types::{SpanKind, TextSpan},
};

/// A `[text](url)` or `![alt](url)` occurrence with its byte range.
struct Reference<'t> {
    start: usize,
    end: usize,
    kind: SpanKind,
    text: &'t str,
    url: &'t str,
}

/// Matches both link and image syntax in one pass.
///
/// The optional leading bang is captured instead of excluded, so `![a](b)` is
/// claimed whole as an image and never re-read as a link. Look-behind would
/// be the alternative but the regex crate has none.
fn reference_regex() -> &'static Regex {
    static REFERENCE_REGEX: OnceLock<Regex> = OnceLock::new();
    REFERENCE_REGEX.get_or_init(|| {
        let esc = |c: char| regex::escape(&c.to_string());
        let (to, tc) = (esc(Link::TEXT_OPEN), esc(Link::TEXT_CLOSE));
        let (uo, uc) = (esc(Link::URL_OPEN), esc(Link::URL_CLOSE));
        let bang = esc(Image::BANG);
        let pattern = format!(
            r"(?P<bang>{bang}?){to}(?P<text>[^{to}{tc}]*){tc}{uo}(?P<url>[^{uo}{uc}]*){uc}"
        );
        Regex::new(&pattern).expect("Invalid reference regex")
    })
}

fn to_reference<'t>(caps: &Captures<'t>) -> Option<Reference<'t>> {
    let whole = caps.get(0)?;
    let kind = if caps.name("bang").is_some_and(|m| !m.is_empty()) {
        SpanKind::Image
    } else {
        SpanKind::Link
    };
    Some(Reference {
        start: whole.start(),
        end: whole.end(),
        kind,
        text: caps.name("text").map_or("", |m| m.as_str()),
        url: caps.name("url").map_or("", |m| m.as_str()),
    })
}

/// All references of `kind` in `text`, left to right, non-overlapping.
fn find_references(text: &str, kind: SpanKind) -> Vec<Reference<'_>> {
    reference_regex()
        .captures_iter(text)
        .filter_map(|caps| to_reference(&caps))
        .filter(|r| r.kind == kind)
        .collect()
}

fn extract(text: &str, kind: SpanKind) -> Result<Vec<(String, String)>, InlineError> {
    let found: Vec<_> = find_references(text, kind)
        .into_iter()
        .map(|r| (r.text.to_string(), r.url.to_string()))
        .collect();
    if found.is_empty() {
        return Err(InlineError::NoMatchFound {
            pattern: if kind == SpanKind::Image { "image" } else { "link" },
            text: text.to_string(),
        });
    }
    Ok(found)
}

/// Extracts every `![alt](url)` in `text` as `(alt, url)` pairs.
///
/// # Errors
/// [`InlineError::NoMatchFound`] when `text` contains no image.
pub fn extract_markdown_images(text: &str) -> Result<Vec<(String, String)>, InlineError> {
    extract(text, SpanKind::Image)
}

/// Extracts every `[text](url)` not preceded by `!` as `(text, url)` pairs.
///
/// # Errors
/// [`InlineError::NoMatchFound`] when `text` contains no link.
pub fn extract_markdown_links(text: &str) -> Result<Vec<(String, String)>, InlineError> {
    extract(text, SpanKind::Link)
}

/// Splits plain spans around image references into [`SpanKind::Image`] spans.
///
/// Spans without images, and non-plain spans, pass through unchanged.
pub fn split_spans_image(spans: &[TextSpan]) -> Vec<TextSpan> {
    split_references(spans, SpanKind::Image)
}

/// Splits plain spans around link references into [`SpanKind::Link`] spans.
///
/// Image syntax is left in place; run [`split_spans_image`] first to claim it.
pub fn split_spans_link(spans: &[TextSpan]) -> Vec<TextSpan> {
    split_references(spans, SpanKind::Link)
}

fn split_references(spans: &[TextSpan], kind: SpanKind) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span.clone());
            continue;
        }

        let text = span.text();
        let refs = find_references(text, kind);
        if refs.is_empty() {
            out.push(span.clone());
            continue;
        }

        let mut rest_start = 0;
        for r in refs {
            if r.start > rest_start {
                out.push(TextSpan::plain(&text[rest_start..r.start]));
            }
            out.push(TextSpan::with_url(r.text, kind, r.url));
            rest_start = r.end;
        }
        if rest_start < text.len() {
            out.push(TextSpan::plain(&text[rest_start..]));
        }
    }
    out
}
