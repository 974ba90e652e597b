pub mod error;
pub mod html;
pub mod inline;
pub mod io;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use error::InlineError;
pub use html::*;
pub use inline::{
    DELIMITER_PASSES, SpanKind, TextSpan, extract_markdown_images, extract_markdown_links,
    split_spans_delimiter, split_spans_image, split_spans_link, text_to_spans,
};
pub use io::*;
