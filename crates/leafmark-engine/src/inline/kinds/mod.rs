//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Bold`**: `DELIMITER = "**"`
//! - **`Italic`**: `DELIMITER = "*"`
//! - **`CodeSpan`**: `` DELIMITER = "`" ``
//! - **`Link`**: `[`, `]`, `(`, `)`
//! - **`Image`**: `!` in front of a link
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in splitter code or in
//! the span values themselves. The orchestration layer reads these constants;
//! it never hardcodes `**` or `` ` ``.

pub mod bold;
pub mod code_span;
pub mod image;
pub mod italic;
pub mod link;

pub use bold::Bold;
pub use code_span::CodeSpan;
pub use image::Image;
pub use italic::Italic;
pub use link::Link;
