//! # HTML Node Tree
//!
//! - **`attributes`**: insertion-ordered `Attributes`
//! - **`node`**: `LeafNode`, `ParentNode`, `HtmlNode` and the serializer
//! - **`convert`**: span-to-leaf conversion
//!
//! Rendering is escaping-free: sources are trusted, and values are written
//! exactly as given.

pub mod attributes;
pub mod convert;
pub mod node;

pub use attributes::Attributes;
pub use convert::{spans_to_nodes, text_span_to_html_node, text_to_nodes};
pub use node::{HtmlNode, LeafNode, LeafNodeBuilder, ParentNode};
