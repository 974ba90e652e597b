use std::fmt;

use crate::error::InlineError;

use super::attributes::Attributes;

/// A terminal node: a tagged element around a text value, or bare text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LeafNode {
    tag: Option<String>,
    value: String,
    attributes: Attributes,
}

impl LeafNode {
    /// A tagged leaf without attributes.
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    /// An untagged leaf that renders as its raw value.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn builder() -> LeafNodeBuilder {
        LeafNodeBuilder::default()
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match &self.tag {
            None => out.push_str(&self.value),
            Some(tag) => {
                write_open_tag(out, tag, &self.attributes);
                out.push_str(&self.value);
                write_close_tag(out, tag);
            }
        }
    }
}

/// Builds a [`LeafNode`]; the value is mandatory, tag and attributes are not.
#[derive(Debug, Default)]
pub struct LeafNodeBuilder {
    tag: Option<String>,
    value: Option<String>,
    attributes: Attributes,
}

impl LeafNodeBuilder {
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(key, value);
        self
    }

    pub fn attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// # Errors
    /// [`InlineError::MissingRequiredField`] if no value was given. An empty
    /// string is a valid value.
    pub fn build(self) -> Result<LeafNode, InlineError> {
        let value = self.value.ok_or(InlineError::MissingRequiredField {
            field: "value",
            kind: "LeafNode",
        })?;
        Ok(LeafNode {
            tag: self.tag,
            value,
            attributes: self.attributes,
        })
    }
}

/// An element wrapping one or more child nodes, which it owns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParentNode {
    tag: String,
    children: Vec<HtmlNode>,
    attributes: Attributes,
}

impl ParentNode {
    /// # Errors
    /// [`InlineError::MissingRequiredField`] if `tag` is empty or there are no
    /// children.
    pub fn new(tag: impl Into<String>, children: Vec<HtmlNode>) -> Result<Self, InlineError> {
        Self::with_attributes(tag, children, Attributes::new())
    }

    pub fn with_attributes(
        tag: impl Into<String>,
        children: Vec<HtmlNode>,
        attributes: Attributes,
    ) -> Result<Self, InlineError> {
        let tag = tag.into();
        if tag.is_empty() {
            return Err(InlineError::MissingRequiredField {
                field: "tag",
                kind: "ParentNode",
            });
        }
        if children.is_empty() {
            return Err(InlineError::MissingRequiredField {
                field: "children",
                kind: "ParentNode",
            });
        }
        Ok(Self {
            tag,
            children,
            attributes,
        })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn children(&self) -> &[HtmlNode] {
        &self.children
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        write_open_tag(out, &self.tag, &self.attributes);
        for child in &self.children {
            child.write_html(out);
        }
        write_close_tag(out, &self.tag);
    }
}

/// A node in the HTML tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    /// Serializes the node and its descendants. Values and attributes are
    /// written verbatim without escaping.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            HtmlNode::Leaf(leaf) => leaf.write_html(out),
            HtmlNode::Parent(parent) => parent.write_html(out),
        }
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

fn write_open_tag(out: &mut String, tag: &str, attributes: &Attributes) {
    out.push('<');
    out.push_str(tag);
    attributes.write_html(out);
    out.push('>');
}

fn write_close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
