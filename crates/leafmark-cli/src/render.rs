use anyhow::{Context, Result};
use leafmark_config::Config;
use leafmark_engine::{HtmlNode, ParentNode, text_to_nodes};

/// Splits a source into paragraphs on blank lines.
///
/// Lines within a paragraph are joined with a single space. This is the only
/// block structure leafmark understands.
pub fn paragraphs(source: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in source.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                out.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        out.push(current.join(" "));
    }
    out
}

/// Renders a whole source file into one wrapped HTML fragment.
pub fn render_page(source: &str, config: &Config) -> Result<String> {
    let paragraphs = paragraphs(source);
    log::debug!("Rendering {} paragraph(s)", paragraphs.len());

    let mut children = Vec::with_capacity(paragraphs.len());
    for (index, text) in paragraphs.iter().enumerate() {
        let nodes = text_to_nodes(text)
            .with_context(|| format!("Failed to render paragraph {}", index + 1))?;
        let paragraph = ParentNode::new(config.paragraph_tag.as_str(), nodes)
            .with_context(|| format!("Failed to build paragraph {}", index + 1))?;
        children.push(HtmlNode::from(paragraph));
    }

    let page = ParentNode::new(config.wrapper_tag.as_str(), children)
        .context("Source has no content to render")?;
    Ok(page.to_html())
}
