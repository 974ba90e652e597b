use leafmark_engine::{
    HtmlNode, InlineError, LeafNode, ParentNode, SpanKind, TextSpan, extract_markdown_images,
    split_spans_delimiter, text_span_to_html_node, text_to_nodes, text_to_spans,
};
use pretty_assertions::assert_eq;

fn render_paragraphs(paragraphs: &[&str]) -> Result<String, InlineError> {
    let children = paragraphs
        .iter()
        .map(|p| ParentNode::new("p", text_to_nodes(p)?).map(HtmlNode::from))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ParentNode::new("div", children)?.to_html())
}

#[test]
fn page_renders_end_to_end() {
    let html = render_paragraphs(&[
        "Welcome to **leafmark**.",
        "Run `leafmark page.md` and read the [docs](/docs.html).",
        "![logo](/logo.png)",
    ])
    .unwrap();
    insta::assert_snapshot!(
        html,
        @r#"<div><p>Welcome to <b>leafmark</b>.</p><p>Run <code>leafmark page.md</code> and read the <a href="/docs.html">docs</a>.</p><p><img src="/logo.png" alt="logo"></img></p></div>"#
    );
}

#[test]
fn split_passes_can_be_driven_by_hand() {
    let spans = vec![TextSpan::plain("Text with **bold words** here")];
    let spans = split_spans_delimiter(&spans, "**", SpanKind::Bold).unwrap();
    assert_eq!(
        spans,
        vec![
            TextSpan::plain("Text with "),
            TextSpan::new("bold words", SpanKind::Bold),
            TextSpan::plain(" here"),
        ]
    );

    let html: String = spans
        .iter()
        .map(|s| text_span_to_html_node(s).unwrap().to_html())
        .collect();
    assert_eq!(html, "Text with <b>bold words</b> here");
}

#[test]
fn unbalanced_paragraph_fails_whole_page() {
    let result = render_paragraphs(&["fine *italic*", "broken *italic"]);
    assert_eq!(
        result,
        Err(InlineError::UnbalancedDelimiter {
            delimiter: "*".to_string(),
            text: "broken *italic".to_string(),
        })
    );
}

#[test]
fn empty_paragraph_list_cannot_form_a_page() {
    assert!(matches!(
        render_paragraphs(&[]),
        Err(InlineError::MissingRequiredField { field: "children", .. })
    ));
}

#[test]
fn images_extracted_from_raw_text() {
    let found = extract_markdown_images("intro ![a](1.png) mid ![b](2.png)").unwrap();
    assert_eq!(
        found,
        vec![
            ("a".to_string(), "1.png".to_string()),
            ("b".to_string(), "2.png".to_string()),
        ]
    );
}

#[test]
fn spans_are_usable_as_map_keys() {
    use std::collections::HashMap;

    let mut counts: HashMap<TextSpan, usize> = HashMap::new();
    for span in text_to_spans("*a* and *a* and *b*").unwrap() {
        *counts.entry(span).or_default() += 1;
    }
    assert_eq!(counts[&TextSpan::new("a", SpanKind::Italic)], 2);
    assert_eq!(counts[&TextSpan::new("b", SpanKind::Italic)], 1);
    assert_eq!(counts[&TextSpan::plain(" and ")], 2);
}

#[test]
fn leaf_nodes_round_trip_through_display() {
    let node = HtmlNode::from(LeafNode::new("i", "x"));
    assert_eq!(format!("{node}"), "<i>x</i>");
}
