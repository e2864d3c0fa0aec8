//! Long-text rendering: Markdown strings and rich-text documents

use pulldown_cmark::{html, Options, Parser};
use serde_json::Value;

use super::asset::get_asset_url;
use super::html::html_escape;

/// Render a long-text field value to HTML.
///
/// Strings are treated as Markdown, objects as rich-text documents.
/// Anything else renders as an empty string.
pub fn to_html(value: &Value) -> String {
    match value {
        Value::String(s) => render_markdown(s),
        Value::Object(_) if value.get("nodeType").is_some() => render_rich_text(value),
        _ => String::new(),
    }
}

/// Render Markdown to HTML
pub fn render_markdown(markdown: &str) -> String {
    if markdown.trim().is_empty() {
        return String::new();
    }

    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_SMART_PUNCTUATION;
    let parser = Parser::new_ext(markdown, options);

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Render a rich-text document node tree to HTML.
///
/// Unknown node types render their children so no copy is lost.
pub fn render_rich_text(node: &Value) -> String {
    let mut out = String::new();
    render_node(node, &mut out);
    out
}

fn render_children(node: &Value, out: &mut String) {
    for child in node.get("content").and_then(Value::as_array).into_iter().flatten() {
        render_node(child, out);
    }
}

fn wrap(tag: &str, node: &Value, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    render_children(node, out);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn render_node(node: &Value, out: &mut String) {
    let node_type = node.get("nodeType").and_then(Value::as_str).unwrap_or_default();

    match node_type {
        "document" => render_children(node, out),
        "paragraph" => wrap("p", node, out),
        "heading-1" => wrap("h1", node, out),
        "heading-2" => wrap("h2", node, out),
        "heading-3" => wrap("h3", node, out),
        "heading-4" => wrap("h4", node, out),
        "heading-5" => wrap("h5", node, out),
        "heading-6" => wrap("h6", node, out),
        "unordered-list" => wrap("ul", node, out),
        "ordered-list" => wrap("ol", node, out),
        "list-item" => wrap("li", node, out),
        "blockquote" => wrap("blockquote", node, out),
        "hr" => out.push_str("<hr>"),
        "hyperlink" => {
            let uri = node
                .pointer("/data/uri")
                .and_then(Value::as_str)
                .unwrap_or("#");
            out.push_str(&format!(r#"<a href="{}">"#, html_escape(uri)));
            render_children(node, out);
            out.push_str("</a>");
        }
        "embedded-asset-block" => {
            let target = node.pointer("/data/target");
            let url = get_asset_url(target);
            if !url.is_empty() {
                let alt = target
                    .and_then(|t| t.pointer("/fields/title"))
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                out.push_str(&format!(
                    r#"<img src="{}" alt="{}" loading="lazy">"#,
                    html_escape(&url),
                    html_escape(alt)
                ));
            }
        }
        "text" => render_text(node, out),
        _ => render_children(node, out),
    }
}

fn render_text(node: &Value, out: &mut String) {
    let mut text = html_escape(node.get("value").and_then(Value::as_str).unwrap_or_default());

    let marks = node.get("marks").and_then(Value::as_array);
    for mark in marks.into_iter().flatten() {
        let tag = match mark.get("type").and_then(Value::as_str) {
            Some("bold") => "strong",
            Some("italic") => "em",
            Some("underline") => "u",
            Some("code") => "code",
            Some("superscript") => "sup",
            Some("subscript") => "sub",
            _ => continue,
        };
        text = format!("<{tag}>{text}</{tag}>");
    }

    out.push_str(&text);
}
