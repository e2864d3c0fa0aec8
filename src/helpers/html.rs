//! HTML helper functions

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Strip HTML tags from a string
pub fn strip_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;

    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

/// Escape XML special characters
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Render an attribute list, skipping attributes without a value.
///
/// # Examples
/// ```ignore
/// attrs(&[("href", Some("/a")), ("target", None)]) // -> r#" href="/a""#
/// ```
pub fn attrs(pairs: &[(&str, Option<&str>)]) -> String {
    pairs
        .iter()
        .filter_map(|(name, value)| value.map(|v| format!(r#" {}="{}""#, name, html_escape(v))))
        .collect()
}

/// Decorative icon placeholder, styled by the stylesheet per icon name
pub fn icon(name: &str) -> String {
    if name.trim().is_empty() {
        return String::new();
    }
    format!(
        r#"<span class="icon icon-{}" aria-hidden="true"></span>"#,
        slug::slugify(name)
    )
}
