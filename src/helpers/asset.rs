//! Asset URL helpers
//!
//! Assets are never downloaded. They resolve to absolute URLs with optional
//! image-API transform parameters.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde_json::Value;

/// Rewrite protocol-relative URLs (`//host/path`) to `https:`
pub fn normalize_url(url: &str) -> String {
    let url = url.trim();
    if let Some(rest) = url.strip_prefix("//") {
        format!("https://{}", rest)
    } else {
        url.to_string()
    }
}

/// URL of a resolved asset, or an empty string.
///
/// Accepts a resolved asset (`fields.file.url`), a bare file object
/// (`file.url` / `url`) or a plain URL string.
pub fn get_asset_url(asset: Option<&Value>) -> String {
    let url = match asset {
        Some(Value::String(s)) => Some(s.as_str()),
        Some(v) => v
            .pointer("/fields/file/url")
            .or_else(|| v.pointer("/file/url"))
            .or_else(|| v.get("url"))
            .and_then(Value::as_str),
        None => None,
    };
    url.map(normalize_url).unwrap_or_default()
}

/// Title of a resolved asset, used as alt text
pub fn get_asset_title(asset: Option<&Value>) -> String {
    asset
        .and_then(|v| v.pointer("/fields/title").or_else(|| v.get("title")))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Image API transform parameters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageOptions {
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// `fm`: jpg, png, webp, avif
    pub format: Option<String>,
    /// `fit`: pad, fill, scale, crop, thumb
    pub fit: Option<String>,
    /// `q`: 1-100
    pub quality: Option<u8>,
}

impl ImageOptions {
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn fit(mut self, fit: impl Into<String>) -> Self {
        self.fit = Some(fit.into());
        self
    }

    pub fn quality(mut self, quality: u8) -> Self {
        self.quality = Some(quality.clamp(1, 100));
        self
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(w) = self.width {
            params.push(("w", w.to_string()));
        }
        if let Some(h) = self.height {
            params.push(("h", h.to_string()));
        }
        if let Some(fm) = &self.format {
            params.push(("fm", fm.clone()));
        }
        if let Some(fit) = &self.fit {
            params.push(("fit", fit.clone()));
        }
        if let Some(q) = self.quality {
            params.push(("q", q.to_string()));
        }
        params
    }
}

/// Absolute image URL with transform parameters appended
///
/// # Examples
/// ```ignore
/// get_optimized_image_url("//images.ctfassets.net/a.png", &ImageOptions::default().width(600))
/// // -> "https://images.ctfassets.net/a.png?w=600"
/// ```
pub fn get_optimized_image_url(url: &str, options: &ImageOptions) -> String {
    let url = normalize_url(url);
    if url.is_empty() {
        return url;
    }

    let params = options.params();
    if params.is_empty() {
        return url;
    }

    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, utf8_percent_encode(v, NON_ALPHANUMERIC)))
        .collect::<Vec<_>>()
        .join("&");
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{}{}{}", url, sep, query)
}
