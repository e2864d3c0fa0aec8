//! Site configuration (site.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub company: String,
    pub language: String,
    pub timezone: String,

    // URL
    pub url: String,
    pub root: String,
    pub product_dir: String,

    // Directory
    pub public_dir: String,
    pub static_dir: String,

    // Pages
    pub lead_form_action: String,
    pub default_og_image: String,

    // Content source
    #[serde(default)]
    pub cms: CmsConfig,
    #[serde(default)]
    pub images: ImageConfig,
    #[serde(default)]
    pub webhook: WebhookConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Finsite Capital".to_string(),
            tagline: "Loans and insurance, made simple".to_string(),
            description: "Quick personal loans, business credit and insurance from a lender you can trust.".to_string(),
            keywords: vec![
                "personal loan".to_string(),
                "instant cash loan".to_string(),
                "insurance".to_string(),
            ],
            company: "Finsite Capital Pvt. Ltd.".to_string(),
            language: "en".to_string(),
            timezone: "Asia/Kolkata".to_string(),

            url: "http://localhost:4000".to_string(),
            root: "/".to_string(),
            product_dir: "products".to_string(),

            public_dir: "public".to_string(),
            static_dir: "static".to_string(),

            lead_form_action: "#".to_string(),
            default_og_image: String::new(),

            cms: CmsConfig::default(),
            images: ImageConfig::default(),
            webhook: WebhookConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Route of a product page, e.g. `/products/cash-loan/`
    pub fn product_route(&self, slug: &str) -> String {
        let dir = self.product_dir.trim_matches('/');
        if dir.is_empty() {
            format!("/{}/", slug)
        } else {
            format!("/{}/{}/", dir, slug)
        }
    }

    /// Route of a corporate page, e.g. `/about-us/`
    pub fn corporate_route(&self, slug: &str) -> String {
        format!("/{}/", slug.trim_matches('/'))
    }

    /// Parsed timezone, falling back to UTC when the name is unknown
    pub fn tz(&self) -> chrono_tz::Tz {
        self.timezone.parse().unwrap_or_else(|_| {
            tracing::warn!("Unknown timezone {:?}, using UTC", self.timezone);
            chrono_tz::UTC
        })
    }
}

/// CMS endpoint configuration. Secrets live in the environment, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CmsConfig {
    pub environment: String,
    pub delivery_host: String,
    pub preview_host: String,
    pub management_host: String,
    /// Link resolution depth requested from the delivery API
    pub include: u8,
    /// Max entries listed per content type when collecting routes
    pub page_limit: u32,
    /// Optional CDA-shaped JSON export used instead of the live API
    pub content_file: Option<String>,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            environment: "master".to_string(),
            delivery_host: "https://cdn.contentful.com".to_string(),
            preview_host: "https://preview.contentful.com".to_string(),
            management_host: "https://api.contentful.com".to_string(),
            include: 2,
            page_limit: 100,
            content_file: None,
        }
    }
}

/// Default image transform parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub format: String,
    pub quality: u8,
    pub hero_width: u32,
    pub card_width: u32,
    pub avatar_width: u32,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            format: "webp".to_string(),
            quality: 80,
            hero_width: 1200,
            card_width: 600,
            avatar_width: 320,
        }
    }
}

/// Build-trigger webhook registered by `finsite provision`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookConfig {
    pub name: String,
    pub topics: Vec<String>,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            name: "Site rebuild".to_string(),
            topics: vec![
                "Entry.publish".to_string(),
                "Entry.unpublish".to_string(),
                "Entry.delete".to_string(),
                "Asset.publish".to_string(),
                "Asset.unpublish".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.public_dir, "public");
        assert_eq!(config.cms.environment, "master");
        assert_eq!(config.cms.include, 2);
        assert_eq!(config.images.quality, 80);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Acme Loans
url: https://www.acme.example
product_dir: loans
cms:
  environment: staging
  content_file: content.json
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Acme Loans");
        assert_eq!(config.cms.environment, "staging");
        assert_eq!(config.cms.content_file.as_deref(), Some("content.json"));
        // untouched sections keep their defaults
        assert_eq!(config.cms.delivery_host, "https://cdn.contentful.com");
        assert_eq!(config.product_route("cash-loan"), "/loans/cash-loan/");
    }

    #[test]
    fn test_routes() {
        let config = SiteConfig::default();
        assert_eq!(config.product_route("cash-loan"), "/products/cash-loan/");
        assert_eq!(config.corporate_route("/about-us/"), "/about-us/");
    }

    #[test]
    fn test_unknown_timezone_falls_back() {
        let config = SiteConfig {
            timezone: "Mars/Olympus".to_string(),
            ..Default::default()
        };
        assert_eq!(config.tz(), chrono_tz::UTC);
        assert_eq!(SiteConfig::default().tz(), chrono_tz::Asia::Kolkata);
    }
}
