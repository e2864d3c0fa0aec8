//! URL helper functions

use crate::config::SiteConfig;

/// Whether a link leaves the site
pub fn is_external(href: &str) -> bool {
    href.starts_with("http://")
        || href.starts_with("https://")
        || href.starts_with("//")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
}

/// Generate a URL with the root path. External links and fragments pass through.
///
/// # Examples
/// ```ignore
/// url_for(&config, "/products/cash-loan/") // -> "/site/products/cash-loan/"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    if is_external(path) || path.starts_with('#') {
        return path.to_string();
    }

    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "/about-us/") // -> "https://example.com/about-us/"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    if is_external(path) {
        return path.to_string();
    }
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.url = "https://example.com/".to_string();
        config.root = "/site/".to_string();
        config
    }

    #[test]
    fn test_url_for() {
        let config = test_config();
        assert_eq!(url_for(&config, "/css/style.css"), "/site/css/style.css");
        assert_eq!(url_for(&config, "about-us/"), "/site/about-us/");
        assert_eq!(url_for(&config, ""), "/site/");
        assert_eq!(url_for(&config, "https://x.example/"), "https://x.example/");
        assert_eq!(url_for(&config, "#apply"), "#apply");
    }

    #[test]
    fn test_full_url_for() {
        let config = test_config();
        assert_eq!(
            full_url_for(&config, "/about-us/"),
            "https://example.com/site/about-us/"
        );
    }

    #[test]
    fn test_is_external() {
        assert!(is_external("tel:+911234"));
        assert!(!is_external("/products/"));
    }
}
