//! Credentials and overrides read from the process environment

pub const SPACE_ID: &str = "CONTENTFUL_SPACE_ID";
pub const ENVIRONMENT: &str = "CONTENTFUL_ENVIRONMENT";
pub const ACCESS_TOKEN: &str = "CONTENTFUL_ACCESS_TOKEN";
pub const PREVIEW_ACCESS_TOKEN: &str = "CONTENTFUL_PREVIEW_ACCESS_TOKEN";
pub const MANAGEMENT_TOKEN: &str = "CONTENTFUL_MANAGEMENT_TOKEN";
pub const SITE_URL: &str = "SITE_URL";
pub const WEBHOOK_URL: &str = "WEBHOOK_URL";

/// CMS credentials, read once at process start.
///
/// Empty variables are treated as missing.
#[derive(Clone, Default)]
pub struct CmsCredentials {
    pub space_id: Option<String>,
    pub environment: Option<String>,
    pub access_token: Option<String>,
    pub preview_access_token: Option<String>,
    pub management_token: Option<String>,
    pub site_url: Option<String>,
    pub webhook_url: Option<String>,
}

impl CmsCredentials {
    /// Read credentials from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read credentials through an arbitrary lookup (used by tests)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Self {
            space_id: get(SPACE_ID),
            environment: get(ENVIRONMENT),
            access_token: get(ACCESS_TOKEN),
            preview_access_token: get(PREVIEW_ACCESS_TOKEN),
            management_token: get(MANAGEMENT_TOKEN),
            site_url: get(SITE_URL),
            webhook_url: get(WEBHOOK_URL),
        }
    }

    /// Whether the delivery API can be used
    pub fn has_delivery(&self) -> bool {
        self.space_id.is_some() && self.access_token.is_some()
    }

    /// Whether the preview API can be used
    pub fn has_preview(&self) -> bool {
        self.space_id.is_some() && self.preview_access_token.is_some()
    }
}

// Tokens never show up in logs.
impl std::fmt::Debug for CmsCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mask = |v: &Option<String>| v.as_ref().map(|_| "***");
        f.debug_struct("CmsCredentials")
            .field("space_id", &self.space_id)
            .field("environment", &self.environment)
            .field("access_token", &mask(&self.access_token))
            .field("preview_access_token", &mask(&self.preview_access_token))
            .field("management_token", &mask(&self.management_token))
            .field("site_url", &self.site_url)
            .field("webhook_url", &self.webhook_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup() {
        let creds = CmsCredentials::from_lookup(lookup(&[
            (SPACE_ID, "space1"),
            (ACCESS_TOKEN, "cda-token"),
            (SITE_URL, "https://www.example.com"),
        ]));
        assert_eq!(creds.space_id.as_deref(), Some("space1"));
        assert!(creds.has_delivery());
        assert!(!creds.has_preview());
        assert_eq!(creds.site_url.as_deref(), Some("https://www.example.com"));
    }

    #[test]
    fn test_blank_values_are_missing() {
        let creds = CmsCredentials::from_lookup(lookup(&[(SPACE_ID, "  "), (ACCESS_TOKEN, "t")]));
        assert!(creds.space_id.is_none());
        assert!(!creds.has_delivery());
    }

    #[test]
    fn test_debug_masks_tokens() {
        let creds = CmsCredentials::from_lookup(lookup(&[(MANAGEMENT_TOKEN, "secret-cma")]));
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("secret-cma"));
        assert!(debug.contains("***"));
    }
}
