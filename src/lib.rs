//! finsite: static marketing site generator backed by a headless CMS
//!
//! Content is fetched through a [`cms::ContentSource`], normalized by the
//! [`transform`] layer into fully defaulted [`model`] records, rendered by
//! [`templates`] out of variant-styled [`components`], and written to the
//! public directory by the [`generator`]. The same binary provisions the
//! CMS content model ([`provision`]).

pub mod cms;
pub mod commands;
pub mod components;
pub mod config;
pub mod generator;
pub mod helpers;
pub mod model;
pub mod provision;
pub mod server;
pub mod templates;
pub mod transform;

use anyhow::Result;
use std::path::{Path, PathBuf};

use config::{CmsCredentials, SiteConfig};

/// Name of the site configuration file in the base directory
pub const CONFIG_FILE: &str = "site.yml";

/// A site checkout: configuration, directories and credentials
#[derive(Clone, Debug)]
pub struct Site {
    /// Site configuration
    pub config: SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
    /// Static assets copied verbatim into the output
    pub static_dir: PathBuf,
    /// CMS credentials from the environment
    pub creds: CmsCredentials,
}

impl Site {
    /// Load the site in `base_dir`, reading credentials from the environment
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        Self::with_credentials(base_dir, CmsCredentials::from_env())
    }

    pub fn with_credentials<P: AsRef<Path>>(base_dir: P, creds: CmsCredentials) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let mut config = if config_path.exists() {
            SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No {} in {:?}, using defaults", CONFIG_FILE, base_dir);
            SiteConfig::default()
        };

        if let Some(url) = &creds.site_url {
            config.url = url.clone();
        }

        let public_dir = base_dir.join(&config.public_dir);
        let static_dir = base_dir.join(&config.static_dir);

        Ok(Self {
            config,
            base_dir,
            public_dir,
            static_dir,
            creds,
        })
    }

    /// Re-read `site.yml`, keeping credentials and any content file override
    pub fn reload(&self) -> Result<Self> {
        let mut site = Self::with_credentials(&self.base_dir, self.creds.clone())?;
        if site.config.cms.content_file.is_none() {
            site.config.cms.content_file = self.config.cms.content_file.clone();
        }
        Ok(site)
    }

    /// Build from a local content export instead of the live API
    pub fn with_content_file(mut self, path: impl Into<String>) -> Self {
        self.config.cms.content_file = Some(path.into());
        self
    }

    pub fn config_path(&self) -> PathBuf {
        self.base_dir.join(CONFIG_FILE)
    }

    /// Resolved path of the configured content file, if any
    pub fn content_file(&self) -> Option<PathBuf> {
        self.config.cms.content_file.as_ref().map(|f| self.base_dir.join(f))
    }

    /// Content sources for this site
    pub fn clients(&self) -> cms::CmsClients {
        cms::CmsClients::from_config(&self.config, &self.base_dir, &self.creds)
    }

    /// Generate the static site
    pub async fn generate(&self, preview: bool) -> Result<generator::GenerateReport> {
        commands::generate::run(self, preview).await
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_defaults_without_config() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::with_credentials(dir.path(), CmsCredentials::default()).unwrap();
        assert_eq!(site.public_dir, dir.path().join("public"));
        assert_eq!(site.config.url, "http://localhost:4000");
        assert!(site.content_file().is_none());
    }

    #[test]
    fn test_site_url_override() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "url: https://staging.example.in\npublic_dir: dist\n").unwrap();
        let creds = CmsCredentials {
            site_url: Some("https://www.example.in".to_string()),
            ..Default::default()
        };
        let site = Site::with_credentials(dir.path(), creds).unwrap();
        assert_eq!(site.config.url, "https://www.example.in");
        assert_eq!(site.public_dir, dir.path().join("dist"));
    }

    #[test]
    fn test_reload_keeps_content_override() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::with_credentials(dir.path(), CmsCredentials::default())
            .unwrap()
            .with_content_file("content.json");
        let reloaded = site.reload().unwrap();
        assert_eq!(reloaded.content_file(), Some(dir.path().join("content.json")));
    }
}
