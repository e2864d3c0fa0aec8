//! Content source adapter
//!
//! Everything the site knows about the CMS goes through [`ContentSource`].
//! Sources never fail: transport, auth and decoding errors are logged where
//! they happen and come back as empty lists or `None`, so a page build
//! always has something (at worst its own defaults) to render.

mod client;
mod entry;
mod error;
pub mod links;
mod local;

use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

pub use client::{CmsClient, CmsEndpoint};
pub use entry::{ContentEntry, EntryQuery, EntryStatus};
pub use error::CmsError;
pub use local::LocalSource;

use crate::config::{CmsCredentials, SiteConfig};

/// Content type identifiers used by the site
pub mod content_types {
    pub const HOME: &str = "homePage";
    pub const PRODUCT: &str = "productPage";
    pub const CORPORATE: &str = "corporatePage";
    pub const NAVIGATION: &str = "navigation";
    pub const FOOTER: &str = "footer";
    pub const FEATURE: &str = "feature";
    pub const FAQ: &str = "faq";
    pub const TEAM_MEMBER: &str = "teamMember";
}

/// Read-only access to CMS entries
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Human-readable name for logs
    fn describe(&self) -> String;

    /// Entries matching the query; empty when nothing matches or the CMS is unreachable
    async fn fetch_entries(&self, query: &EntryQuery) -> Vec<ContentEntry>;

    async fn fetch_entry_by_id(&self, id: &str) -> Option<ContentEntry>;

    /// The single entry of `content_type` whose `slug` field equals `slug`
    async fn fetch_entry_by_slug(&self, content_type: &str, slug: &str) -> Option<ContentEntry> {
        let query = EntryQuery::content_type(content_type)
            .field("slug", slug)
            .limit(1);
        self.fetch_entries(&query).await.into_iter().next()
    }

    /// The first entry of a singleton content type (home page, navigation, footer)
    async fn fetch_first(&self, content_type: &str) -> Option<ContentEntry> {
        let query = EntryQuery::content_type(content_type).limit(1);
        self.fetch_entries(&query).await.into_iter().next()
    }
}

/// Source with no content. Every page renders its defaults.
pub struct EmptySource;

#[async_trait]
impl ContentSource for EmptySource {
    fn describe(&self) -> String {
        "no content source (defaults only)".to_string()
    }

    async fn fetch_entries(&self, _query: &EntryQuery) -> Vec<ContentEntry> {
        Vec::new()
    }

    async fn fetch_entry_by_id(&self, _id: &str) -> Option<ContentEntry> {
        None
    }
}

/// The content and preview sources, constructed once per process
#[derive(Clone)]
pub struct CmsClients {
    content: Arc<dyn ContentSource>,
    preview: Option<Arc<dyn ContentSource>>,
}

impl CmsClients {
    pub fn new(content: Arc<dyn ContentSource>, preview: Option<Arc<dyn ContentSource>>) -> Self {
        Self { content, preview }
    }

    /// Pick sources from configuration and credentials.
    ///
    /// A configured content file wins over the live API. Without
    /// credentials the site builds from defaults.
    pub fn from_config(config: &SiteConfig, base_dir: &Path, creds: &CmsCredentials) -> Self {
        if let Some(file) = &config.cms.content_file {
            let path = base_dir.join(file);
            let source: Arc<dyn ContentSource> = match LocalSource::load(&path, config.cms.include) {
                Ok(local) => Arc::new(local),
                Err(e) => {
                    tracing::warn!("{}; falling back to default content", e);
                    Arc::new(EmptySource)
                }
            };
            return Self::new(source.clone(), Some(source));
        }

        let content = Self::api_source(config, creds, false);
        let preview = if creds.has_preview() {
            Some(Self::api_source(config, creds, true))
        } else {
            None
        };

        Self { content, preview }
    }

    fn api_source(config: &SiteConfig, creds: &CmsCredentials, preview: bool) -> Arc<dyn ContentSource> {
        let (space_id, token) = if preview {
            (&creds.space_id, &creds.preview_access_token)
        } else {
            (&creds.space_id, &creds.access_token)
        };

        let (Some(space_id), Some(token)) = (space_id, token) else {
            tracing::warn!("CMS credentials not configured; pages will use default content");
            return Arc::new(EmptySource);
        };

        let endpoint = CmsEndpoint {
            host: if preview {
                config.cms.preview_host.clone()
            } else {
                config.cms.delivery_host.clone()
            },
            space_id: space_id.clone(),
            environment: creds
                .environment
                .clone()
                .unwrap_or_else(|| config.cms.environment.clone()),
            access_token: token.clone(),
            preview,
            include: config.cms.include,
        };

        match CmsClient::new(endpoint) {
            Ok(client) => Arc::new(client),
            Err(e) => {
                tracing::warn!("Failed to create CMS client: {}", e);
                Arc::new(EmptySource)
            }
        }
    }

    /// The source for a build mode. Preview falls back to published content
    /// when no preview credentials exist.
    pub fn for_mode(&self, preview: bool) -> Arc<dyn ContentSource> {
        match (&self.preview, preview) {
            (Some(p), true) => p.clone(),
            (None, true) => {
                tracing::warn!("No preview credentials; using published content");
                self.content.clone()
            }
            _ => self.content.clone(),
        }
    }
}
