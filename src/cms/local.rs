//! Content source backed by a JSON export on disk

use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};

use super::client::parse_entries;
use super::{CmsError, ContentEntry, ContentSource, EntryQuery};

/// Serves entries from a delivery-API-shaped JSON file
/// (`{ "items": [...], "includes": { "Entry": [...], "Asset": [...] } }`).
///
/// Used for offline builds and fixtures.
pub struct LocalSource {
    path: PathBuf,
    entries: Vec<ContentEntry>,
}

impl LocalSource {
    /// Load and resolve every entry in the file
    pub fn load<P: AsRef<Path>>(path: P, include: u8) -> Result<Self, CmsError> {
        let path = path.as_ref().to_path_buf();
        let local_err = |message: String| CmsError::Local {
            path: path.display().to_string(),
            message,
        };

        let content = fs::read_to_string(&path).map_err(|e| local_err(e.to_string()))?;
        let body: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| local_err(e.to_string()))?;
        let entries = parse_entries(&body, include, false)?;

        tracing::debug!("Loaded {} entries from {:?}", entries.len(), path);
        Ok(Self { path, entries })
    }

    /// Build a source from entries already in memory
    pub fn from_entries(entries: Vec<ContentEntry>) -> Self {
        Self {
            path: PathBuf::new(),
            entries,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl ContentSource for LocalSource {
    fn describe(&self) -> String {
        format!("local content file {:?}", self.path)
    }

    async fn fetch_entries(&self, query: &EntryQuery) -> Vec<ContentEntry> {
        let matching = self.entries.iter().filter(|e| query.matches(e)).cloned();
        match query.limit {
            Some(limit) => matching.take(limit as usize).collect(),
            None => matching.collect(),
        }
    }

    async fn fetch_entry_by_id(&self, id: &str) -> Option<ContentEntry> {
        self.entries.iter().find(|e| e.id == id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn write_export(dir: &Path) -> PathBuf {
        let export = json!({
            "items": [
                { "sys": { "id": "p1", "contentType": { "sys": { "id": "productPage" } } },
                  "fields": { "slug": "cash-loan", "title": "Cash Loan",
                              "features": [{ "sys": { "type": "Link", "linkType": "Entry", "id": "f1" } }] } },
                { "sys": { "id": "p2", "contentType": { "sys": { "id": "productPage" } } },
                  "fields": { "slug": "gold-loan", "title": "Gold Loan" } },
                { "sys": { "id": "h1", "contentType": { "sys": { "id": "homePage" } } },
                  "fields": { "title": "Home" } }
            ],
            "includes": {
                "Entry": [{ "sys": { "id": "f1" }, "fields": { "title": "Quick disbursal" } }]
            }
        });
        let path = dir.join("content.json");
        fs::write(&path, serde_json::to_string_pretty(&export).unwrap()).unwrap();
        path
    }

    #[tokio::test]
    async fn test_filters_and_limits() {
        let dir = tempfile::tempdir().unwrap();
        let source = LocalSource::load(write_export(dir.path()), 2).unwrap();
        assert_eq!(source.len(), 3);

        let products = source
            .fetch_entries(&EntryQuery::content_type("productPage"))
            .await;
        assert_eq!(products.len(), 2);

        let limited = source
            .fetch_entries(&EntryQuery::content_type("productPage").limit(1))
            .await;
        assert_eq!(limited.len(), 1);

        let gold = source.fetch_entry_by_slug("productPage", "gold-loan").await.unwrap();
        assert_eq!(gold.id, "p2");
        assert!(source.fetch_entry_by_slug("productPage", "nope").await.is_none());
        assert!(source.fetch_entry_by_id("h1").await.is_some());
    }

    #[tokio::test]
    async fn test_links_resolved_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let source = LocalSource::load(write_export(dir.path()), 2).unwrap();
        let cash = source.fetch_entry_by_id("p1").await.unwrap();
        assert_eq!(
            cash.fields["features"].pointer("/0/fields/title"),
            Some(&json!("Quick disbursal"))
        );
    }

    #[test]
    fn test_missing_file() {
        let err = LocalSource::load("/nonexistent/content.json", 2).err().unwrap();
        assert!(err.to_string().contains("/nonexistent/content.json"));
    }
}
