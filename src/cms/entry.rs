//! CMS entries and entry queries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Publication state of an entry as seen by the API that returned it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    #[default]
    Published,
    Draft,
    Changed,
}

impl EntryStatus {
    /// Derive the status from an entry's `sys` block.
    ///
    /// The delivery API only ever returns published content. For preview
    /// entries a missing `publishedVersion` means the entry was never
    /// published, and a version more than one ahead of it means there are
    /// unpublished edits.
    pub fn from_sys(sys: &Value, preview: bool) -> Self {
        if !preview {
            return EntryStatus::Published;
        }

        let version = sys.get("version").and_then(Value::as_u64);
        let published = sys.get("publishedVersion").and_then(Value::as_u64);

        match (version, published) {
            (Some(v), Some(p)) if v > p + 1 => EntryStatus::Changed,
            (_, Some(_)) => EntryStatus::Published,
            _ if sys.get("publishedAt").is_some() || sys.get("firstPublishedAt").is_some() => {
                EntryStatus::Published
            }
            _ => EntryStatus::Draft,
        }
    }
}

/// An opaque CMS record: content type plus loosely typed fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentEntry {
    pub id: String,
    pub content_type: String,
    pub fields: Map<String, Value>,
    #[serde(default)]
    pub status: EntryStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ContentEntry {
    /// Create an entry from a content type and a field map
    pub fn new(content_type: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            content_type: content_type.into(),
            fields,
            ..Default::default()
        }
    }

    /// Parse an item of a delivery API `items` array.
    ///
    /// Returns `None` when the item has no `sys.id`.
    pub fn from_json(item: &Value, preview: bool) -> Option<Self> {
        let sys = item.get("sys")?;
        let id = sys.get("id")?.as_str()?.to_string();

        let content_type = sys
            .pointer("/contentType/sys/id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let fields = item
            .get("fields")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();

        Some(Self {
            id,
            content_type,
            fields,
            status: EntryStatus::from_sys(sys, preview),
            created_at: parse_timestamp(sys.get("createdAt")),
            updated_at: parse_timestamp(sys.get("updatedAt")),
        })
    }

    /// Get a raw field value
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// The entry's `slug` field, if it has one
    pub fn slug(&self) -> Option<&str> {
        self.field("slug").and_then(Value::as_str).filter(|s| !s.is_empty())
    }
}

fn parse_timestamp(value: Option<&Value>) -> Option<DateTime<Utc>> {
    value
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

/// A read query against a content source
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryQuery {
    pub content_type: Option<String>,
    /// Equality filters in delivery API syntax (`fields.slug`, `sys.id`)
    pub filters: Vec<(String, String)>,
    pub limit: Option<u32>,
    pub include: Option<u8>,
}

impl EntryQuery {
    /// Query all entries of a content type
    pub fn content_type(content_type: impl Into<String>) -> Self {
        Self {
            content_type: Some(content_type.into()),
            ..Default::default()
        }
    }

    /// Query a single entry by id
    pub fn by_id(id: impl Into<String>) -> Self {
        Self::default().filter("sys.id", id).limit(1)
    }

    /// Add an equality filter on an entry field
    pub fn field(self, name: &str, value: impl Into<String>) -> Self {
        self.filter(format!("fields.{}", name), value)
    }

    /// Add a raw equality filter
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((key.into(), value.into()));
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn include(mut self, depth: u8) -> Self {
        self.include = Some(depth);
        self
    }

    /// Query-string parameters for the delivery API
    pub fn to_params(&self, default_include: u8) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(ct) = &self.content_type {
            params.push(("content_type".to_string(), ct.clone()));
        }
        params.extend(self.filters.iter().cloned());
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        params.push((
            "include".to_string(),
            self.include.unwrap_or(default_include).to_string(),
        ));
        params
    }

    /// Evaluate the query against an entry held in memory
    pub fn matches(&self, entry: &ContentEntry) -> bool {
        if let Some(ct) = &self.content_type {
            if &entry.content_type != ct {
                return false;
            }
        }

        self.filters.iter().all(|(key, expected)| {
            if key == "sys.id" {
                return &entry.id == expected;
            }
            match key.strip_prefix("fields.") {
                Some(name) => match entry.field(name) {
                    Some(Value::String(s)) => s == expected,
                    Some(Value::Number(n)) => &n.to_string() == expected,
                    Some(Value::Bool(b)) => &b.to_string() == expected,
                    _ => false,
                },
                None => {
                    tracing::debug!("Unsupported filter {} ignored as non-matching", key);
                    false
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json() {
        let item = json!({
            "sys": {
                "id": "abc",
                "contentType": { "sys": { "id": "productPage" } },
                "createdAt": "2024-03-01T10:00:00.000Z",
                "updatedAt": "2024-03-02T10:00:00Z"
            },
            "fields": { "slug": "cash-loan", "title": "Cash Loan" }
        });
        let entry = ContentEntry::from_json(&item, false).unwrap();
        assert_eq!(entry.id, "abc");
        assert_eq!(entry.content_type, "productPage");
        assert_eq!(entry.slug(), Some("cash-loan"));
        assert_eq!(entry.status, EntryStatus::Published);
        assert!(entry.created_at.is_some());
        assert!(entry.updated_at.is_some());
    }

    #[test]
    fn test_from_json_without_id() {
        assert!(ContentEntry::from_json(&json!({ "fields": {} }), false).is_none());
    }

    #[test]
    fn test_preview_status() {
        assert_eq!(EntryStatus::from_sys(&json!({ "version": 3 }), true), EntryStatus::Draft);
        assert_eq!(
            EntryStatus::from_sys(&json!({ "version": 5, "publishedVersion": 2 }), true),
            EntryStatus::Changed
        );
        assert_eq!(
            EntryStatus::from_sys(&json!({ "version": 3, "publishedVersion": 2 }), true),
            EntryStatus::Published
        );
        assert_eq!(EntryStatus::from_sys(&json!({}), false), EntryStatus::Published);
    }

    #[test]
    fn test_query_params() {
        let query = EntryQuery::content_type("productPage")
            .field("slug", "cash-loan")
            .limit(1);
        assert_eq!(
            query.to_params(2),
            vec![
                ("content_type".to_string(), "productPage".to_string()),
                ("fields.slug".to_string(), "cash-loan".to_string()),
                ("limit".to_string(), "1".to_string()),
                ("include".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_matches() {
        let mut fields = Map::new();
        fields.insert("slug".to_string(), json!("gold-loan"));
        fields.insert("order".to_string(), json!(3));
        let mut entry = ContentEntry::new("productPage", fields);
        entry.id = "p1".to_string();

        assert!(EntryQuery::content_type("productPage").matches(&entry));
        assert!(!EntryQuery::content_type("homePage").matches(&entry));
        assert!(EntryQuery::content_type("productPage")
            .field("slug", "gold-loan")
            .matches(&entry));
        assert!(EntryQuery::content_type("productPage")
            .field("order", "3")
            .matches(&entry));
        assert!(!EntryQuery::content_type("productPage")
            .field("slug", "cash-loan")
            .matches(&entry));
        assert!(EntryQuery::by_id("p1").matches(&entry));
        assert!(!EntryQuery::default().filter("sys.locale", "en").matches(&entry));
    }
}
