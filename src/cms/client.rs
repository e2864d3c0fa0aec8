//! Content Delivery / Preview API client

use async_trait::async_trait;
use serde_json::Value;

use super::links::Includes;
use super::{CmsError, ContentEntry, ContentSource, EntryQuery};

/// Where and how to reach one delivery API
#[derive(Clone)]
pub struct CmsEndpoint {
    pub host: String,
    pub space_id: String,
    pub environment: String,
    pub access_token: String,
    /// Preview endpoints return draft entries
    pub preview: bool,
    pub include: u8,
}

/// HTTP client for the delivery (or preview) API
pub struct CmsClient {
    endpoint: CmsEndpoint,
    http: reqwest::Client,
}

impl CmsClient {
    pub fn new(endpoint: CmsEndpoint) -> Result<Self, CmsError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("finsite/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { endpoint, http })
    }

    pub fn is_preview(&self) -> bool {
        self.endpoint.preview
    }

    fn entries_url(&self) -> String {
        format!(
            "{}/spaces/{}/environments/{}/entries",
            self.endpoint.host.trim_end_matches('/'),
            self.endpoint.space_id,
            self.endpoint.environment
        )
    }

    /// Fetch entries, resolving links from the response includes
    pub async fn try_fetch_entries(&self, query: &EntryQuery) -> Result<Vec<ContentEntry>, CmsError> {
        let url = self.entries_url();
        let params = query.to_params(self.endpoint.include);
        let depth = query.include.unwrap_or(self.endpoint.include);

        tracing::debug!("GET {} {:?}", url, params);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.endpoint.access_token)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CmsError::Status {
                status: status.as_u16(),
                url,
                message: error_message(&body),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| CmsError::Decode(e.to_string()))?;

        parse_entries(&body, depth, self.endpoint.preview)
    }

    /// Fetch one entry by id; a missing entry is `Ok(None)`
    pub async fn try_fetch_entry_by_id(&self, id: &str) -> Result<Option<ContentEntry>, CmsError> {
        let entries = self.try_fetch_entries(&EntryQuery::by_id(id)).await?;
        Ok(entries.into_iter().next())
    }
}

#[async_trait]
impl ContentSource for CmsClient {
    fn describe(&self) -> String {
        let kind = if self.endpoint.preview { "preview" } else { "delivery" };
        format!("{} API at {}", kind, self.endpoint.host)
    }

    async fn fetch_entries(&self, query: &EntryQuery) -> Vec<ContentEntry> {
        match self.try_fetch_entries(query).await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(
                    "Failed to fetch {} entries: {}",
                    query.content_type.as_deref().unwrap_or("any"),
                    e
                );
                Vec::new()
            }
        }
    }

    async fn fetch_entry_by_id(&self, id: &str) -> Option<ContentEntry> {
        match self.try_fetch_entry_by_id(id).await {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Failed to fetch entry {}: {}", id, e);
                None
            }
        }
    }
}

/// Parse a delivery API collection into entries with links resolved
pub(crate) fn parse_entries(
    body: &Value,
    depth: u8,
    preview: bool,
) -> Result<Vec<ContentEntry>, CmsError> {
    let items = body
        .get("items")
        .and_then(Value::as_array)
        .ok_or_else(|| CmsError::Decode("missing `items` array".to_string()))?;

    let includes = Includes::from_response(body);

    Ok(items
        .iter()
        .filter_map(|item| ContentEntry::from_json(item, preview))
        .map(|mut entry| {
            if !includes.is_empty() {
                entry.fields = includes.resolve_fields(&entry.fields, depth);
            }
            entry
        })
        .collect())
}

/// Pull the `message` out of an API error body, falling back to the raw text
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.chars().take(200).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_entries_resolves_links() {
        let body = json!({
            "items": [{
                "sys": { "id": "home", "contentType": { "sys": { "id": "homePage" } } },
                "fields": { "heroImage": { "sys": { "type": "Link", "linkType": "Asset", "id": "a1" } } }
            }],
            "includes": {
                "Asset": [{ "sys": { "id": "a1" }, "fields": { "file": { "url": "//img.example.net/a.png" } } }]
            }
        });
        let entries = parse_entries(&body, 2, false).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].fields["heroImage"].pointer("/fields/file/url"),
            Some(&json!("//img.example.net/a.png"))
        );
    }

    #[test]
    fn test_parse_entries_requires_items() {
        assert!(matches!(
            parse_entries(&json!({ "total": 0 }), 2, false),
            Err(CmsError::Decode(_))
        ));
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            error_message(r#"{"sys":{"id":"AccessTokenInvalid"},"message":"The access token you sent could not be found or is invalid."}"#),
            "The access token you sent could not be found or is invalid."
        );
        assert_eq!(error_message("bad gateway"), "bad gateway");
    }
}
