//! Content Management API client

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde_json::{json, Value};

use super::schema::ContentTypeDef;
use super::ProvisionError;

const CONTENT_TYPE: &str = "application/vnd.contentful.management.v1+json";
const VERSION_HEADER: &str = "X-Contentful-Version";

/// Identity of a remote resource, as needed for optimistic locking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remote {
    pub id: String,
    pub version: u64,
}

impl Remote {
    fn from_json(body: &Value) -> Option<Self> {
        let sys = body.get("sys")?;
        Some(Self {
            id: sys.get("id")?.as_str()?.to_string(),
            version: sys.get("version").and_then(Value::as_u64).unwrap_or(0),
        })
    }
}

/// A registered webhook definition
#[derive(Debug, Clone)]
pub struct Webhook {
    pub remote: Remote,
    pub name: String,
    pub url: String,
}

pub struct ManagementClient {
    http: reqwest::Client,
    host: String,
    space_id: String,
    environment: String,
    token: String,
}

impl ManagementClient {
    pub fn new(
        host: &str,
        space_id: &str,
        environment: &str,
        token: &str,
    ) -> Result<Self, ProvisionError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("finsite/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            host: host.trim_end_matches('/').to_string(),
            space_id: space_id.to_string(),
            environment: environment.to_string(),
            token: token.to_string(),
        })
    }

    fn space_url(&self) -> String {
        format!("{}/spaces/{}", self.host, self.space_id)
    }

    fn content_type_url(&self, id: &str) -> String {
        format!(
            "{}/environments/{}/content_types/{}",
            self.space_url(),
            self.environment,
            id
        )
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        tracing::debug!("{} {}", method, url);
        self.http
            .request(method, url)
            .bearer_auth(&self.token)
            .header(reqwest::header::CONTENT_TYPE, CONTENT_TYPE)
    }

    /// Send and decode, mapping non-2xx into `ProvisionError::Api`
    async fn send(&self, request: RequestBuilder, url: &str) -> Result<Value, ProvisionError> {
        let response = request.send().await?;
        let response = check_status(response, url).await?;
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| ProvisionError::Api {
            status: 200,
            url: url.to_string(),
            message: format!("invalid JSON: {}", e),
        })
    }

    /// Verify the space exists and the token can read it
    pub async fn check_space(&self) -> Result<String, ProvisionError> {
        let url = self.space_url();
        let body = self
            .send(self.request(Method::GET, &url), &url)
            .await
            .map_err(|e| ProvisionError::Connectivity(e.to_string()))?;
        Ok(body
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or(self.space_id.as_str())
            .to_string())
    }

    /// A missing content type is `Ok(None)`
    pub async fn get_content_type(&self, id: &str) -> Result<Option<Remote>, ProvisionError> {
        let url = self.content_type_url(id);
        let response = self.request(Method::GET, &url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let body: Value = check_status(response, &url).await?.json().await?;
        Ok(Remote::from_json(&body))
    }

    /// Create (no version) or update (current version) a content type
    pub async fn put_content_type(
        &self,
        def: &ContentTypeDef,
        version: Option<u64>,
    ) -> Result<Remote, ProvisionError> {
        let url = self.content_type_url(&def.id);
        let mut request = self.request(Method::PUT, &url).json(&def.to_payload());
        if let Some(version) = version {
            request = request.header(VERSION_HEADER, version.to_string());
        }
        let body = self.send(request, &url).await?;
        Remote::from_json(&body).ok_or_else(|| missing_sys(&url))
    }

    pub async fn publish_content_type(&self, remote: &Remote) -> Result<Remote, ProvisionError> {
        let url = format!("{}/published", self.content_type_url(&remote.id));
        let request = self
            .request(Method::PUT, &url)
            .header(VERSION_HEADER, remote.version.to_string());
        let body = self.send(request, &url).await?;
        Remote::from_json(&body).ok_or_else(|| missing_sys(&url))
    }

    /// Ids of every content type in the environment
    pub async fn list_content_types(&self) -> Result<Vec<String>, ProvisionError> {
        let url = format!(
            "{}/environments/{}/content_types",
            self.space_url(),
            self.environment
        );
        let request = self.request(Method::GET, &url).query(&[("limit", "1000")]);
        let body = self.send(request, &url).await?;
        Ok(items(&body)
            .filter_map(Remote::from_json)
            .map(|r| r.id)
            .collect())
    }

    pub async fn list_webhooks(&self) -> Result<Vec<Webhook>, ProvisionError> {
        let url = format!("{}/webhook_definitions", self.space_url());
        let body = self.send(self.request(Method::GET, &url), &url).await?;
        Ok(items(&body)
            .filter_map(|item| {
                Some(Webhook {
                    remote: Remote::from_json(item)?,
                    name: item.get("name")?.as_str()?.to_string(),
                    url: item
                        .get("url")
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string(),
                })
            })
            .collect())
    }

    pub async fn create_webhook(
        &self,
        name: &str,
        target: &str,
        topics: &[String],
    ) -> Result<Remote, ProvisionError> {
        let url = format!("{}/webhook_definitions", self.space_url());
        let request = self
            .request(Method::POST, &url)
            .json(&webhook_payload(name, target, topics));
        let body = self.send(request, &url).await?;
        Remote::from_json(&body).ok_or_else(|| missing_sys(&url))
    }

    pub async fn update_webhook(
        &self,
        remote: &Remote,
        name: &str,
        target: &str,
        topics: &[String],
    ) -> Result<Remote, ProvisionError> {
        let url = format!("{}/webhook_definitions/{}", self.space_url(), remote.id);
        let request = self
            .request(Method::PUT, &url)
            .header(VERSION_HEADER, remote.version.to_string())
            .json(&webhook_payload(name, target, topics));
        let body = self.send(request, &url).await?;
        Remote::from_json(&body).ok_or_else(|| missing_sys(&url))
    }
}

fn webhook_payload(name: &str, target: &str, topics: &[String]) -> Value {
    json!({
        "name": name,
        "url": target,
        "topics": topics,
        "filters": [],
        "headers": [],
    })
}

fn items(body: &Value) -> impl Iterator<Item = &Value> {
    body.get("items")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
}

fn missing_sys(url: &str) -> ProvisionError {
    ProvisionError::Api {
        status: 200,
        url: url.to_string(),
        message: "response has no sys.id".to_string(),
    }
}

async fn check_status(response: Response, url: &str) -> Result<Response, ProvisionError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.chars().take(200).collect());
    Err(ProvisionError::Api {
        status: status.as_u16(),
        url: url.to_string(),
        message,
    })
}
