//! CMS content-model provisioning
//!
//! Upserts every content type of a [`ContentModel`] into the space, checks
//! that the expected types exist, and registers the rebuild webhook.
//! A failing content type is logged and skipped. A space that cannot be
//! reached aborts the run.

mod management;
mod schema;

pub use management::{ManagementClient, Remote, Webhook};
pub use schema::{ContentModel, ContentTypeDef, FieldDef};

use thiserror::Error;

use crate::config::{env, CmsCredentials, SiteConfig, WebhookConfig};

#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("missing required environment variable {0}")]
    MissingVariable(&'static str),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned {status}: {message}")]
    Api {
        status: u16,
        url: String,
        message: String,
    },

    #[error("cannot reach space: {0}")]
    Connectivity(String),

    #[error("invalid content model: {0}")]
    Schema(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProvisionMode {
    /// Upsert content types, then validate
    #[default]
    Full,
    ValidateOnly,
    WebhooksOnly,
    /// Full, then register the webhook
    FullWithWebhooks,
}

impl ProvisionMode {
    fn upserts(self) -> bool {
        matches!(self, Self::Full | Self::FullWithWebhooks)
    }

    fn validates(self) -> bool {
        !matches!(self, Self::WebhooksOnly)
    }

    fn registers_webhook(self) -> bool {
        matches!(self, Self::WebhooksOnly | Self::FullWithWebhooks)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookAction {
    Created,
    Updated,
}

/// Outcome of a provisioning run
#[derive(Debug, Default)]
pub struct ProvisionReport {
    pub space: String,
    pub created: Vec<String>,
    pub updated: Vec<String>,
    /// Content type id and error message
    pub failed: Vec<(String, String)>,
    /// Expected content types absent after the run
    pub missing: Vec<String>,
    /// Set when the content types could not be listed for validation
    pub validation_error: Option<String>,
    pub webhook: Option<WebhookAction>,
    pub webhook_error: Option<String>,
}

impl ProvisionReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
            && self.missing.is_empty()
            && self.validation_error.is_none()
            && self.webhook_error.is_none()
    }

    /// Human-readable summary, one line per fact
    pub fn summary(&self) -> String {
        let mut lines = vec![format!("Space: {}", self.space)];
        if !self.created.is_empty() {
            lines.push(format!("Created: {}", self.created.join(", ")));
        }
        if !self.updated.is_empty() {
            lines.push(format!("Updated: {}", self.updated.join(", ")));
        }
        for (id, error) in &self.failed {
            lines.push(format!("Failed: {} ({})", id, error));
        }
        if !self.missing.is_empty() {
            lines.push(format!("Missing content types: {}", self.missing.join(", ")));
        }
        if let Some(error) = &self.validation_error {
            lines.push(format!("Validation: failed ({})", error));
        }
        match (&self.webhook, &self.webhook_error) {
            (Some(WebhookAction::Created), _) => lines.push("Webhook: created".to_string()),
            (Some(WebhookAction::Updated), _) => lines.push("Webhook: updated".to_string()),
            (None, Some(error)) => lines.push(format!("Webhook: failed ({})", error)),
            (None, None) => {}
        }
        lines.join("\n")
    }
}

pub struct Provisioner {
    client: ManagementClient,
    model: ContentModel,
    webhook: WebhookConfig,
    webhook_url: Option<String>,
}

impl Provisioner {
    pub fn new(
        client: ManagementClient,
        model: ContentModel,
        webhook: WebhookConfig,
        webhook_url: Option<String>,
    ) -> Self {
        Self {
            client,
            model,
            webhook,
            webhook_url,
        }
    }

    /// Build from environment credentials; the space id is checked first
    pub fn from_credentials(
        config: &SiteConfig,
        creds: &CmsCredentials,
        model: ContentModel,
    ) -> Result<Self, ProvisionError> {
        let space_id = creds
            .space_id
            .as_deref()
            .ok_or(ProvisionError::MissingVariable(env::SPACE_ID))?;
        let token = creds
            .management_token
            .as_deref()
            .ok_or(ProvisionError::MissingVariable(env::MANAGEMENT_TOKEN))?;
        let environment = creds
            .environment
            .as_deref()
            .unwrap_or(&config.cms.environment);

        let client = ManagementClient::new(&config.cms.management_host, space_id, environment, token)?;
        Ok(Self::new(
            client,
            model,
            config.webhook.clone(),
            creds.webhook_url.clone(),
        ))
    }

    pub async fn run(&self, mode: ProvisionMode) -> Result<ProvisionReport, ProvisionError> {
        let space = self.client.check_space().await?;
        tracing::info!("Connected to space {}", space);

        let mut report = ProvisionReport {
            space,
            ..Default::default()
        };

        if mode.upserts() {
            for def in &self.model.content_types {
                match self.upsert(def).await {
                    Ok(true) => report.created.push(def.id.clone()),
                    Ok(false) => report.updated.push(def.id.clone()),
                    Err(e) => {
                        tracing::warn!("Failed to provision {}: {}", def.id, e);
                        report.failed.push((def.id.clone(), e.to_string()));
                    }
                }
            }
        }

        if mode.validates() {
            match self.validate().await {
                Ok(missing) => {
                    for id in &missing {
                        tracing::warn!("Content type {} is missing", id);
                    }
                    report.missing = missing;
                }
                Err(e) => {
                    tracing::warn!("Validation failed: {}", e);
                    report.validation_error = Some(e.to_string());
                }
            }
        }

        if mode.registers_webhook() {
            match self.register_webhook().await {
                Ok(action) => report.webhook = Some(action),
                Err(e) => {
                    tracing::warn!("Webhook registration failed: {}", e);
                    report.webhook_error = Some(e.to_string());
                }
            }
        }

        Ok(report)
    }

    /// Create or update one content type and publish it. `Ok(true)` when created.
    async fn upsert(&self, def: &ContentTypeDef) -> Result<bool, ProvisionError> {
        let existing = self.client.get_content_type(&def.id).await?;
        let created = existing.is_none();
        let saved = self
            .client
            .put_content_type(def, existing.map(|r| r.version))
            .await?;
        self.client.publish_content_type(&saved).await?;
        tracing::info!("{} {}", if created { "Created" } else { "Updated" }, def.id);
        Ok(created)
    }

    /// Expected content-type ids not present in the space
    pub async fn validate(&self) -> Result<Vec<String>, ProvisionError> {
        let remote = self.client.list_content_types().await?;
        Ok(self
            .model
            .ids()
            .into_iter()
            .filter(|id| !remote.iter().any(|r| r == id))
            .map(str::to_string)
            .collect())
    }

    async fn register_webhook(&self) -> Result<WebhookAction, ProvisionError> {
        let target = self
            .webhook_url
            .as_deref()
            .ok_or(ProvisionError::MissingVariable(env::WEBHOOK_URL))?;

        let existing = self
            .client
            .list_webhooks()
            .await?
            .into_iter()
            .find(|w| w.name == self.webhook.name);

        match existing {
            Some(hook) => {
                self.client
                    .update_webhook(&hook.remote, &self.webhook.name, target, &self.webhook.topics)
                    .await?;
                tracing::info!("Updated webhook {}", self.webhook.name);
                Ok(WebhookAction::Updated)
            }
            None => {
                self.client
                    .create_webhook(&self.webhook.name, target, &self.webhook.topics)
                    .await?;
                tracing::info!("Created webhook {}", self.webhook.name);
                Ok(WebhookAction::Created)
            }
        }
    }
}
