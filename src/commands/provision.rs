//! Provision the CMS content model

use anyhow::{Context, Result};
use std::path::Path;

use crate::provision::{ContentModel, ProvisionMode, ProvisionReport, Provisioner};
use crate::Site;

/// Map CLI flags onto a mode; at most one flag is set
pub fn mode_from_flags(validate: bool, webhooks: bool, with_webhooks: bool) -> ProvisionMode {
    if validate {
        ProvisionMode::ValidateOnly
    } else if webhooks {
        ProvisionMode::WebhooksOnly
    } else if with_webhooks {
        ProvisionMode::FullWithWebhooks
    } else {
        ProvisionMode::Full
    }
}

pub async fn run(site: &Site, mode: ProvisionMode, schema: Option<&Path>) -> Result<ProvisionReport> {
    let model = match schema {
        Some(path) => {
            let path = site.base_dir.join(path);
            ContentModel::load(&path).with_context(|| format!("Failed to load {:?}", path))?
        }
        None => ContentModel::builtin()?,
    };
    tracing::info!(
        "Provisioning {} content types ({:?})",
        model.content_types.len(),
        mode
    );

    let provisioner = Provisioner::from_credentials(&site.config, &site.creds, model)?;
    let report = provisioner.run(mode).await?;

    println!("{}", report.summary());
    if !report.is_clean() {
        tracing::warn!("Provisioning finished with problems");
    }

    Ok(report)
}
