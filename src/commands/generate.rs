//! Generate static files

use anyhow::Result;
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode, DebounceEventResult};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use crate::generator::{GenerateReport, Generator};
use crate::Site;

/// Generate the site from the published (or preview) content
pub async fn run(site: &Site, preview: bool) -> Result<GenerateReport> {
    let start = Instant::now();

    let source = site.clients().for_mode(preview);
    tracing::info!("Content source: {}", source.describe());
    if preview {
        tracing::info!("Preview build: pages are marked noindex");
    }

    let generator = Generator::new(site, source, preview)?;
    let report = generator.generate().await?;

    tracing::info!(
        "Generated {} routes and {} assets in {:.2}s",
        report.routes.len(),
        report.assets,
        start.elapsed().as_secs_f64()
    );

    Ok(report)
}

/// Paths whose changes trigger a rebuild
fn watch_targets(site: &Site) -> Vec<(PathBuf, RecursiveMode)> {
    let mut targets = vec![
        (site.config_path(), RecursiveMode::NonRecursive),
        (site.static_dir.clone(), RecursiveMode::Recursive),
    ];
    if let Some(file) = site.content_file() {
        targets.push((file, RecursiveMode::NonRecursive));
    }
    targets.retain(|(path, _)| path.exists());
    targets
}

fn is_relevant(path: &std::path::Path) -> bool {
    let path = path.to_string_lossy();
    !path.contains(".git") && !path.contains(".DS_Store") && !path.ends_with('~')
}

/// Rebuild whenever the config, static assets or content file change
pub async fn watch(site: &Site, preview: bool) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<DebounceEventResult>();

    let mut debouncer = new_debouncer(Duration::from_millis(500), move |res| {
        let _ = tx.send(res);
    })?;

    let targets = watch_targets(site);
    if targets.is_empty() {
        tracing::warn!("Nothing to watch in {:?}", site.base_dir);
        return Ok(());
    }
    for (path, mode) in &targets {
        debouncer.watcher().watch(path, *mode)?;
        tracing::debug!("Watching: {:?}", path);
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    let mut current = site.clone();
    while let Some(res) = rx.recv().await {
        match res {
            Ok(events) => {
                let changed: Vec<_> = events.iter().filter(|e| is_relevant(&e.path)).collect();
                if changed.is_empty() {
                    continue;
                }
                for event in &changed {
                    tracing::info!("Changed: {}", event.path.display());
                }

                match current.reload() {
                    Ok(site) => current = site,
                    Err(e) => {
                        tracing::error!("Failed to reload {}: {}", crate::CONFIG_FILE, e);
                        continue;
                    }
                }

                if let Err(e) = run(&current, preview).await {
                    tracing::error!("Generation failed: {}", e);
                }
            }
            Err(e) => tracing::error!("Watch error: {:?}", e),
        }
    }

    Ok(())
}
