//! Development server for the generated site

use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::Site;

/// Router serving the public directory, with `404.html` for unknown paths
pub fn router(site: &Site) -> Router {
    let not_found = ServeFile::new(site.public_dir.join("404.html"));
    let files = ServeDir::new(&site.public_dir)
        .append_index_html_on_directories(true)
        .not_found_service(not_found);

    Router::new()
        .fallback_service(files)
        .layer(TraceLayer::new_for_http())
}

/// Resolve the bind address; `localhost` binds to the IPv4 loopback
fn bind_addr(ip: &str, port: u16) -> Result<SocketAddr> {
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    Ok(format!("{}:{}", bind_ip, port).parse()?)
}

/// Serve the public directory, optionally rebuilding on changes
pub async fn start(site: &Site, ip: &str, port: u16, preview: bool, watch: bool) -> Result<()> {
    let addr = bind_addr(ip, port)?;
    let app = router(site);

    println!("Server running at http://{}:{}", ip, port);
    if watch {
        println!("Rebuilding on changes.");
    }
    println!("Press Ctrl+C to stop.");

    if watch {
        let site = site.clone();
        tokio::spawn(async move {
            if let Err(e) = crate::commands::generate::watch(&site, preview).await {
                tracing::error!("File watcher error: {}", e);
            }
        });
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
