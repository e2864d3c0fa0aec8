//! Generator module - fetches content and writes every route to the public directory

use anyhow::Result;
use chrono::{DateTime, Utc};
use indexmap::IndexSet;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinSet;
use walkdir::WalkDir;

use crate::cms::{content_types, ContentEntry, ContentSource, EntryQuery};
use crate::helpers::{escape_xml, full_url_for};
use crate::model::{PageData, Seo};
use crate::templates::{self, defaults, Chrome, RenderContext, TemplateRenderer};
use crate::transform;
use crate::Site;

/// Slugs of the slugged page kinds
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteRoutes {
    pub products: Vec<String>,
    pub corporate: Vec<String>,
}

impl SiteRoutes {
    /// Every page route, home first
    pub fn paths(&self, site: &Site) -> Vec<String> {
        let mut paths = vec!["/".to_string()];
        paths.extend(self.products.iter().map(|s| site.config.product_route(s)));
        paths.extend(self.corporate.iter().map(|s| site.config.corporate_route(s)));
        paths
    }
}

/// What a generation run produced
#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    /// Routes written, in generation order
    pub routes: Vec<String>,
    /// Routes rendered from built-in defaults because the CMS had no entry
    pub defaulted: Vec<String>,
    /// Static files copied
    pub assets: usize,
}

/// One page ready to be written
struct RenderedPage {
    route: String,
    html: String,
    updated_at: Option<DateTime<Utc>>,
}

/// Static site generator
pub struct Generator {
    site: Site,
    source: Arc<dyn ContentSource>,
    renderer: TemplateRenderer,
    preview: bool,
}

impl Generator {
    pub fn new(site: &Site, source: Arc<dyn ContentSource>, preview: bool) -> Result<Self> {
        Ok(Self {
            site: site.clone(),
            source,
            renderer: TemplateRenderer::new()?,
            preview,
        })
    }

    fn render_context(&self) -> RenderContext<'_> {
        RenderContext::new(&self.site.config, self.preview)
    }

    /// Slugs of every product and corporate page the source knows about.
    /// Falls back to the built-in routes for a kind with no entries.
    pub async fn collect_routes(&self) -> SiteRoutes {
        let limit = self.site.config.cms.page_limit;
        let (products, corporate) = tokio::join!(
            list_slugs(self.source.as_ref(), content_types::PRODUCT, limit),
            list_slugs(self.source.as_ref(), content_types::CORPORATE, limit),
        );

        let products = or_defaults(products, defaults::PRODUCT_SLUGS, content_types::PRODUCT);
        let product_dir = self.site.config.product_dir.trim_matches('/').to_string();
        let corporate = or_defaults(corporate, defaults::CORPORATE_SLUGS, content_types::CORPORATE)
            .into_iter()
            .filter(|slug| {
                let clash = *slug == product_dir;
                if clash {
                    tracing::warn!("Corporate slug {:?} clashes with the product directory; skipped", slug);
                }
                !clash
            })
            .collect();

        SiteRoutes { products, corporate }
    }

    /// Generate the entire site
    pub async fn generate(&self) -> Result<GenerateReport> {
        fs::create_dir_all(&self.site.public_dir)?;
        let mut report = GenerateReport {
            assets: self.copy_static_assets()?,
            ..Default::default()
        };

        let ctx = self.render_context();
        let source = self.source.as_ref();

        let (home, navigation, footer, routes) = tokio::join!(
            source.fetch_first(content_types::HOME),
            source.fetch_first(content_types::NAVIGATION),
            source.fetch_first(content_types::FOOTER),
            self.collect_routes(),
        );

        let chrome = Chrome::new(
            &ctx,
            navigation.as_ref().map(transform::transform_navigation),
            footer.as_ref().map(transform::transform_footer),
        );

        let mut pages = Vec::new();

        // Home
        let home_data = home.as_ref().map(transform::transform_home);
        if home_data.is_none() {
            report.defaulted.push("/".to_string());
        }
        let home_page = PageData::Home(home_data.unwrap_or_else(defaults::home));
        pages.push(RenderedPage {
            route: "/".to_string(),
            html: self.render(&ctx, &chrome, &home_page, "/")?,
            updated_at: home.as_ref().and_then(|e| e.updated_at),
        });

        // Products
        for (slug, entry) in self.fetch_by_slug(content_types::PRODUCT, &routes.products).await? {
            let route = self.site.config.product_route(&slug);
            let data = match entry.as_ref() {
                Some(entry) => transform::transform_product(entry),
                None => {
                    report.defaulted.push(route.clone());
                    defaults::product(&slug)
                }
            };
            pages.push(RenderedPage {
                html: self.render(&ctx, &chrome, &PageData::Product(data), &route)?,
                updated_at: entry.as_ref().and_then(|e| e.updated_at),
                route,
            });
        }

        // Corporate pages
        for (slug, entry) in self.fetch_by_slug(content_types::CORPORATE, &routes.corporate).await? {
            let route = self.site.config.corporate_route(&slug);
            let data = match entry.as_ref() {
                Some(entry) => transform::transform_corporate(entry),
                None => {
                    report.defaulted.push(route.clone());
                    defaults::corporate(&slug)
                }
            };
            pages.push(RenderedPage {
                html: self.render(&ctx, &chrome, &PageData::Corporate(data), &route)?,
                updated_at: entry.as_ref().and_then(|e| e.updated_at),
                route,
            });
        }

        for page in &pages {
            self.write_route(&page.route, &page.html)?;
            report.routes.push(page.route.clone());
        }

        let not_found = self.renderer.render_not_found(&ctx, &chrome)?;
        self.write_file("404.html", &not_found)?;

        self.generate_sitemap(&pages)?;
        self.generate_robots()?;

        if !report.defaulted.is_empty() {
            tracing::info!("Rendered from defaults: {}", report.defaulted.join(", "));
        }

        Ok(report)
    }

    /// Render one page body inside the document shell
    fn render(&self, ctx: &RenderContext, chrome: &Chrome, page: &PageData, route: &str) -> Result<String> {
        let body = templates::render_body(ctx, page);
        let seo = page_seo(page.seo(), page.title());
        self.renderer.render_page(ctx, chrome, &seo, route, &body)
    }

    /// Fetch one entry per slug concurrently, keeping slug order
    async fn fetch_by_slug(
        &self,
        content_type: &'static str,
        slugs: &[String],
    ) -> Result<Vec<(String, Option<ContentEntry>)>> {
        let mut set = JoinSet::new();
        for (index, slug) in slugs.iter().enumerate() {
            let source = self.source.clone();
            let slug = slug.clone();
            set.spawn(async move {
                let entry = source.fetch_entry_by_slug(content_type, &slug).await;
                (index, slug, entry)
            });
        }

        let mut fetched: Vec<Option<(String, Option<ContentEntry>)>> = vec![None; slugs.len()];
        while let Some(joined) = set.join_next().await {
            let (index, slug, entry) = joined?;
            fetched[index] = Some((slug, entry));
        }

        Ok(fetched.into_iter().flatten().collect())
    }

    /// Output path of a route: `/products/x/` -> `public/products/x/index.html`
    fn route_path(&self, route: &str) -> PathBuf {
        let trimmed = route.trim_matches('/');
        if trimmed.is_empty() {
            self.site.public_dir.join("index.html")
        } else {
            self.site.public_dir.join(trimmed).join("index.html")
        }
    }

    fn write_route(&self, route: &str, html: &str) -> Result<()> {
        if route.split('/').any(|segment| matches!(segment, "." | "..")) {
            anyhow::bail!("Route {:?} leaves the public directory", route);
        }
        let output_path = self.route_path(route);
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output_path, html)?;
        tracing::debug!("Generated: {:?}", output_path);
        Ok(())
    }

    fn write_file(&self, name: &str, content: &str) -> Result<()> {
        let output_path = self.site.public_dir.join(name);
        fs::write(&output_path, content)?;
        tracing::debug!("Generated: {:?}", output_path);
        Ok(())
    }

    /// Generate sitemap.xml
    fn generate_sitemap(&self, pages: &[RenderedPage]) -> Result<()> {
        let today = Utc::now();
        let mut xml = String::new();
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
        xml.push('\n');

        for page in pages {
            let lastmod = page
                .updated_at
                .unwrap_or(today)
                .with_timezone(&self.site.config.tz())
                .format("%Y-%m-%d");
            let priority = if page.route == "/" { "1.0" } else { "0.8" };
            xml.push_str("  <url>\n");
            xml.push_str(&format!(
                "    <loc>{}</loc>\n",
                escape_xml(&full_url_for(&self.site.config, &page.route))
            ));
            xml.push_str(&format!("    <lastmod>{}</lastmod>\n", lastmod));
            xml.push_str(&format!("    <priority>{}</priority>\n", priority));
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        self.write_file("sitemap.xml", &xml)?;
        tracing::info!("Generated sitemap.xml ({} urls)", pages.len());
        Ok(())
    }

    /// Generate robots.txt. Preview builds disallow everything.
    fn generate_robots(&self) -> Result<()> {
        let robots = if self.preview {
            "User-agent: *\nDisallow: /\n".to_string()
        } else {
            format!(
                "User-agent: *\nAllow: /\n\nSitemap: {}\n",
                full_url_for(&self.site.config, "/sitemap.xml")
            )
        };
        self.write_file("robots.txt", &robots)
    }

    /// Copy the static directory (css, images, favicon) to the public directory
    fn copy_static_assets(&self) -> Result<usize> {
        let static_dir = &self.site.static_dir;
        if !static_dir.exists() {
            return Ok(0);
        }

        let mut copied = 0;
        for entry in WalkDir::new(static_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(static_dir)?;
            let dest = self.site.public_dir.join(relative);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &dest)?;
            copied += 1;
        }

        tracing::debug!("Copied {} static files", copied);
        Ok(copied)
    }
}

/// Page SEO with the page title standing in for a missing SEO title
fn page_seo(seo: &Seo, title: &str) -> Seo {
    let mut seo = seo.clone();
    if seo.title.is_empty() {
        seo.title = title.to_string();
    }
    seo
}

/// Unique, non-empty slugs of a content type, first occurrence wins
async fn list_slugs(source: &dyn ContentSource, content_type: &str, limit: u32) -> Vec<String> {
    let query = EntryQuery::content_type(content_type).limit(limit).include(0);
    let mut slugs = IndexSet::new();

    for entry in source.fetch_entries(&query).await {
        match entry.slug() {
            Some(slug) if !is_valid_slug(slug) => {
                tracing::warn!("{} entry {} has an invalid slug {:?}; skipped", content_type, entry.id, slug);
            }
            Some(slug) => {
                if !slugs.insert(slug.to_string()) {
                    tracing::warn!("Duplicate {} slug {:?}; keeping the first entry", content_type, slug);
                }
            }
            None => tracing::warn!("{} entry {} has no slug; skipped", content_type, entry.id),
        }
    }

    slugs.into_iter().collect()
}

/// A slug must be a single path segment: no separators, no surrounding
/// whitespace, and not `.` or `..`
fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug == slug.trim()
        && !matches!(slug, "." | "..")
        && !slug.contains(['/', '\\'])
}

fn or_defaults(slugs: Vec<String>, defaults: &[&str], content_type: &str) -> Vec<String> {
    if slugs.is_empty() {
        tracing::info!("No {} entries; generating default routes", content_type);
        defaults.iter().map(|s| s.to_string()).collect()
    } else {
        slugs
    }
}
