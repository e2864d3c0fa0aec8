//! Page templates
//!
//! Page bodies are composed in Rust from section builders and components.
//! The document shell (head, header, footer) and the 404 page are Tera
//! templates embedded in the binary.

pub mod defaults;
mod pages;
mod sections;

pub use pages::{corporate, home, product};

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::components;
use crate::config::SiteConfig;
use crate::helpers::{self, get_optimized_image_url, ImageOptions};
use crate::model::{Action, FooterData, NavLink, NavigationData, PageData, Seo};

/// Settings that page templates need besides the page data
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub config: &'a SiteConfig,
    /// Preview builds are marked `noindex`
    pub preview: bool,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a SiteConfig, preview: bool) -> Self {
        Self { config, preview }
    }

    /// Site-relative link with the configured root
    pub fn url(&self, path: &str) -> String {
        helpers::url_for(self.config, path)
    }

    pub fn product_url(&self, slug: &str) -> String {
        self.url(&self.config.product_route(slug))
    }

    /// Optimized image URL at the given width using the configured format and quality
    pub fn image(&self, url: &str, width: u32) -> String {
        let options = ImageOptions::default()
            .width(width)
            .format(&self.config.images.format)
            .quality(self.config.images.quality);
        get_optimized_image_url(url, &options)
    }
}

/// Body markup of any page kind
pub fn render_body(ctx: &RenderContext, page: &PageData) -> String {
    match page {
        PageData::Home(data) => home(ctx, Some(data)),
        PageData::Product(data) => product(ctx, Some(data)),
        PageData::Corporate(data) => corporate(ctx, Some(data)),
    }
}

/// Template renderer with the embedded site shell
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Page bodies are already HTML; text is escaped with the `html` filter
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("site/layout.html")),
            ("404.html", include_str!("site/404.html")),
            ("partials/head.html", include_str!("site/partials/head.html")),
            ("partials/header.html", include_str!("site/partials/header.html")),
            ("partials/footer.html", include_str!("site/partials/footer.html")),
        ])?;

        tera.register_filter("html", html_filter);
        tera.register_filter("strip_html", strip_html_filter);
        tera.register_filter("truncate_chars", truncate_chars_filter);
        tera.register_function("classes", classes_function);
        tera.register_function("icon", icon_function);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }

    /// Wrap a page body in the document shell
    pub fn render_page(&self, ctx: &RenderContext, chrome: &Chrome, seo: &Seo, route: &str, body: &str) -> Result<String> {
        let mut context = self.base_context(ctx, chrome);
        context.insert("page", &PageMeta::new(ctx, seo, route));
        context.insert("body", body);
        self.render("layout.html", &context)
    }

    pub fn render_not_found(&self, ctx: &RenderContext, chrome: &Chrome) -> Result<String> {
        let seo = Seo {
            title: "Page not found".to_string(),
            ..Default::default()
        };
        let mut context = self.base_context(ctx, chrome);
        let mut meta = PageMeta::new(ctx, &seo, "/404.html");
        meta.noindex = true;
        meta.kind = "404";
        context.insert("page", &meta);
        self.render("404.html", &context)
    }

    fn base_context(&self, ctx: &RenderContext, chrome: &Chrome) -> Context {
        let now = chrono::Utc::now().with_timezone(&ctx.config.tz());
        let mut context = Context::new();
        context.insert("site", &SiteData::from(ctx.config));
        context.insert("navigation", &chrome.navigation);
        context.insert("footer", &chrome.footer);
        context.insert("version", env!("CARGO_PKG_VERSION"));
        context.insert("current_year", &now.format("%Y").to_string());
        context.insert("build_time", &now.format("%d %b %Y, %H:%M %Z").to_string());
        context
    }
}

/// Navigation and footer shared by every page, with links resolved
/// against the site root
#[derive(Debug, Clone, Default)]
pub struct Chrome {
    pub navigation: NavigationData,
    pub footer: FooterData,
}

impl Chrome {
    pub fn new(ctx: &RenderContext, navigation: Option<NavigationData>, footer: Option<FooterData>) -> Self {
        let mut navigation = navigation.unwrap_or_else(defaults::navigation);
        let mut footer = footer.unwrap_or_else(defaults::footer);

        if navigation.logo_text.is_empty() {
            navigation.logo_text = ctx.config.title.clone();
        }
        navigation.logo_url = helpers::normalize_url(&navigation.logo_url);
        localize_links(ctx, &mut navigation.links);
        if let Some(cta) = navigation.cta.as_mut() {
            localize_action(ctx, cta);
        }

        for section in footer.sections.iter_mut() {
            for link in section.links.iter_mut() {
                localize_action(ctx, link);
            }
        }
        if footer.copyright.is_empty() {
            let year = chrono::Utc::now().with_timezone(&ctx.config.tz()).format("%Y");
            footer.copyright = format!("© {} {}. All rights reserved.", year, ctx.config.company);
        }

        Self { navigation, footer }
    }
}

fn normalize_image(ctx: &RenderContext, url: &str, width: u32) -> String {
    if url.is_empty() {
        String::new()
    } else {
        ctx.image(url, width)
    }
}

fn localize_links(ctx: &RenderContext, links: &mut [NavLink]) {
    for link in links.iter_mut() {
        link.href = ctx.url(&link.href);
        localize_links(ctx, &mut link.children);
    }
}

fn localize_action(ctx: &RenderContext, action: &mut Action) {
    action.href = ctx.url(&action.href);
}

#[derive(Debug, Clone, Serialize)]
struct SiteData {
    title: String,
    tagline: String,
    description: String,
    company: String,
    language: String,
    url: String,
    root: String,
}

impl From<&SiteConfig> for SiteData {
    fn from(config: &SiteConfig) -> Self {
        Self {
            title: config.title.clone(),
            tagline: config.tagline.clone(),
            description: config.description.clone(),
            company: config.company.clone(),
            language: config.language.clone(),
            url: config.url.clone(),
            root: helpers::url_for(config, "/"),
        }
    }
}

/// Head metadata of one rendered route
#[derive(Debug, Clone, Serialize)]
struct PageMeta {
    title: String,
    description: String,
    keywords: Vec<String>,
    og_image: String,
    canonical_url: String,
    route: String,
    noindex: bool,
    kind: &'static str,
}

impl PageMeta {
    fn new(ctx: &RenderContext, seo: &Seo, route: &str) -> Self {
        let config = ctx.config;
        let title = if seo.title.is_empty() {
            config.title.clone()
        } else if seo.title.contains(&config.title) {
            seo.title.clone()
        } else {
            format!("{} | {}", seo.title, config.title)
        };
        let description = if seo.description.is_empty() {
            config.description.clone()
        } else {
            helpers::strip_html(&seo.description)
        };
        let keywords = if seo.keywords.is_empty() {
            config.keywords.clone()
        } else {
            seo.keywords.clone()
        };
        let og_image = if seo.og_image.is_empty() {
            &config.default_og_image
        } else {
            &seo.og_image
        };

        Self {
            title,
            description,
            keywords,
            og_image: normalize_image(ctx, og_image, 1200),
            canonical_url: helpers::full_url_for(config, route),
            route: ctx.url(route),
            noindex: ctx.preview,
            kind: "page",
        }
    }
}

/// Tera filter: escape text for HTML content and attributes
fn html_filter(value: &tera::Value, _args: &HashMap<String, tera::Value>) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("html", "value", String, value);
    Ok(tera::Value::String(helpers::html_escape(&s)))
}

/// Tera filter: strip HTML tags
fn strip_html_filter(value: &tera::Value, _args: &HashMap<String, tera::Value>) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("strip_html", "value", String, value);
    Ok(tera::Value::String(helpers::strip_html(&s)))
}

/// Tera filter: truncate by character count
fn truncate_chars_filter(value: &tera::Value, args: &HashMap<String, tera::Value>) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("truncate_chars", "value", String, value);
    let length = match args.get("length") {
        Some(val) => tera::try_get_value!("truncate_chars", "length", usize, val),
        None => 150,
    };
    let omission = match args.get("omission") {
        Some(val) => tera::try_get_value!("truncate_chars", "omission", String, val),
        None => "...".to_string(),
    };
    Ok(tera::Value::String(helpers::truncate(&s, length, Some(&omission))))
}

/// Tera function: resolve a component's class list.
///
/// `{{ classes(component="button", variant="outline", class="mt-4") }}`
fn classes_function(args: &HashMap<String, tera::Value>) -> tera::Result<tera::Value> {
    let component = match args.get("component") {
        Some(val) => tera::try_get_value!("classes", "component", String, val),
        None => return Err(tera::Error::msg("classes: missing `component` argument")),
    };
    let styles = components::styles_for(&component)
        .ok_or_else(|| tera::Error::msg(format!("classes: unknown component `{}`", component)))?;

    let owned: Vec<(&str, String)> = args
        .iter()
        .filter(|(name, _)| name.as_str() != "component" && name.as_str() != "class")
        .map(|(name, val)| {
            let option = match val {
                tera::Value::String(s) => s.clone(),
                tera::Value::Bool(true) => "yes".to_string(),
                tera::Value::Bool(false) => "no".to_string(),
                other => other.to_string(),
            };
            (name.as_str(), option)
        })
        .collect();
    let selections: Vec<(&str, &str)> = owned.iter().map(|(name, option)| (*name, option.as_str())).collect();
    let class = args.get("class").and_then(tera::Value::as_str);

    Ok(tera::Value::String(styles.resolve(&selections, class).to_string()))
}

/// Tera function: decorative icon markup
fn icon_function(args: &HashMap<String, tera::Value>) -> tera::Result<tera::Value> {
    let name = match args.get("name") {
        Some(val) => tera::try_get_value!("icon", "name", String, val),
        None => String::new(),
    };
    Ok(tera::Value::String(helpers::icon(&name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SiteConfig {
        SiteConfig {
            url: "https://www.example.in".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_page_shell() {
        let config = config();
        let ctx = RenderContext::new(&config, false);
        let renderer = TemplateRenderer::new().unwrap();
        let chrome = Chrome::new(&ctx, None, None);
        let seo = Seo {
            title: "Cash Loan".to_string(),
            description: "Get <b>cash</b> fast".to_string(),
            ..Default::default()
        };

        let html = renderer
            .render_page(&ctx, &chrome, &seo, "/products/cash-loan/", "<section>body</section>")
            .unwrap();
        assert!(html.contains("<title>Cash Loan | Finsite Capital</title>"));
        assert!(html.contains(r#"<meta name="description" content="Get cash fast">"#));
        assert!(html.contains(r#"<link rel="canonical" href="https://www.example.in/products/cash-loan/">"#));
        assert!(html.contains("<section>body</section>"));
        assert!(!html.contains("noindex"));
        // default navigation and footer
        assert!(html.contains(&defaults::navigation().links[0].label));
        assert!(html.contains("All rights reserved"));
    }

    #[test]
    fn test_preview_is_noindex() {
        let config = config();
        let ctx = RenderContext::new(&config, true);
        let renderer = TemplateRenderer::new().unwrap();
        let html = renderer
            .render_page(&ctx, &Chrome::new(&ctx, None, None), &Seo::default(), "/", "")
            .unwrap();
        assert!(html.contains(r#"<meta name="robots" content="noindex, nofollow">"#));
        assert!(html.contains("<title>Finsite Capital</title>"));
    }

    #[test]
    fn test_not_found_page() {
        let config = config();
        let ctx = RenderContext::new(&config, false);
        let renderer = TemplateRenderer::new().unwrap();
        let html = renderer.render_not_found(&ctx, &Chrome::new(&ctx, None, None)).unwrap();
        assert!(html.contains("Page not found"));
        assert!(html.contains("noindex"));
        assert!(html.contains(r#"data-page="404""#));
    }

    #[test]
    fn test_chrome_links_use_root() {
        let config = SiteConfig {
            root: "/site/".to_string(),
            ..Default::default()
        };
        let ctx = RenderContext::new(&config, false);
        let navigation = NavigationData {
            links: vec![NavLink {
                label: "About".to_string(),
                href: "/about-us/".to_string(),
                children: vec![],
            }],
            cta: Some(Action::new("Apply", "https://apply.example.in")),
            ..Default::default()
        };
        let chrome = Chrome::new(&ctx, Some(navigation), Some(FooterData::default()));
        assert_eq!(chrome.navigation.links[0].href, "/site/about-us/");
        assert_eq!(chrome.navigation.cta.unwrap().href, "https://apply.example.in");
        assert_eq!(chrome.navigation.logo_text, "Finsite Capital");
    }

    #[test]
    fn test_classes_function() {
        let mut args = HashMap::new();
        args.insert("component".to_string(), tera::Value::from("badge"));
        args.insert("variant".to_string(), tera::Value::from("success"));
        let value = classes_function(&args).unwrap();
        assert!(value.as_str().unwrap().contains("bg-green-100"));

        args.insert("component".to_string(), tera::Value::from("carousel"));
        assert!(classes_function(&args).is_err());
    }

    #[test]
    fn test_image_options_from_config() {
        let config = SiteConfig::default();
        let ctx = RenderContext::new(&config, false);
        assert_eq!(
            ctx.image("//images.ctfassets.net/x/hero.jpg", 600),
            "https://images.ctfassets.net/x/hero.jpg?w=600&fm=webp&q=80"
        );
        assert_eq!(ctx.product_url("gold-loan"), "/products/gold-loan/");
    }
}
