//! End-to-end generation from a local content export

use std::fs;
use std::path::Path;

use finsite::config::CmsCredentials;
use finsite::Site;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/content.json");

fn site(dir: &Path) -> Site {
    fs::copy(FIXTURE, dir.join("content.json")).unwrap();
    fs::write(
        dir.join("site.yml"),
        "title: Acme Finance\nurl: https://www.acme.example\n",
    )
    .unwrap();
    Site::with_credentials(dir, CmsCredentials::default())
        .unwrap()
        .with_content_file("content.json")
}

fn read(site: &Site, rel: &str) -> String {
    fs::read_to_string(site.public_dir.join(rel))
        .unwrap_or_else(|e| panic!("{}: {}", rel, e))
}

#[tokio::test]
async fn writes_every_route_from_content_file() {
    let dir = tempfile::tempdir().unwrap();
    let site = site(dir.path());

    let report = site.generate(false).await.unwrap();
    assert_eq!(
        report.routes,
        vec!["/", "/products/gold-loan/", "/about-us/", "/careers/"]
    );
    assert!(report.defaulted.is_empty());

    let home = read(&site, "index.html");
    assert!(home.contains("<title>Loans in minutes | Acme Finance</title>"));
    assert!(home.contains("Money when you need it"));
    assert!(home.contains("Is my gold safe?"));
    assert!(home.contains("<strong>insured vaults</strong>"));
    assert!(home.contains("images.ctfassets.net/sp/hero.jpg"));
    assert!(home.contains(r#"<link rel="canonical" href="https://www.acme.example/">"#));
    assert!(!home.contains("noindex"));

    let product = read(&site, "products/gold-loan/index.html");
    assert!(product.contains("Gold Loan at 0.99% per month"));
    assert!(product.contains("Same-day disbursal"));

    let about = read(&site, "about-us/index.html");
    assert!(about.contains("We lend responsibly."));
    assert!(about.contains("© Acme Finance Ltd."));

    assert!(site.public_dir.join("careers/index.html").exists());
    assert!(!site.public_dir.join("products/cash-loan").exists());
    assert!(site.public_dir.join("404.html").exists());

    let sitemap = read(&site, "sitemap.xml");
    assert!(sitemap.contains("<loc>https://www.acme.example/products/gold-loan/</loc>"));
    assert!(sitemap.contains("<lastmod>2024-06-01</lastmod>"));

    let robots = read(&site, "robots.txt");
    assert!(robots.contains("Sitemap: https://www.acme.example/sitemap.xml"));
}

#[tokio::test]
async fn preview_build_is_noindex() {
    let dir = tempfile::tempdir().unwrap();
    let site = site(dir.path());

    site.generate(true).await.unwrap();

    assert!(read(&site, "index.html").contains(r#"content="noindex, nofollow""#));
    assert!(read(&site, "robots.txt").contains("Disallow: /"));
}

#[tokio::test]
async fn missing_content_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let site = Site::with_credentials(dir.path(), CmsCredentials::default())
        .unwrap()
        .with_content_file("missing.json");

    let report = site.generate(false).await.unwrap();
    assert_eq!(report.routes, report.defaulted);
    assert!(site.public_dir.join("products/cash-loan/index.html").exists());
    assert!(site.public_dir.join("products/personal-loan/index.html").exists());
    assert!(site.public_dir.join("about-us/index.html").exists());
}

#[tokio::test]
async fn copies_static_assets_and_cleans() {
    let dir = tempfile::tempdir().unwrap();
    let site = site(dir.path());
    fs::create_dir_all(site.static_dir.join("css")).unwrap();
    fs::write(site.static_dir.join("css/site.css"), "body{}").unwrap();

    let report = site.generate(false).await.unwrap();
    assert_eq!(report.assets, 1);
    assert_eq!(read(&site, "css/site.css"), "body{}");

    site.clean().unwrap();
    assert!(!site.public_dir.exists());
}
