//! List site routes

use anyhow::{bail, Result};

use crate::generator::{Generator, SiteRoutes};
use crate::Site;

/// Lines printed for one listing type
fn lines(site: &Site, routes: &SiteRoutes, list_type: &str) -> Result<Vec<String>> {
    let lines = match list_type {
        "route" | "routes" => {
            let paths = routes.paths(site);
            let mut lines = vec![format!("Routes ({}):", paths.len())];
            lines.extend(paths.into_iter().map(|p| format!("  {}", p)));
            lines
        }
        "product" | "products" => {
            let mut lines = vec![format!("Products ({}):", routes.products.len())];
            lines.extend(
                routes
                    .products
                    .iter()
                    .map(|slug| format!("  {} [{}]", slug, site.config.product_route(slug))),
            );
            lines
        }
        "corporate" => {
            let mut lines = vec![format!("Corporate pages ({}):", routes.corporate.len())];
            lines.extend(
                routes
                    .corporate
                    .iter()
                    .map(|slug| format!("  {} [{}]", slug, site.config.corporate_route(slug))),
            );
            lines
        }
        other => bail!(
            "Unknown list type: {}. Use one of: routes, products, corporate",
            other
        ),
    };
    Ok(lines)
}

/// List the routes the next build would generate
pub async fn run(site: &Site, list_type: &str, preview: bool) -> Result<()> {
    let source = site.clients().for_mode(preview);
    let routes = Generator::new(site, source, preview)?.collect_routes().await;

    for line in lines(site, &routes, list_type)? {
        println!("{}", line);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CmsCredentials;

    fn site() -> (tempfile::TempDir, Site) {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::with_credentials(dir.path(), CmsCredentials::default()).unwrap();
        (dir, site)
    }

    fn routes() -> SiteRoutes {
        SiteRoutes {
            products: vec!["cash-loan".to_string()],
            corporate: vec!["about-us".to_string()],
        }
    }

    #[test]
    fn test_list_routes() {
        let (_dir, site) = site();
        let out = lines(&site, &routes(), "routes").unwrap();
        assert_eq!(out[0], "Routes (3):");
        assert_eq!(out[1], "  /");
        assert!(out.iter().any(|l| l.contains("cash-loan")));
    }

    #[test]
    fn test_list_products() {
        let (_dir, site) = site();
        let out = lines(&site, &routes(), "products").unwrap();
        assert_eq!(out.len(), 2);
        assert!(out[1].starts_with("  cash-loan ["));
    }

    #[test]
    fn test_unknown_type() {
        let (_dir, site) = site();
        let err = lines(&site, &routes(), "posts").unwrap_err();
        assert!(err.to_string().contains("Unknown list type"));
    }
}
