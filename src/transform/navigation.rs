//! Navigation and footer transforms

use super::FieldReader;
use crate::cms::ContentEntry;
use crate::model::{Action, FooterData, FooterSection, NavLink, NavigationData, SocialLink};

/// Nested menus deeper than this are flattened away
const MAX_NAV_DEPTH: usize = 2;

/// Map a `navigation` entry to [`NavigationData`]
pub fn transform_navigation(entry: &ContentEntry) -> NavigationData {
    let f = FieldReader::of_entry(entry);

    NavigationData {
        logo_text: f.text("logoText"),
        logo_url: f.asset_url("logo"),
        links: nav_links(&f, "links", 1),
        cta: f.action("ctaText", "ctaLink"),
    }
}

fn nav_links(f: &FieldReader, name: &str, depth: usize) -> Vec<NavLink> {
    f.objects(name)
        .iter()
        .map(|l| NavLink {
            label: l.text("label"),
            href: l.first_text(&["href", "url"]),
            children: if depth < MAX_NAV_DEPTH {
                nav_links(l, "children", depth + 1)
            } else {
                Vec::new()
            },
        })
        .filter(|l| !l.label.is_empty())
        .collect()
}

/// Map a `footer` entry to [`FooterData`]
pub fn transform_footer(entry: &ContentEntry) -> FooterData {
    let f = FieldReader::of_entry(entry);

    FooterData {
        description: f.text("description"),
        sections: f
            .objects("sections")
            .iter()
            .map(|s| FooterSection {
                title: s.text("title"),
                links: s
                    .objects("links")
                    .iter()
                    .filter_map(|l| {
                        let href = l.first_text(&["href", "url"]);
                        let label = l.text("label");
                        (!label.is_empty() && !href.is_empty()).then(|| Action { label, href })
                    })
                    .collect(),
            })
            .collect(),
        social_links: f
            .objects("socialLinks")
            .iter()
            .map(|s| SocialLink {
                platform: s.text("platform"),
                href: s.first_text(&["href", "url"]),
            })
            .filter(|s| !s.href.is_empty())
            .collect(),
        copyright: f.text("copyright"),
        disclaimer: f.text("disclaimer"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(ct: &str, fields: serde_json::Value) -> ContentEntry {
        ContentEntry::new(ct, fields.as_object().cloned().unwrap())
    }

    #[test]
    fn test_navigation() {
        let data = transform_navigation(&entry(
            "navigation",
            json!({
                "logoText": "Finsite",
                "links": [
                    { "label": "Loans", "href": "/products/", "children": [
                        { "label": "Cash Loan", "url": "/products/cash-loan/", "children": [
                            { "label": "Too deep", "href": "/x" }
                        ]}
                    ]},
                    { "href": "/no-label" }
                ],
                "ctaText": "Apply",
                "ctaLink": "/apply"
            }),
        ));
        assert_eq!(data.logo_text, "Finsite");
        assert_eq!(data.links.len(), 1);
        assert_eq!(data.links[0].children[0].href, "/products/cash-loan/");
        assert!(data.links[0].children[0].children.is_empty());
        assert_eq!(data.cta, Some(Action::new("Apply", "/apply")));
    }

    #[test]
    fn test_footer() {
        let data = transform_footer(&entry(
            "footer",
            json!({
                "sections": [{ "title": "Company", "links": [
                    { "label": "About", "href": "/about-us/" },
                    { "label": "Broken" }
                ]}],
                "socialLinks": [{ "platform": "linkedin", "url": "https://linkedin.com/company/x" }, { "platform": "x" }],
                "copyright": "© Finsite"
            }),
        ));
        assert_eq!(data.sections[0].links, vec![Action::new("About", "/about-us/")]);
        assert_eq!(data.social_links.len(), 1);
        assert_eq!(data.copyright, "© Finsite");
        assert_eq!(data.disclaimer, "");
    }

    #[test]
    fn test_empty_entries() {
        assert_eq!(transform_navigation(&ContentEntry::default()), NavigationData::default());
        assert_eq!(transform_footer(&ContentEntry::default()), FooterData::default());
    }
}
