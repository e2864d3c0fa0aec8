//! Corporate page transform (about us, careers, investors)

use super::{cta, features, hero, seo, FieldReader};
use crate::cms::ContentEntry;
use crate::model::{CompanyStat, CorporatePageData, TeamMember};

/// Map a `corporatePage` entry to [`CorporatePageData`]
pub fn transform_corporate(entry: &ContentEntry) -> CorporatePageData {
    let f = FieldReader::of_entry(entry);
    let title = f.text("title");

    CorporatePageData {
        slug: f.text("slug"),
        seo: seo(&f, &title),
        hero: hero(&f),
        body_html: f.rich_text("body"),
        stats: f
            .objects("stats")
            .iter()
            .map(|s| CompanyStat {
                value: s.text("value"),
                label: s.text("label"),
            })
            .collect(),
        team: f.objects("team").iter().map(team_member).collect(),
        values: features(&f, "values"),
        cta: cta(&f),
        title,
    }
}

fn team_member(f: &FieldReader) -> TeamMember {
    let linkedin = f.text("linkedinUrl");
    TeamMember {
        name: f.text("name"),
        role: f.text("role"),
        bio: f.text("bio"),
        image_url: f.asset_url("photo"),
        linkedin_url: (!linkedin.is_empty()).then_some(linkedin),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_about_page() {
        let fields = json!({
            "slug": "about-us",
            "title": "About us",
            "body": {
                "nodeType": "document",
                "content": [{ "nodeType": "paragraph", "content": [{ "nodeType": "text", "value": "Since 2015." }] }]
            },
            "stats": [{ "value": "2.1Cr", "label": "Loans disbursed" }],
            "team": [
                { "fields": { "name": "A. Sharma", "role": "CEO", "photo": { "fields": { "file": { "url": "//img.example.net/a.jpg" } } } } },
                { "fields": { "name": "R. Iyer", "role": "CTO", "linkedinUrl": "https://linkedin.com/in/riyer" } }
            ],
            "values": [{ "title": "Transparency" }]
        });
        let data = transform_corporate(&ContentEntry::new("corporatePage", fields.as_object().cloned().unwrap()));
        assert_eq!(data.slug, "about-us");
        assert_eq!(data.seo.title, "About us");
        assert_eq!(data.body_html, "<p>Since 2015.</p>");
        assert_eq!(data.stats[0].label, "Loans disbursed");
        assert_eq!(data.team[0].image_url, "https://img.example.net/a.jpg");
        assert!(data.team[0].linkedin_url.is_none());
        assert_eq!(data.team[1].linkedin_url.as_deref(), Some("https://linkedin.com/in/riyer"));
        assert_eq!(data.values[0].title, "Transparency");
    }

    #[test]
    fn test_empty_entry() {
        assert_eq!(transform_corporate(&ContentEntry::default()), CorporatePageData::default());
    }
}
