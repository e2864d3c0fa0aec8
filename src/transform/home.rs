//! Home page transform

use super::{cta, faqs, features, hero, seo, FieldReader};
use crate::cms::ContentEntry;
use crate::model::{HomePageData, ProductCard, TrustIndicator};

/// Map a `homePage` entry to [`HomePageData`]
pub fn transform_home(entry: &ContentEntry) -> HomePageData {
    let f = FieldReader::of_entry(entry);
    let title = f.text("title");

    HomePageData {
        seo: seo(&f, &title),
        hero: hero(&f),
        trust_indicators: f
            .objects("trustIndicators")
            .iter()
            .map(|t| TrustIndicator {
                value: t.text("value"),
                label: t.text("label"),
                icon: t.text("icon"),
            })
            .collect(),
        products: f.objects("products").iter().map(product_card).collect(),
        features: features(&f, "features"),
        faqs: faqs(&f),
        cta: cta(&f),
        title,
    }
}

/// Teaser card from a linked `productPage` entry or an inline object
fn product_card(f: &FieldReader) -> ProductCard {
    ProductCard {
        slug: f.text("slug"),
        title: f.text("title"),
        description: f.first_text(&["shortDescription", "description", "heroSubheadline"]),
        icon: f.text("icon"),
        href: f.text("href"),
        highlight: f.text("highlight"),
    }
}
