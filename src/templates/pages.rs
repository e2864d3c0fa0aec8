//! Page bodies. Each page falls back to built-in sample content when
//! no data is supplied.

use super::{defaults, sections, RenderContext};
use crate::model::{CorporatePageData, HomePageData, ProductPageData};

/// hero → trust indicators → products → features → FAQ → CTA
pub fn home(ctx: &RenderContext, data: Option<&HomePageData>) -> String {
    let fallback;
    let data = match data {
        Some(data) => data,
        None => {
            fallback = defaults::home();
            &fallback
        }
    };

    [
        sections::hero(ctx, &data.hero),
        sections::trust_indicators(&data.trust_indicators),
        sections::product_grid(ctx, &data.products),
        sections::feature_list("features", "Why choose us", &data.features),
        sections::faq_list(&data.faqs),
        sections::cta_section(ctx, &data.cta),
    ]
    .concat()
}

/// hero → key facts → features → benefits and eligibility → enquiry form → FAQ → CTA
pub fn product(ctx: &RenderContext, data: Option<&ProductPageData>) -> String {
    let fallback;
    let data = match data {
        Some(data) => data,
        None => {
            fallback = defaults::product(defaults::PRODUCT_SLUGS[0]);
            &fallback
        }
    };

    [
        sections::hero(ctx, &data.hero_section),
        sections::key_facts(&data.key_facts, &data.loan_range),
        sections::feature_list("features", "Features", &data.features),
        sections::benefits_eligibility(&data.benefits, &data.eligibility),
        sections::enquiry_form(ctx, &data.slug, &data.title),
        sections::faq_list(&data.faqs),
        sections::cta_section(ctx, &data.cta),
    ]
    .concat()
}

/// hero → stats → body → values → team → CTA
pub fn corporate(ctx: &RenderContext, data: Option<&CorporatePageData>) -> String {
    let fallback;
    let data = match data {
        Some(data) => data,
        None => {
            fallback = defaults::corporate(defaults::CORPORATE_SLUGS[0]);
            &fallback
        }
    };

    [
        sections::hero(ctx, &data.hero),
        sections::stats(&data.stats),
        sections::body(&data.body_html),
        sections::feature_list("values", "Our values", &data.values),
        sections::team(ctx, &data.team),
        sections::cta_section(ctx, &data.cta),
    ]
    .concat()
}
