//! Transform layer: CMS entries to page data
//!
//! Each transform is a total, side-effect-free function. Any entry,
//! including an empty one, produces a fully populated record; fields that
//! are missing or malformed fall back independently.

mod corporate;
mod fields;
mod home;
mod navigation;
mod product;

pub use corporate::transform_corporate;
pub use fields::FieldReader;
pub use home::transform_home;
pub use navigation::{transform_footer, transform_navigation};
pub use product::transform_product;

use crate::model::{CtaSection, Faq, Feature, HeroSection, Seo};

/// SEO block from `seoTitle`/`seoDescription`/`seoKeywords`/`ogImage`
pub(crate) fn seo(f: &FieldReader, title: &str) -> Seo {
    Seo {
        title: f.text_or("seoTitle", title),
        description: f.first_text(&["seoDescription", "shortDescription", "heroSubheadline"]),
        keywords: f.texts("seoKeywords"),
        og_image: f.asset_url("ogImage"),
    }
}

/// Hero block from the flat `hero*` fields
pub(crate) fn hero(f: &FieldReader) -> HeroSection {
    HeroSection {
        headline: f.text("heroHeadline"),
        subheadline: f.text("heroSubheadline"),
        description: f.text("heroDescription"),
        image_url: f.asset_url("heroImage"),
        primary_action: f.required_action("heroPrimaryCtaText", "heroPrimaryCtaLink"),
        secondary_action: f.action("heroSecondaryCtaText", "heroSecondaryCtaLink"),
    }
}

/// Closing call-to-action block from the flat `cta*` fields
pub(crate) fn cta(f: &FieldReader) -> CtaSection {
    CtaSection {
        title: f.text("ctaTitle"),
        description: f.text("ctaDescription"),
        primary_action: f.required_action("ctaButtonText", "ctaButtonLink"),
        secondary_action: f.action("ctaSecondaryText", "ctaSecondaryLink"),
    }
}

/// A `feature` entry or inline object
pub(crate) fn feature(f: &FieldReader) -> Feature {
    Feature {
        title: f.text("title"),
        description: f.text("description"),
        icon: f.text("icon"),
        link: f.action("linkText", "linkUrl"),
    }
}

/// A `faq` entry or inline object; the answer may be Markdown or rich text
pub(crate) fn faq(f: &FieldReader) -> Faq {
    Faq {
        question: f.text("question"),
        answer: f.rich_text("answer"),
    }
}

pub(crate) fn features(f: &FieldReader, name: &str) -> Vec<Feature> {
    f.objects(name).iter().map(feature).collect()
}

pub(crate) fn faqs(f: &FieldReader) -> Vec<Faq> {
    f.objects("faqs")
        .iter()
        .map(faq)
        .filter(|q| !q.question.is_empty())
        .collect()
}
