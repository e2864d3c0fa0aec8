//! Page data records
//!
//! These are the fully defaulted shapes templates consume. Every field has
//! a value; only genuinely optional links and actions are `Option`.

use serde::{Deserialize, Serialize};

/// SEO metadata for a route
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Seo {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub og_image: String,
}

/// A labelled link target (button, CTA, nav action)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub label: String,
    pub href: String,
}

impl Action {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeroSection {
    pub headline: String,
    pub subheadline: String,
    pub description: String,
    pub image_url: String,
    pub primary_action: Action,
    pub secondary_action: Option<Action>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrustIndicator {
    pub value: String,
    pub label: String,
    pub icon: String,
}

/// Product teaser shown on the home page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductCard {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    /// Explicit link; empty means the product's own route
    pub href: String,
    pub highlight: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub link: Option<Action>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    /// Rendered HTML
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CtaSection {
    pub title: String,
    pub description: String,
    pub primary_action: Action,
    pub secondary_action: Option<Action>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EligibilityCriteria {
    pub title: String,
    pub criteria: Vec<String>,
    pub documents: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyFact {
    pub label: String,
    pub value: String,
}

/// Marketing figures for a loan product. Display only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoanRange {
    pub min_amount: u64,
    pub max_amount: u64,
    pub interest_rate: String,
    pub tenure: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyStat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image_url: String,
    pub linkedin_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HomePageData {
    pub title: String,
    pub seo: Seo,
    pub hero: HeroSection,
    pub trust_indicators: Vec<TrustIndicator>,
    pub products: Vec<ProductCard>,
    pub features: Vec<Feature>,
    pub faqs: Vec<Faq>,
    pub cta: CtaSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPageData {
    pub slug: String,
    pub title: String,
    pub seo: Seo,
    pub hero_section: HeroSection,
    pub short_description: String,
    pub icon: String,
    pub key_facts: Vec<KeyFact>,
    pub features: Vec<Feature>,
    pub benefits: Vec<String>,
    pub eligibility: EligibilityCriteria,
    pub loan_range: LoanRange,
    pub faqs: Vec<Faq>,
    pub cta: CtaSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorporatePageData {
    pub slug: String,
    pub title: String,
    pub seo: Seo,
    pub hero: HeroSection,
    /// Rendered HTML
    pub body_html: String,
    pub stats: Vec<CompanyStat>,
    pub team: Vec<TeamMember>,
    pub values: Vec<Feature>,
    pub cta: CtaSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    pub children: Vec<NavLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationData {
    pub logo_text: String,
    pub logo_url: String,
    pub links: Vec<NavLink>,
    pub cta: Option<Action>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FooterSection {
    pub title: String,
    pub links: Vec<Action>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub href: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FooterData {
    pub description: String,
    pub sections: Vec<FooterSection>,
    pub social_links: Vec<SocialLink>,
    pub copyright: String,
    pub disclaimer: String,
}

/// Any renderable page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PageData {
    Home(HomePageData),
    Product(ProductPageData),
    Corporate(CorporatePageData),
}

impl PageData {
    pub fn seo(&self) -> &Seo {
        match self {
            PageData::Home(p) => &p.seo,
            PageData::Product(p) => &p.seo,
            PageData::Corporate(p) => &p.seo,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            PageData::Home(p) => &p.title,
            PageData::Product(p) => &p.title,
            PageData::Corporate(p) => &p.title,
        }
    }

    /// Slug for slugged page kinds; the home page has none
    pub fn slug(&self) -> Option<&str> {
        match self {
            PageData::Home(_) => None,
            PageData::Product(p) => Some(&p.slug),
            PageData::Corporate(p) => Some(&p.slug),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            PageData::Home(_) => "home",
            PageData::Product(_) => "product",
            PageData::Corporate(_) => "corporate",
        }
    }
}
