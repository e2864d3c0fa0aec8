//! Built-in sample content, rendered when the CMS has nothing for a page

use crate::model::*;

/// Product routes generated when the CMS lists no product pages
pub const PRODUCT_SLUGS: &[&str] = &["cash-loan", "personal-loan"];

/// Corporate routes generated when the CMS lists no corporate pages
pub const CORPORATE_SLUGS: &[&str] = &["about-us"];

fn action(label: &str, href: &str) -> Action {
    Action::new(label, href)
}

fn feature(icon: &str, title: &str, description: &str) -> Feature {
    Feature {
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        link: None,
    }
}

fn faq(question: &str, answer: &str) -> Faq {
    Faq {
        question: question.to_string(),
        answer: format!("<p>{}</p>", answer),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn apply_cta() -> CtaSection {
    CtaSection {
        title: "Ready when you are".to_string(),
        description: "Check your eligibility in two minutes. It will not affect your credit score.".to_string(),
        primary_action: action("Check eligibility", "#apply"),
        secondary_action: Some(action("Talk to us", "/contact-us/")),
    }
}

pub fn home() -> HomePageData {
    HomePageData {
        title: "Home".to_string(),
        seo: Seo {
            title: "Instant loans and insurance".to_string(),
            description: "Quick personal loans, business credit and insurance from a lender you can trust."
                .to_string(),
            keywords: Vec::new(),
            og_image: String::new(),
        },
        hero: HeroSection {
            headline: "Credit that keeps up with you".to_string(),
            subheadline: "Loans from ₹10,000 to ₹5 lakh, approved in minutes".to_string(),
            description: "Paperless applications, transparent pricing and money in your account within 24 hours."
                .to_string(),
            image_url: String::new(),
            primary_action: action("Apply now", "/products/cash-loan/"),
            secondary_action: Some(action("Explore products", "#products")),
        },
        trust_indicators: vec![
            TrustIndicator {
                value: "2.1Cr+".to_string(),
                label: "Loans disbursed".to_string(),
                icon: "wallet".to_string(),
            },
            TrustIndicator {
                value: "4.6/5".to_string(),
                label: "App rating".to_string(),
                icon: "star".to_string(),
            },
            TrustIndicator {
                value: "24 hrs".to_string(),
                label: "Average disbursal".to_string(),
                icon: "clock".to_string(),
            },
            TrustIndicator {
                value: "RBI".to_string(),
                label: "Registered NBFC".to_string(),
                icon: "shield".to_string(),
            },
        ],
        products: vec![
            ProductCard {
                slug: "cash-loan".to_string(),
                title: "Cash Loan".to_string(),
                description: "Small-ticket loans for everyday needs, disbursed the same day.".to_string(),
                icon: "cash".to_string(),
                href: String::new(),
                highlight: "Most popular".to_string(),
            },
            ProductCard {
                slug: "personal-loan".to_string(),
                title: "Personal Loan".to_string(),
                description: "Up to ₹5 lakh for weddings, travel or home upgrades.".to_string(),
                icon: "user".to_string(),
                href: String::new(),
                highlight: String::new(),
            },
        ],
        features: vec![
            feature("bolt", "Instant approval", "A decision in minutes, not days."),
            feature("file", "Minimal paperwork", "PAN, Aadhaar and a bank statement. That is all."),
            feature("percent", "Fair pricing", "No hidden charges. Every fee is shown upfront."),
        ],
        faqs: vec![
            faq(
                "Who can apply?",
                "Salaried or self-employed Indian residents aged 21 to 58 with a regular income.",
            ),
            faq(
                "How fast is disbursal?",
                "Most approved loans reach your bank account within 24 hours.",
            ),
        ],
        cta: apply_cta(),
    }
}

pub fn product(slug: &str) -> ProductPageData {
    let (title, short, rate, min, max, tenure) = match slug {
        "personal-loan" => (
            "Personal Loan",
            "Borrow up to ₹5 lakh for life's bigger plans",
            "from 12.5% p.a.",
            50_000,
            500_000,
            "12 to 60 months",
        ),
        _ => (
            "Cash Loan",
            "Quick cash for everyday needs, disbursed the same day",
            "from 14% p.a.",
            10_000,
            200_000,
            "3 to 24 months",
        ),
    };

    ProductPageData {
        slug: slug.to_string(),
        title: title.to_string(),
        seo: Seo {
            title: title.to_string(),
            description: short.to_string(),
            ..Default::default()
        },
        hero_section: HeroSection {
            headline: title.to_string(),
            subheadline: short.to_string(),
            description: String::new(),
            image_url: String::new(),
            primary_action: action("Apply now", "#apply"),
            secondary_action: Some(action("Check eligibility", "#eligibility")),
        },
        short_description: short.to_string(),
        icon: "cash".to_string(),
        key_facts: vec![
            KeyFact {
                label: "Interest rate".to_string(),
                value: rate.to_string(),
            },
            KeyFact {
                label: "Tenure".to_string(),
                value: tenure.to_string(),
            },
        ],
        features: vec![
            feature("bolt", "Fast approval", "Get a decision within minutes of applying."),
            feature("phone", "Fully online", "Apply, sign and track from your phone."),
        ],
        benefits: strings(&["No collateral required", "Flexible repayment", "Part-prepayment allowed"]),
        eligibility: EligibilityCriteria {
            title: "Who can apply".to_string(),
            criteria: strings(&["Indian resident", "Age 21 to 58 years", "Regular monthly income"]),
            documents: strings(&["PAN card", "Aadhaar card", "Last 3 months' bank statement"]),
        },
        loan_range: LoanRange {
            min_amount: min,
            max_amount: max,
            interest_rate: rate.to_string(),
            tenure: tenure.to_string(),
        },
        faqs: vec![faq(
            "Are there any prepayment charges?",
            "You can prepay after three EMIs without any charges.",
        )],
        cta: apply_cta(),
    }
}

pub fn corporate(slug: &str) -> CorporatePageData {
    let title = slug
        .split('-')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    CorporatePageData {
        slug: slug.to_string(),
        title: title.clone(),
        seo: Seo {
            title: title.clone(),
            ..Default::default()
        },
        hero: HeroSection {
            headline: title,
            subheadline: "Building honest credit for a billion Indians".to_string(),
            primary_action: action("See our products", "/#products"),
            ..Default::default()
        },
        body_html: "<p>We are a technology-led, RBI-registered lender. We believe access to credit should be \
                    fast, fair and transparent.</p>"
            .to_string(),
        stats: vec![
            CompanyStat {
                value: "2015".to_string(),
                label: "Founded".to_string(),
            },
            CompanyStat {
                value: "1,200+".to_string(),
                label: "Employees".to_string(),
            },
            CompanyStat {
                value: "180".to_string(),
                label: "Cities served".to_string(),
            },
        ],
        team: Vec::new(),
        values: vec![
            feature("eye", "Transparency", "Every rate and fee is shown before you sign."),
            feature("heart", "Customer first", "We design products around real needs."),
        ],
        cta: apply_cta(),
    }
}

pub fn navigation() -> NavigationData {
    NavigationData {
        logo_text: String::new(),
        logo_url: String::new(),
        links: vec![
            NavLink {
                label: "Loans".to_string(),
                href: "/#products".to_string(),
                children: vec![
                    NavLink {
                        label: "Cash Loan".to_string(),
                        href: "/products/cash-loan/".to_string(),
                        children: Vec::new(),
                    },
                    NavLink {
                        label: "Personal Loan".to_string(),
                        href: "/products/personal-loan/".to_string(),
                        children: Vec::new(),
                    },
                ],
            },
            NavLink {
                label: "About us".to_string(),
                href: "/about-us/".to_string(),
                children: Vec::new(),
            },
        ],
        cta: Some(action("Apply now", "/products/cash-loan/")),
    }
}

pub fn footer() -> FooterData {
    FooterData {
        description: "Quick, transparent credit for salaried and self-employed Indians.".to_string(),
        sections: vec![
            FooterSection {
                title: "Products".to_string(),
                links: vec![
                    action("Cash Loan", "/products/cash-loan/"),
                    action("Personal Loan", "/products/personal-loan/"),
                ],
            },
            FooterSection {
                title: "Company".to_string(),
                links: vec![action("About us", "/about-us/")],
            },
        ],
        social_links: Vec::new(),
        copyright: String::new(),
        disclaimer: "Loans are subject to credit approval. Interest rates vary with your credit profile."
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_default_routes() {
        for slug in PRODUCT_SLUGS {
            let page = product(slug);
            assert_eq!(page.slug, *slug);
            assert!(!page.hero_section.headline.is_empty());
            assert!(page.loan_range.min_amount < page.loan_range.max_amount);
        }
        assert_eq!(corporate("about-us").title, "About Us");
    }

    #[test]
    fn test_home_products_link_to_default_products() {
        let slugs: Vec<_> = home().products.into_iter().map(|p| p.slug).collect();
        assert_eq!(slugs, PRODUCT_SLUGS);
    }
}
