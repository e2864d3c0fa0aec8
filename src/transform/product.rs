//! Product page transform

use super::{cta, faqs, features, hero, seo, FieldReader};
use crate::cms::ContentEntry;
use crate::model::{EligibilityCriteria, KeyFact, LoanRange, ProductPageData};

/// Map a `productPage` entry to [`ProductPageData`]
pub fn transform_product(entry: &ContentEntry) -> ProductPageData {
    let f = FieldReader::of_entry(entry);
    let title = f.text("title");

    ProductPageData {
        slug: f.text("slug"),
        seo: seo(&f, &title),
        hero_section: hero(&f),
        short_description: f.text("shortDescription"),
        icon: f.text("icon"),
        key_facts: f
            .objects("keyFacts")
            .iter()
            .map(|k| KeyFact {
                label: k.text("label"),
                value: k.text("value"),
            })
            .filter(|k| !k.label.is_empty() || !k.value.is_empty())
            .collect(),
        features: features(&f, "features"),
        benefits: f.texts("benefits"),
        eligibility: EligibilityCriteria {
            title: f.text("eligibilityTitle"),
            criteria: f.texts("eligibilityCriteria"),
            documents: f.texts("requiredDocuments"),
        },
        loan_range: LoanRange {
            min_amount: f.amount("minAmount"),
            max_amount: f.amount("maxAmount"),
            interest_rate: f.text("interestRate"),
            tenure: f.text("tenure"),
        },
        faqs: faqs(&f),
        cta: cta(&f),
        title,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cash_loan() -> ContentEntry {
        let fields = json!({
            "slug": "cash-loan",
            "title": "Cash Loan",
            "seoTitle": "Instant Cash Loan Online",
            "shortDescription": "Get up to ₹5 lakh in 24 hours",
            "heroHeadline": "Instant cash, zero paperwork",
            "heroSubheadline": "Disbursal in 24 hours",
            "heroPrimaryCtaText": "Apply now",
            "heroPrimaryCtaLink": "#apply",
            "keyFacts": [{ "label": "Interest", "value": "from 11.99% p.a." }, {}],
            "benefits": ["No collateral", "Flexible tenure"],
            "eligibilityTitle": "Who can apply",
            "eligibilityCriteria": "Age 21-58\nIndian resident",
            "requiredDocuments": ["PAN card", "Aadhaar"],
            "minAmount": 10000,
            "maxAmount": "5,00,000",
            "interestRate": "11.99%",
            "tenure": "6-60 months",
            "features": [{ "title": "Quick approval", "icon": "bolt", "linkText": "How it works", "linkUrl": "/how" }]
        });
        ContentEntry::new("productPage", fields.as_object().cloned().unwrap())
    }

    #[test]
    fn test_slug_and_hero_verbatim() {
        let data = transform_product(&cash_loan());
        assert_eq!(data.slug, "cash-loan");
        assert_eq!(data.hero_section.headline, "Instant cash, zero paperwork");
        assert_eq!(data.seo.title, "Instant Cash Loan Online");
        assert_eq!(data.seo.description, "Get up to ₹5 lakh in 24 hours");
    }

    #[test]
    fn test_structured_fields() {
        let data = transform_product(&cash_loan());
        assert_eq!(data.key_facts.len(), 1);
        assert_eq!(data.benefits, vec!["No collateral", "Flexible tenure"]);
        assert_eq!(data.eligibility.criteria, vec!["Age 21-58", "Indian resident"]);
        assert_eq!(data.eligibility.documents.len(), 2);
        assert_eq!(data.loan_range.min_amount, 10_000);
        assert_eq!(data.loan_range.max_amount, 500_000);
        assert_eq!(data.features[0].link.as_ref().unwrap().label, "How it works");
    }

    #[test]
    fn test_empty_entry() {
        let data = transform_product(&ContentEntry::default());
        assert_eq!(data, ProductPageData::default());
        assert_eq!(data.eligibility, EligibilityCriteria::default());
        assert_eq!(data.loan_range.max_amount, 0);
    }

    #[test]
    fn test_idempotent() {
        let entry = cash_loan();
        assert_eq!(transform_product(&entry), transform_product(&entry));
    }
}
