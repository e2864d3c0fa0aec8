//! Section builders shared by the page templates.
//!
//! Builders for collections return an empty string when there is nothing
//! to show, so the page omits the section entirely.

use super::RenderContext;
use crate::components::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardPadding, CardVariant, Component, Container,
    ContainerSize, Grid, GridGap, Input,
};
use crate::helpers::{format_currency, html_escape, icon};
use crate::model::{
    Action, CompanyStat, CtaSection, EligibilityCriteria, Faq, Feature, HeroSection, KeyFact, LoanRange,
    ProductCard, TeamMember, TrustIndicator,
};

/// `<section>` with a centered container and an optional heading
fn section(id: &str, tone: &str, heading: Option<&str>, inner: String) -> String {
    let heading = heading
        .filter(|h| !h.is_empty())
        .map(|h| {
            format!(
                r#"<h2 class="mb-10 text-center text-3xl font-bold text-gray-900">{}</h2>"#,
                html_escape(h)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<section id="{}" class="py-16 {}">{}</section>"#,
        id,
        tone,
        Container::new(format!("{}{}", heading, inner)).render()
    )
}

fn action_button(ctx: &RenderContext, action: &Action, variant: ButtonVariant, size: ButtonSize) -> String {
    Button::new(&action.label)
        .href(ctx.url(&action.href))
        .variant(variant)
        .size(size)
        .render()
}

pub fn hero(ctx: &RenderContext, hero: &HeroSection) -> String {
    let mut text = format!(
        r#"<h1 class="text-4xl font-bold tracking-tight text-gray-900 md:text-5xl">{}</h1>"#,
        html_escape(&hero.headline)
    );
    if !hero.subheadline.is_empty() {
        text.push_str(&format!(
            r#"<p class="mt-4 text-xl text-brand-700">{}</p>"#,
            html_escape(&hero.subheadline)
        ));
    }
    if !hero.description.is_empty() {
        text.push_str(&format!(
            r#"<p class="mt-4 text-lg text-gray-600">{}</p>"#,
            html_escape(&hero.description)
        ));
    }

    let mut actions = action_button(ctx, &hero.primary_action, ButtonVariant::Primary, ButtonSize::Lg);
    if let Some(secondary) = &hero.secondary_action {
        actions.push_str(&action_button(ctx, secondary, ButtonVariant::Outline, ButtonSize::Lg));
    }
    text.push_str(&format!(r#"<div class="mt-8 flex flex-wrap gap-4">{}</div>"#, actions));

    let image = if hero.image_url.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div><img src="{}" alt="{}" class="w-full rounded-2xl shadow-xl" loading="eager"></div>"#,
            ctx.image(&hero.image_url, ctx.config.images.hero_width),
            html_escape(&hero.headline)
        )
    };

    format!(
        r#"<section id="hero" class="bg-gradient-to-br from-brand-50 to-white py-16 md:py-24">{}</section>"#,
        Container::new(format!(
            r#"<div class="grid items-center gap-12 md:grid-cols-2"><div>{}</div>{}</div>"#,
            text, image
        ))
        .render()
    )
}

pub fn trust_indicators(items: &[TrustIndicator]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let tiles = items
        .iter()
        .map(|t| {
            format!(
                r#"<div class="text-center">{}<p class="text-3xl font-bold text-brand-700">{}</p><p class="mt-1 text-sm text-gray-600">{}</p></div>"#,
                icon(&t.icon),
                html_escape(&t.value),
                html_escape(&t.label)
            )
        })
        .collect();
    section("trust", "border-y border-gray-100 bg-white", None, Grid::new(tiles).cols(4).render())
}

pub fn product_grid(ctx: &RenderContext, products: &[ProductCard]) -> String {
    if products.is_empty() {
        return String::new();
    }
    let cards = products
        .iter()
        .map(|p| {
            let href = if p.href.is_empty() {
                ctx.product_url(&p.slug)
            } else {
                ctx.url(&p.href)
            };
            let mut card = Card::new()
                .icon(&p.icon)
                .title(&p.title)
                .description(&p.description)
                .href(href)
                .footer_html(r#"<span class="text-sm font-semibold text-brand-600">Learn more →</span>"#);
            if !p.highlight.is_empty() {
                card = card
                    .variant(CardVariant::Highlight)
                    .body_html(Badge::new(&p.highlight).variant(BadgeVariant::Success).class("mt-3").render());
            }
            card.render()
        })
        .collect();
    section("products", "bg-gray-50", Some("Our products"), Grid::new(cards).render())
}

pub fn feature_list(id: &str, heading: &str, features: &[Feature]) -> String {
    if features.is_empty() {
        return String::new();
    }
    let cards = features
        .iter()
        .map(|f| {
            let mut card = Card::new()
                .variant(CardVariant::Ghost)
                .icon(&f.icon)
                .title(&f.title)
                .description(&f.description);
            if let Some(link) = &f.link {
                card = card.footer_html(format!(
                    r#"<a href="{}" class="text-sm font-semibold text-brand-600 hover:underline">{}</a>"#,
                    html_escape(&link.href),
                    html_escape(&link.label)
                ));
            }
            card.render()
        })
        .collect();
    section(id, "bg-white", Some(heading), Grid::new(cards).render())
}

pub fn faq_list(faqs: &[Faq]) -> String {
    if faqs.is_empty() {
        return String::new();
    }
    let items: String = faqs
        .iter()
        .map(|f| {
            format!(
                r#"<details class="group border-b border-gray-200 py-4"><summary class="cursor-pointer text-lg font-medium text-gray-900">{}</summary><div class="prose mt-3 text-gray-600">{}</div></details>"#,
                html_escape(&f.question),
                f.answer
            )
        })
        .collect();
    section(
        "faq",
        "bg-gray-50",
        Some("Frequently asked questions"),
        format!(r#"<div class="mx-auto max-w-3xl">{}</div>"#, items),
    )
}

pub fn cta_section(ctx: &RenderContext, cta: &CtaSection) -> String {
    let mut actions = action_button(ctx, &cta.primary_action, ButtonVariant::Secondary, ButtonSize::Lg);
    if let Some(secondary) = &cta.secondary_action {
        actions.push_str(
            &Button::new(&secondary.label)
                .href(ctx.url(&secondary.href))
                .variant(ButtonVariant::Ghost)
                .size(ButtonSize::Lg)
                .class("text-white hover:bg-brand-600")
                .render(),
        );
    }
    let description = if cta.description.is_empty() {
        String::new()
    } else {
        format!(r#"<p class="mt-4 text-lg text-brand-100">{}</p>"#, html_escape(&cta.description))
    };

    format!(
        r#"<section id="cta" class="bg-brand-700 py-16 text-white">{}</section>"#,
        Container::new(format!(
            r#"<div class="text-center"><h2 class="text-3xl font-bold">{}</h2>{}<div class="mt-8 flex flex-wrap justify-center gap-4">{}</div></div>"#,
            html_escape(&cta.title),
            description,
            actions
        ))
        .size(ContainerSize::Md)
        .render()
    )
}

/// Key facts, followed by the loan amount range when one is set
pub fn key_facts(facts: &[KeyFact], range: &LoanRange) -> String {
    let mut tiles: Vec<String> = facts
        .iter()
        .map(|k| fact_tile(&k.label, &k.value))
        .collect();

    if range.max_amount > 0 {
        let amount = if range.min_amount > 0 {
            format!("{} to {}", format_currency(range.min_amount), format_currency(range.max_amount))
        } else {
            format!("Up to {}", format_currency(range.max_amount))
        };
        tiles.push(fact_tile("Loan amount", &amount));
    }
    let labels: Vec<&str> = facts.iter().map(|k| k.label.as_str()).collect();
    if !range.interest_rate.is_empty() && !labels.iter().any(|l| l.eq_ignore_ascii_case("interest rate")) {
        tiles.push(fact_tile("Interest rate", &range.interest_rate));
    }
    if !range.tenure.is_empty() && !labels.iter().any(|l| l.eq_ignore_ascii_case("tenure")) {
        tiles.push(fact_tile("Tenure", &range.tenure));
    }

    if tiles.is_empty() {
        return String::new();
    }
    let cols = tiles.len().min(4) as u8;
    section("key-facts", "bg-white", None, Grid::new(tiles).cols(cols).gap(GridGap::Sm).render())
}

fn fact_tile(label: &str, value: &str) -> String {
    Card::new()
        .variant(CardVariant::Outlined)
        .padding(CardPadding::Sm)
        .body_html(format!(
            r#"<p class="text-sm text-gray-500">{}</p><p class="mt-1 text-xl font-semibold text-gray-900">{}</p>"#,
            html_escape(label),
            html_escape(value)
        ))
        .render()
}

fn bullet_list(items: &[String]) -> String {
    let items: String = items
        .iter()
        .map(|i| format!(r#"<li class="flex gap-2"><span class="text-brand-600">✓</span>{}</li>"#, html_escape(i)))
        .collect();
    format!(r#"<ul class="mt-4 space-y-2 text-gray-700">{}</ul>"#, items)
}

pub fn benefits_eligibility(benefits: &[String], eligibility: &EligibilityCriteria) -> String {
    let mut columns = Vec::new();
    if !benefits.is_empty() {
        columns.push(
            Card::new()
                .title("Benefits")
                .body_html(bullet_list(benefits))
                .render(),
        );
    }
    if !eligibility.criteria.is_empty() || !eligibility.documents.is_empty() {
        let title = if eligibility.title.is_empty() {
            "Eligibility"
        } else {
            eligibility.title.as_str()
        };
        let mut body = String::new();
        if !eligibility.criteria.is_empty() {
            body.push_str(&bullet_list(&eligibility.criteria));
        }
        if !eligibility.documents.is_empty() {
            body.push_str(r#"<h4 class="mt-6 font-semibold text-gray-900">Documents required</h4>"#);
            body.push_str(&bullet_list(&eligibility.documents));
        }
        columns.push(Card::new().title(title).body_html(body).render());
    }

    if columns.is_empty() {
        return String::new();
    }
    let cols = columns.len() as u8;
    section("eligibility", "bg-gray-50", None, Grid::new(columns).cols(cols).render())
}

/// Lead form for a product. Submission goes to the configured form action.
pub fn enquiry_form(ctx: &RenderContext, product_slug: &str, product_title: &str) -> String {
    let fields = [
        Input::new("name").label("Full name").placeholder("As on your PAN card").required(true),
        Input::new("phone")
            .input_type("tel")
            .label("Mobile number")
            .placeholder("10-digit mobile number")
            .required(true),
        Input::new("email").input_type("email").label("Email"),
        Input::new("city").label("City"),
    ]
    .iter()
    .map(Input::render)
    .collect();

    let heading = if product_title.is_empty() {
        "Get a call back".to_string()
    } else {
        format!("Apply for a {}", product_title)
    };

    let form = format!(
        r#"<form method="post" action="{}" class="space-y-6"><input type="hidden" name="product" value="{}">{}{}<p class="text-xs text-gray-500">By submitting you agree to be contacted about your application.</p></form>"#,
        html_escape(&ctx.url(&ctx.config.lead_form_action)),
        html_escape(product_slug),
        Grid::new(fields).cols(2).gap(GridGap::Sm).render(),
        Button::new("Request a call back")
            .button_type("submit")
            .full_width(true)
            .size(ButtonSize::Lg)
            .render()
    );

    section(
        "apply",
        "bg-white",
        Some(heading.as_str()),
        Card::new()
            .variant(CardVariant::Elevated)
            .padding(CardPadding::Lg)
            .class("mx-auto max-w-3xl")
            .body_html(form)
            .render(),
    )
}

pub fn stats(stats: &[CompanyStat]) -> String {
    if stats.is_empty() {
        return String::new();
    }
    let tiles = stats
        .iter()
        .map(|s| {
            format!(
                r#"<div class="text-center"><p class="text-4xl font-bold text-brand-700">{}</p><p class="mt-2 text-gray-600">{}</p></div>"#,
                html_escape(&s.value),
                html_escape(&s.label)
            )
        })
        .collect();
    let cols = stats.len().min(4) as u8;
    section("stats", "bg-gray-50", None, Grid::new(tiles).cols(cols).render())
}

/// Rich text body, already HTML
pub fn body(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }
    section(
        "story",
        "bg-white",
        None,
        Container::new(format!(r#"<div class="prose prose-lg">{}</div>"#, html))
            .size(ContainerSize::Md)
            .padded(false)
            .render(),
    )
}

pub fn team(ctx: &RenderContext, members: &[TeamMember]) -> String {
    if members.is_empty() {
        return String::new();
    }
    let cards = members
        .iter()
        .map(|m| {
            let photo = if m.image_url.is_empty() {
                String::new()
            } else {
                let width = ctx.config.images.avatar_width;
                format!(
                    r#"<img src="{}" alt="{}" class="mx-auto mb-4 h-32 w-32 rounded-full object-cover" loading="lazy">"#,
                    ctx.image(&m.image_url, width),
                    html_escape(&m.name)
                )
            };
            let mut body = format!(
                r#"{}<p class="text-lg font-semibold text-gray-900">{}</p><p class="text-sm text-brand-700">{}</p>"#,
                photo,
                html_escape(&m.name),
                html_escape(&m.role)
            );
            if !m.bio.is_empty() {
                body.push_str(&format!(r#"<p class="mt-3 text-sm text-gray-600">{}</p>"#, html_escape(&m.bio)));
            }
            if let Some(linkedin) = &m.linkedin_url {
                body.push_str(&format!(
                    r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="mt-3 inline-block" aria-label="LinkedIn">{}</a>"#,
                    html_escape(linkedin),
                    icon("linkedin")
                ));
            }
            Card::new().class("text-center").body_html(body).render()
        })
        .collect();
    section("team", "bg-white", Some("Leadership"), Grid::new(cards).cols(4).render())
}
