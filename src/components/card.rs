//! Card

use super::variants::{ClassList, StyleVariants, VariantAxis};
use super::Component;
use crate::helpers::{attrs, html_escape};

pub static CARD: StyleVariants = StyleVariants {
    base: "block rounded-xl bg-white text-left",
    axes: &[
        VariantAxis {
            name: "variant",
            default: "default",
            options: &[
                ("default", "border border-gray-200"),
                ("elevated", "border-0 shadow-lg"),
                ("outlined", "border-2 border-brand-200 bg-transparent"),
                ("ghost", "border-0 bg-transparent"),
                ("highlight", "border-2 border-accent-400 bg-accent-50 shadow-md"),
            ],
        },
        VariantAxis {
            name: "padding",
            default: "md",
            options: &[("none", "p-0"), ("sm", "p-4"), ("md", "p-6"), ("lg", "p-8")],
        },
        VariantAxis {
            name: "interactive",
            default: "no",
            options: &[
                ("no", ""),
                ("yes", "cursor-pointer transition-shadow hover:shadow-xl hover:border-brand-400"),
            ],
        },
    ],
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardVariant {
    #[default]
    Default,
    Elevated,
    Outlined,
    Ghost,
    Highlight,
}

impl CardVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardVariant::Default => "default",
            CardVariant::Elevated => "elevated",
            CardVariant::Outlined => "outlined",
            CardVariant::Ghost => "ghost",
            CardVariant::Highlight => "highlight",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardPadding {
    None,
    Sm,
    #[default]
    Md,
    Lg,
}

impl CardPadding {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardPadding::None => "none",
            CardPadding::Sm => "sm",
            CardPadding::Md => "md",
            CardPadding::Lg => "lg",
        }
    }
}

/// A content card. With `href` the whole card is a link and is
/// rendered interactive.
#[derive(Debug, Clone, Default)]
pub struct Card {
    variant: Option<CardVariant>,
    padding: Option<CardPadding>,
    interactive: bool,
    icon: Option<String>,
    title: Option<String>,
    description: Option<String>,
    body_html: Option<String>,
    footer_html: Option<String>,
    href: Option<String>,
    class: Option<String>,
}

impl Card {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: CardVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn padding(mut self, padding: CardPadding) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = (!description.is_empty()).then_some(description);
        self
    }

    /// Raw HTML, inserted as-is
    pub fn body_html(mut self, html: impl Into<String>) -> Self {
        self.body_html = Some(html.into());
        self
    }

    /// Raw HTML, inserted as-is
    pub fn footer_html(mut self, html: impl Into<String>) -> Self {
        self.footer_html = Some(html.into());
        self
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        let href = href.into();
        self.href = (!href.is_empty()).then_some(href);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn classes(&self) -> ClassList {
        let interactive = if self.interactive || self.href.is_some() { "yes" } else { "no" };
        let mut selections = vec![("interactive", interactive)];
        if let Some(v) = self.variant {
            selections.push(("variant", v.as_str()));
        }
        if let Some(p) = self.padding {
            selections.push(("padding", p.as_str()));
        }
        CARD.resolve(&selections, self.class.as_deref())
    }
}

impl Component for Card {
    fn render(&self) -> String {
        let mut inner = String::new();
        if let Some(icon) = &self.icon {
            inner.push_str(&crate::helpers::icon(icon));
        }
        if let Some(title) = &self.title {
            inner.push_str(&format!(
                r#"<h3 class="text-lg font-semibold text-gray-900">{}</h3>"#,
                html_escape(title)
            ));
        }
        if let Some(description) = &self.description {
            inner.push_str(&format!(
                r#"<p class="mt-2 text-gray-600">{}</p>"#,
                html_escape(description)
            ));
        }
        if let Some(body) = &self.body_html {
            inner.push_str(body);
        }
        if let Some(footer) = &self.footer_html {
            inner.push_str(&format!(r#"<div class="mt-4">{}</div>"#, footer));
        }

        let classes = self.classes().to_string();
        match &self.href {
            Some(href) => format!(
                "<a{}>{}</a>",
                attrs(&[("href", Some(href.as_str())), ("class", Some(classes.as_str()))]),
                inner
            ),
            None => format!("<div{}>{}</div>", attrs(&[("class", Some(classes.as_str()))]), inner),
        }
    }
}
