//! Badge

use super::variants::{ClassList, StyleVariants, VariantAxis};
use super::Component;
use crate::helpers::{attrs, html_escape};

pub static BADGE: StyleVariants = StyleVariants {
    base: "inline-flex items-center rounded-full px-3 py-1 text-xs font-medium",
    axes: &[VariantAxis {
        name: "variant",
        default: "default",
        options: &[
            ("default", "bg-brand-100 text-brand-800"),
            ("success", "bg-green-100 text-green-800"),
            ("warning", "bg-amber-100 text-amber-800"),
            ("outline", "border border-current bg-transparent text-gray-700"),
        ],
    }],
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Default,
    Success,
    Warning,
    Outline,
}

impl BadgeVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "default",
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Outline => "outline",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Badge {
    label: String,
    variant: Option<BadgeVariant>,
    class: Option<String>,
}

impl Badge {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn classes(&self) -> ClassList {
        let selections: Vec<(&str, &str)> = self
            .variant
            .map(|v| ("variant", v.as_str()))
            .into_iter()
            .collect();
        BADGE.resolve(&selections, self.class.as_deref())
    }
}

impl Component for Badge {
    fn render(&self) -> String {
        let classes = self.classes().to_string();
        format!(
            "<span{}>{}</span>",
            attrs(&[("class", Some(classes.as_str()))]),
            html_escape(&self.label)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants() {
        assert!(Badge::new("New").classes().contains("bg-brand-100"));
        let warning = Badge::new("Limited").variant(BadgeVariant::Warning).classes();
        assert!(warning.contains_all("bg-amber-100 text-amber-800"));
        assert!(!warning.contains("bg-brand-100"));
        assert!(!warning.contains("text-brand-800"));
        // size stays
        assert!(warning.contains("text-xs"));
    }

    #[test]
    fn test_render() {
        assert_eq!(
            Badge::new("Popular").class("ml-2").render(),
            r#"<span class="inline-flex items-center rounded-full px-3 py-1 text-xs font-medium bg-brand-100 text-brand-800 ml-2">Popular</span>"#
        );
    }
}
