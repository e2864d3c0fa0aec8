//! Page-width container

use super::variants::{ClassList, StyleVariants, VariantAxis};
use super::Component;
use crate::helpers::attrs;

pub static CONTAINER: StyleVariants = StyleVariants {
    base: "mx-auto w-full",
    axes: &[
        VariantAxis {
            name: "size",
            default: "xl",
            options: &[
                ("sm", "max-w-2xl"),
                ("md", "max-w-4xl"),
                ("lg", "max-w-6xl"),
                ("xl", "max-w-7xl"),
                ("full", "max-w-full"),
            ],
        },
        VariantAxis {
            name: "padding",
            default: "default",
            options: &[("none", "px-0"), ("default", "px-4 sm:px-6 lg:px-8")],
        },
    ],
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContainerSize {
    Sm,
    Md,
    Lg,
    #[default]
    Xl,
    Full,
}

impl ContainerSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerSize::Sm => "sm",
            ContainerSize::Md => "md",
            ContainerSize::Lg => "lg",
            ContainerSize::Xl => "xl",
            ContainerSize::Full => "full",
        }
    }
}

/// Centered wrapper around raw HTML content
#[derive(Debug, Clone, Default)]
pub struct Container {
    size: Option<ContainerSize>,
    padded: Option<bool>,
    tag: Option<&'static str>,
    id: Option<String>,
    content_html: String,
    class: Option<String>,
}

impl Container {
    pub fn new(content_html: impl Into<String>) -> Self {
        Self {
            content_html: content_html.into(),
            ..Default::default()
        }
    }

    pub fn size(mut self, size: ContainerSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn padded(mut self, padded: bool) -> Self {
        self.padded = Some(padded);
        self
    }

    /// Element name, `div` unless set (`section`, `main`, ...)
    pub fn tag(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn classes(&self) -> ClassList {
        let mut selections = Vec::new();
        if let Some(s) = self.size {
            selections.push(("size", s.as_str()));
        }
        if let Some(p) = self.padded {
            selections.push(("padding", if p { "default" } else { "none" }));
        }
        CONTAINER.resolve(&selections, self.class.as_deref())
    }
}

impl Component for Container {
    fn render(&self) -> String {
        let tag = self.tag.unwrap_or("div");
        let classes = self.classes().to_string();
        format!(
            "<{tag}{}>{}</{tag}>",
            attrs(&[("id", self.id.as_deref()), ("class", Some(classes.as_str()))]),
            self.content_html,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let classes = Container::new("").classes();
        assert!(classes.contains_all("mx-auto max-w-7xl px-4 sm:px-6 lg:px-8"));
    }

    #[test]
    fn test_unpadded_narrow() {
        let classes = Container::new("").size(ContainerSize::Sm).padded(false).classes();
        assert!(classes.contains("max-w-2xl"));
        assert!(classes.contains("px-0"));
        assert!(!classes.contains("max-w-7xl"));
    }

    #[test]
    fn test_render_tag_and_id() {
        let html = Container::new("<p>x</p>").tag("section").id("faq").render();
        assert!(html.starts_with(r#"<section id="faq" class="#));
        assert!(html.ends_with("<p>x</p></section>"));
    }
}
