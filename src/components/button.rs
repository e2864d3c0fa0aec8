//! Button

use super::variants::{ClassList, StyleVariants, VariantAxis};
use super::{Callback, Component};
use crate::helpers::{attrs, html_escape};

pub static BUTTON: StyleVariants = StyleVariants {
    base: "inline-flex items-center justify-center gap-2 rounded-lg font-semibold transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-offset-2 disabled:pointer-events-none disabled:opacity-50",
    axes: &[
        VariantAxis {
            name: "variant",
            default: "primary",
            options: &[
                ("primary", "bg-brand-600 text-white hover:bg-brand-700 focus-visible:ring-brand-500"),
                ("secondary", "bg-accent-500 text-white hover:bg-accent-600 focus-visible:ring-accent-400"),
                ("outline", "border-2 border-brand-600 bg-transparent text-brand-600 hover:bg-brand-50"),
                ("ghost", "bg-transparent text-brand-700 hover:bg-brand-50"),
                ("link", "bg-transparent text-brand-600 underline-offset-4 hover:underline"),
                ("destructive", "bg-red-600 text-white hover:bg-red-700 focus-visible:ring-red-500"),
            ],
        },
        VariantAxis {
            name: "size",
            default: "md",
            options: &[
                ("sm", "h-9 px-3 text-sm"),
                ("md", "h-11 px-5 text-base"),
                ("lg", "h-14 px-8 text-lg"),
                ("icon", "h-10 w-10 p-0"),
            ],
        },
        VariantAxis {
            name: "width",
            default: "auto",
            options: &[("auto", "w-auto"), ("full", "w-full")],
        },
    ],
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Link,
    Destructive,
}

impl ButtonVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Ghost => "ghost",
            ButtonVariant::Link => "link",
            ButtonVariant::Destructive => "destructive",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
    Icon,
}

impl ButtonSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonSize::Sm => "sm",
            ButtonSize::Md => "md",
            ButtonSize::Lg => "lg",
            ButtonSize::Icon => "icon",
        }
    }
}

/// A button, or a link styled as one when `href` is set and it is enabled
#[derive(Clone, Default)]
pub struct Button {
    label: String,
    variant: Option<ButtonVariant>,
    size: Option<ButtonSize>,
    full_width: bool,
    href: Option<String>,
    button_type: Option<&'static str>,
    disabled: bool,
    loading: bool,
    icon: Option<String>,
    class: Option<String>,
    on_click: Option<Callback>,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn full_width(mut self, full: bool) -> Self {
        self.full_width = full;
        self
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        let href = href.into();
        self.href = (!href.is_empty()).then_some(href);
        self
    }

    /// `button`, `submit` or `reset`
    pub fn button_type(mut self, kind: &'static str) -> Self {
        self.button_type = Some(kind);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn on_click(mut self, callback: Callback) -> Self {
        self.on_click = Some(callback);
        self
    }

    /// Loading buttons are inert too
    pub fn is_disabled(&self) -> bool {
        self.disabled || self.loading
    }

    /// Invoke the click callback. Returns whether it ran.
    pub fn click(&self) -> bool {
        if self.is_disabled() {
            return false;
        }
        match &self.on_click {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    pub fn classes(&self) -> ClassList {
        let width = if self.full_width { "full" } else { "auto" };
        let mut selections = vec![("width", width)];
        if let Some(v) = self.variant {
            selections.push(("variant", v.as_str()));
        }
        if let Some(s) = self.size {
            selections.push(("size", s.as_str()));
        }
        BUTTON.resolve(&selections, self.class.as_deref())
    }

    fn inner_html(&self) -> String {
        let mut inner = String::new();
        if self.loading {
            inner.push_str(r#"<span class="spinner" aria-hidden="true"></span>"#);
        } else if let Some(icon) = &self.icon {
            inner.push_str(&crate::helpers::icon(icon));
        }
        inner.push_str(&html_escape(&self.label));
        inner
    }
}

impl Component for Button {
    fn render(&self) -> String {
        let classes = self.classes().to_string();

        match (&self.href, self.is_disabled()) {
            (Some(href), false) => {
                let external = crate::helpers::is_external(href);
                format!(
                    "<a{}>{}</a>",
                    attrs(&[
                        ("href", Some(href.as_str())),
                        ("class", Some(classes.as_str())),
                        ("target", external.then_some("_blank")),
                        ("rel", external.then_some("noopener noreferrer")),
                    ]),
                    self.inner_html()
                )
            }
            _ => {
                let disabled = self.is_disabled();
                format!(
                    "<button{}{}>{}</button>",
                    attrs(&[
                        ("type", Some(self.button_type.unwrap_or("button"))),
                        ("class", Some(classes.as_str())),
                        ("aria-disabled", disabled.then_some("true")),
                        ("aria-busy", self.loading.then_some("true")),
                    ]),
                    if disabled { " disabled" } else { "" },
                    self.inner_html()
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_default_variant_is_primary() {
        let classes = Button::new("Apply").classes();
        let primary = BUTTON.axis("variant").unwrap().tokens("primary").unwrap();
        let md = BUTTON.axis("size").unwrap().default_tokens();
        assert!(classes.contains_all(primary));
        assert!(classes.contains_all(md));
        assert!(classes.contains("w-auto"));
    }

    #[test]
    fn test_every_variant_resolves() {
        for variant in [
            ButtonVariant::Primary,
            ButtonVariant::Secondary,
            ButtonVariant::Outline,
            ButtonVariant::Ghost,
            ButtonVariant::Link,
            ButtonVariant::Destructive,
        ] {
            let tokens = BUTTON.axis("variant").unwrap().tokens(variant.as_str()).unwrap();
            assert!(Button::new("x").variant(variant).classes().contains_all(tokens));
        }
        for size in [ButtonSize::Sm, ButtonSize::Md, ButtonSize::Lg, ButtonSize::Icon] {
            let tokens = BUTTON.axis("size").unwrap().tokens(size.as_str()).unwrap();
            assert!(Button::new("x").size(size).classes().contains_all(tokens));
        }
    }

    #[test]
    fn test_base_tokens_survive_variants() {
        for variant in [ButtonVariant::Primary, ButtonVariant::Secondary, ButtonVariant::Destructive] {
            let classes = Button::new("x").variant(variant).classes();
            assert!(classes.contains_all(BUTTON.base), "{:?}: {}", variant, classes);
            assert!(classes.contains("focus-visible:ring-offset-2"));
        }
    }

    #[test]
    fn test_disabled_ignores_clicks() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let callback: Callback = Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let enabled = Button::new("Go").on_click(callback.clone());
        assert!(enabled.click());
        assert_eq!(count.load(Ordering::SeqCst), 1);

        let disabled = Button::new("Go").on_click(callback.clone()).disabled(true);
        assert!(!disabled.click());
        let loading = Button::new("Go").on_click(callback).loading(true);
        assert!(!loading.click());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_render_link_and_button() {
        let link = Button::new("Apply now").href("/apply").render();
        assert!(link.starts_with("<a href=\"/apply\""));
        assert!(link.contains("Apply now"));

        let external = Button::new("Docs").href("https://example.com").render();
        assert!(external.contains(r#"target="_blank""#));

        let disabled = Button::new("Apply").href("/apply").disabled(true).render();
        assert!(disabled.starts_with("<button"));
        assert!(disabled.contains(" disabled>"));
        assert!(!disabled.contains("href"));

        let submit = Button::new("Send").button_type("submit").render();
        assert!(submit.contains(r#"type="submit""#));
        assert!(!submit.contains("disabled>"));
    }

    #[test]
    fn test_class_override_wins() {
        let classes = Button::new("x").class("bg-black rounded-none").classes();
        assert!(classes.contains("bg-black"));
        assert!(!classes.contains("bg-brand-600"));
        assert!(!classes.contains("rounded-lg"));
    }

    #[test]
    fn test_label_escaped() {
        assert!(Button::new("<b>").render().contains("&lt;b&gt;"));
    }
}
