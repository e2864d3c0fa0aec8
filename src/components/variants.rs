//! Declarative style variants
//!
//! A component declares base tokens and a set of orthogonal axes, each
//! with named options and a default. Resolution is
//! `base ⊕ option-per-axis ⊕ override`, where later tokens replace earlier
//! tokens of the same utility group.

use indexmap::IndexSet;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

/// One variant dimension (e.g. `size`) with its options
#[derive(Debug)]
pub struct VariantAxis {
    pub name: &'static str,
    pub default: &'static str,
    /// `(option name, space-separated tokens)`
    pub options: &'static [(&'static str, &'static str)],
}

impl VariantAxis {
    /// Tokens for an option, or `None` if the axis has no such option
    pub fn tokens(&self, option: &str) -> Option<&'static str> {
        self.options
            .iter()
            .find(|(name, _)| *name == option)
            .map(|(_, tokens)| *tokens)
    }

    pub fn default_tokens(&self) -> &'static str {
        self.tokens(self.default).unwrap_or_default()
    }
}

/// Style configuration of one component
#[derive(Debug)]
pub struct StyleVariants {
    pub base: &'static str,
    pub axes: &'static [VariantAxis],
}

impl StyleVariants {
    pub fn axis(&self, name: &str) -> Option<&VariantAxis> {
        self.axes.iter().find(|a| a.name == name)
    }

    /// Resolve the final class list.
    ///
    /// `selections` pairs an axis name with an option name. Unspecified
    /// axes, and options the axis does not declare, use the axis default.
    pub fn resolve(&self, selections: &[(&str, &str)], class_override: Option<&str>) -> ClassList {
        let mut classes = ClassList::from(self.base);

        for axis in self.axes {
            let selected = selections
                .iter()
                .find(|(name, _)| *name == axis.name)
                .map(|(_, option)| *option);

            let tokens = match selected.map(|opt| (opt, axis.tokens(opt))) {
                Some((_, Some(tokens))) => tokens,
                Some((opt, None)) => {
                    tracing::debug!("Unknown {} option {:?}, using {:?}", axis.name, opt, axis.default);
                    axis.default_tokens()
                }
                None => axis.default_tokens(),
            };
            classes.merge(tokens);
        }

        if let Some(extra) = class_override {
            classes.merge(extra);
        }

        classes
    }
}

/// Ordered, de-duplicated set of class tokens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: IndexSet<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge space-separated tokens; each replaces any earlier token of its group
    pub fn merge(&mut self, tokens: &str) {
        for token in tokens.split_whitespace() {
            let group = class_group(token);
            self.tokens.retain(|existing| class_group(existing) != group);
            self.tokens.insert(token.to_string());
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// True when every token of `tokens` is present
    pub fn contains_all(&self, tokens: &str) -> bool {
        tokens.split_whitespace().all(|t| self.contains(t))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl From<&str> for ClassList {
    fn from(tokens: &str) -> Self {
        let mut list = Self::new();
        list.merge(tokens);
        list
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.iter().collect();
        f.write_str(&joined.join(" "))
    }
}

lazy_static! {
    /// Utility groups whose members conflict with each other.
    /// Order matters: the first matching pattern names the group.
    static ref GROUPS: Vec<(Regex, &'static str)> = [
        (r"^text-(xs|sm|base|lg|xl|[2-9]xl)$", "text-size"),
        (r"^text-(left|center|right|justify|start|end)$", "text-align"),
        (r"^text-", "text-color"),
        (r"^font-(thin|extralight|light|normal|medium|semibold|bold|extrabold|black)$", "font-weight"),
        (r"^font-", "font-family"),
        (r"^bg-(gradient|none)", "bg-image"),
        (r"^bg-", "bg-color"),
        (r"^border(-[0248])?$", "border-width"),
        (r"^border-(solid|dashed|dotted|double|none)$", "border-style"),
        (r"^border-", "border-color"),
        (r"^rounded(-(sm|md|lg|xl|2xl|3xl|full|none))?$", "rounded"),
        (r"^shadow(-.*)?$", "shadow"),
        (r"^(block|inline-block|inline|flex|inline-flex|grid|inline-grid|hidden|contents)$", "display"),
        (r"^grid-cols-", "grid-cols"),
        (r"^gap-x-", "gap-x"),
        (r"^gap-y-", "gap-y"),
        (r"^gap-", "gap"),
        (r"^(p|px|py|pt|pr|pb|pl)-", "padding"),
        (r"^(m|mx|my|mt|mr|mb|ml)-", "margin"),
        (r"^w-", "width"),
        (r"^h-", "height"),
        (r"^max-w-", "max-width"),
        (r"^min-h-", "min-height"),
        (r"^justify-", "justify"),
        (r"^items-", "items"),
        (r"^opacity-", "opacity"),
        (r"^cursor-", "cursor"),
        (r"^leading-", "leading"),
        (r"^tracking-", "tracking"),
        (r"^ring(-[0248])?$", "ring-width"),
        (r"^ring-offset-[0248]$", "ring-offset-width"),
        (r"^ring-offset-", "ring-offset-color"),
        (r"^ring-", "ring-color"),
    ]
    .iter()
    .map(|(pattern, group)| (Regex::new(pattern).expect("valid class group pattern"), *group))
    .collect();
}

/// Conflict group of a token. Variant prefixes (`hover:`, `md:`) scope the
/// group, and padding/margin keep their side (`px` vs `py`) so `px-4` does
/// not evict `py-2`.
fn class_group(token: &str) -> String {
    let (prefix, utility) = match token.rfind(':') {
        Some(i) => token.split_at(i + 1),
        None => ("", token),
    };

    for (re, group) in GROUPS.iter() {
        if re.is_match(utility) {
            if matches!(*group, "padding" | "margin") {
                let side = utility.split('-').next().unwrap_or(utility);
                return format!("{}{}", prefix, side);
            }
            return format!("{}{}", prefix, group);
        }
    }

    token.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    static SAMPLE: StyleVariants = StyleVariants {
        base: "inline-flex items-center rounded-md",
        axes: &[
            VariantAxis {
                name: "variant",
                default: "primary",
                options: &[
                    ("primary", "bg-blue-600 text-white"),
                    ("outline", "border bg-transparent text-blue-600"),
                ],
            },
            VariantAxis {
                name: "size",
                default: "md",
                options: &[("sm", "h-8 px-3 text-sm"), ("md", "h-10 px-4 text-base")],
            },
        ],
    };

    #[test]
    fn test_defaults_apply() {
        let classes = SAMPLE.resolve(&[], None);
        assert!(classes.contains_all("inline-flex items-center rounded-md"));
        assert!(classes.contains_all("bg-blue-600 text-white h-10 px-4 text-base"));
    }

    #[test]
    fn test_every_option_contributes_its_tokens() {
        for axis in SAMPLE.axes {
            for (option, tokens) in axis.options {
                let classes = SAMPLE.resolve(&[(axis.name, *option)], None);
                assert!(classes.contains_all(tokens), "{}={} -> {}", axis.name, option, classes);
            }
        }
    }

    #[test]
    fn test_unknown_option_uses_default() {
        let classes = SAMPLE.resolve(&[("variant", "sparkly")], None);
        assert!(classes.contains("bg-blue-600"));
    }

    #[test]
    fn test_override_wins() {
        let classes = SAMPLE.resolve(&[("size", "sm")], Some("bg-red-500 px-8 rounded-full"));
        assert!(classes.contains("bg-red-500"));
        assert!(!classes.contains("bg-blue-600"));
        assert!(classes.contains("px-8"));
        assert!(!classes.contains("px-3"));
        assert!(classes.contains("rounded-full"));
        assert!(!classes.contains("rounded-md"));
        // unrelated groups survive
        assert!(classes.contains("h-8"));
        assert!(classes.contains("text-white"));
        assert!(classes.contains("text-sm"));
    }

    #[test]
    fn test_class_groups() {
        assert_eq!(class_group("text-sm"), "text-size");
        assert_eq!(class_group("text-white"), "text-color");
        assert_eq!(class_group("hover:bg-blue-700"), "hover:bg-color");
        assert_ne!(class_group("px-4"), class_group("py-2"));
        assert_eq!(class_group("md:grid-cols-3"), "md:grid-cols");
        assert_eq!(class_group("border"), class_group("border-2"));
        assert_ne!(class_group("border"), class_group("border-gray-200"));
        assert_eq!(class_group("transition-colors"), "transition-colors");
        assert_eq!(class_group("focus-visible:ring-offset-2"), "focus-visible:ring-offset-width");
        assert_eq!(class_group("ring-offset-white"), "ring-offset-color");
        assert_ne!(class_group("ring-offset-2"), class_group("ring-brand-500"));
    }

    #[test]
    fn test_display_keeps_order() {
        let mut list = ClassList::from("flex p-4 text-sm");
        list.merge("p-2");
        assert_eq!(list.to_string(), "flex text-sm p-2");
    }
}
