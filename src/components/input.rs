//! Form input

use super::variants::{ClassList, StyleVariants, VariantAxis};
use super::Component;
use crate::helpers::{attrs, html_escape};

pub static INPUT: StyleVariants = StyleVariants {
    base: "block w-full rounded-md border bg-white text-gray-900 placeholder:text-gray-400 focus:outline-none focus:ring-2",
    axes: &[
        VariantAxis {
            name: "state",
            default: "default",
            options: &[
                ("default", "border-gray-300 focus:ring-brand-500"),
                ("error", "border-red-500 text-red-900 focus:ring-red-500"),
                ("success", "border-green-500 focus:ring-green-500"),
            ],
        },
        VariantAxis {
            name: "size",
            default: "md",
            options: &[
                ("sm", "h-9 px-3 text-sm"),
                ("md", "h-11 px-4 text-base"),
                ("lg", "h-13 px-4 text-lg"),
            ],
        },
    ],
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputState {
    #[default]
    Default,
    Error,
    Success,
}

impl InputState {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputState::Default => "default",
            InputState::Error => "error",
            InputState::Success => "success",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl InputSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputSize::Sm => "sm",
            InputSize::Md => "md",
            InputSize::Lg => "lg",
        }
    }
}

/// Labelled input field. An error message forces the `error` state.
#[derive(Debug, Clone, Default)]
pub struct Input {
    name: String,
    input_type: Option<&'static str>,
    label: Option<String>,
    placeholder: Option<String>,
    value: Option<String>,
    helper: Option<String>,
    error: Option<String>,
    state: Option<InputState>,
    size: Option<InputSize>,
    required: bool,
    disabled: bool,
    class: Option<String>,
}

impl Input {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn input_type(mut self, kind: &'static str) -> Self {
        self.input_type = Some(kind);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn helper(mut self, helper: impl Into<String>) -> Self {
        self.helper = Some(helper.into());
        self
    }

    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn state(mut self, state: InputState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn size(mut self, size: InputSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    fn effective_state(&self) -> Option<InputState> {
        if self.error.is_some() {
            Some(InputState::Error)
        } else {
            self.state
        }
    }

    pub fn classes(&self) -> ClassList {
        let mut selections = Vec::new();
        if let Some(s) = self.effective_state() {
            selections.push(("state", s.as_str()));
        }
        if let Some(s) = self.size {
            selections.push(("size", s.as_str()));
        }
        INPUT.resolve(&selections, self.class.as_deref())
    }

    fn id(&self) -> String {
        format!("field-{}", crate::helpers::slugify(&self.name))
    }
}

impl Component for Input {
    fn render(&self) -> String {
        let id = self.id();
        let mut html = String::from(r#"<div class="space-y-1">"#);

        if let Some(label) = &self.label {
            html.push_str(&format!(
                r#"<label for="{}" class="block text-sm font-medium text-gray-700">{}{}</label>"#,
                id,
                html_escape(label),
                if self.required { r#" <span class="text-red-500">*</span>"# } else { "" }
            ));
        }

        let classes = self.classes().to_string();
        let described_by = if self.error.is_some() {
            Some(format!("{}-error", id))
        } else {
            self.helper.as_ref().map(|_| format!("{}-helper", id))
        };
        html.push_str(&format!(
            "<input{}{}{}>",
            attrs(&[
                ("type", Some(self.input_type.unwrap_or("text"))),
                ("id", Some(id.as_str())),
                ("name", Some(self.name.as_str())),
                ("class", Some(classes.as_str())),
                ("placeholder", self.placeholder.as_deref()),
                ("value", self.value.as_deref()),
                ("aria-invalid", self.error.as_ref().map(|_| "true")),
                ("aria-describedby", described_by.as_deref()),
            ]),
            if self.required { " required" } else { "" },
            if self.disabled { " disabled" } else { "" },
        ));

        if let Some(error) = &self.error {
            html.push_str(&format!(
                r#"<p id="{}-error" class="text-sm text-red-600">{}</p>"#,
                id,
                html_escape(error)
            ));
        } else if let Some(helper) = &self.helper {
            html.push_str(&format!(
                r#"<p id="{}-helper" class="text-sm text-gray-500">{}</p>"#,
                id,
                html_escape(helper)
            ));
        }

        html.push_str("</div>");
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let classes = Input::new("email").classes();
        assert!(classes.contains_all("border-gray-300 h-11 px-4"));
    }

    #[test]
    fn test_error_forces_error_state() {
        let input = Input::new("phone").state(InputState::Success).error("Enter a valid number");
        let classes = input.classes();
        assert!(classes.contains("border-red-500"));
        assert!(!classes.contains("border-green-500"));
        let html = input.render();
        assert!(html.contains(r#"aria-invalid="true""#));
        assert!(html.contains("Enter a valid number"));
    }

    #[test]
    fn test_optional_fragments() {
        let bare = Input::new("name").render();
        assert!(!bare.contains("<label"));
        assert!(!bare.contains("<p"));

        let full = Input::new("full name")
            .label("Full name")
            .helper("As on your PAN card")
            .required(true)
            .render();
        assert!(full.contains(r#"<label for="field-full-name""#));
        assert!(full.contains(r#"aria-describedby="field-full-name-helper""#));
        assert!(full.contains(" required"));
    }
}
