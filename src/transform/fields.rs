//! Total accessors over loosely typed entry fields
//!
//! Every accessor returns a value: a missing field, a field of the wrong
//! shape and an unresolved link all read as the type's empty value.

use serde_json::{Map, Value};

use crate::cms::links::as_link;
use crate::cms::ContentEntry;
use crate::helpers::{get_asset_title, get_asset_url, rich_text};
use crate::model::Action;

/// Read-only view over one field map
#[derive(Debug, Clone, Copy)]
pub struct FieldReader<'a> {
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> FieldReader<'a> {
    pub fn new(fields: &'a Map<String, Value>) -> Self {
        Self {
            fields: Some(fields),
        }
    }

    pub fn empty() -> Self {
        Self { fields: None }
    }

    pub fn of_entry(entry: &'a ContentEntry) -> Self {
        Self::new(&entry.fields)
    }

    /// Reader over a nested value: a resolved entry (its `fields`), a plain
    /// JSON object, or nothing for links and scalars
    pub fn of_value(value: &'a Value) -> Self {
        if as_link(value).is_some() {
            return Self::empty();
        }
        match value.get("fields") {
            Some(Value::Object(fields)) => Self::new(fields),
            _ => match value {
                Value::Object(map) => Self::new(map),
                _ => Self::empty(),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.map_or(true, Map::is_empty)
    }

    pub fn get(&self, name: &str) -> Option<&'a Value> {
        self.fields.and_then(|f| f.get(name))
    }

    /// Text value as authored; numbers are stringified, blank strings and anything else are empty
    pub fn text(&self, name: &str) -> String {
        match self.get(name) {
            Some(Value::String(s)) if s.trim().is_empty() => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        }
    }

    /// Text value, or `fallback` when empty
    pub fn text_or(&self, name: &str, fallback: &str) -> String {
        let value = self.text(name);
        if value.is_empty() {
            fallback.to_string()
        } else {
            value
        }
    }

    /// First non-empty text among several field names
    pub fn first_text(&self, names: &[&str]) -> String {
        names
            .iter()
            .map(|n| self.text(n))
            .find(|s| !s.is_empty())
            .unwrap_or_default()
    }

    /// List of strings. A single string is split on newlines and commas.
    pub fn texts(&self, name: &str) -> Vec<String> {
        match self.get(name) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|v| match v {
                    Value::String(s) => Some(s.trim().to_string()),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .filter(|s| !s.is_empty())
                .collect(),
            Some(Value::String(s)) => s
                .split(['\n', ','])
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Non-negative whole amount, floored. Numeric strings may carry grouping
    /// commas ("5,00,000"); any other text reads as 0.
    pub fn amount(&self, name: &str) -> u64 {
        let value = match self.get(name) {
            Some(Value::Number(n)) => match n.as_u64() {
                Some(whole) => return whole,
                None => n.as_f64(),
            },
            Some(Value::String(s)) => s.trim().replace(',', "").parse::<f64>().ok(),
            _ => None,
        };
        value
            .filter(|f| f.is_finite() && *f >= 0.0)
            .map(|f| f.floor() as u64)
            .unwrap_or(0)
    }

    pub fn flag(&self, name: &str) -> bool {
        match self.get(name) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => matches!(s.as_str(), "true" | "yes" | "1"),
            _ => false,
        }
    }

    /// Nested object (inline JSON or resolved entry)
    pub fn object(&self, name: &str) -> FieldReader<'a> {
        self.get(name).map(Self::of_value).unwrap_or_else(Self::empty)
    }

    /// List of nested objects. Unresolved links and scalars are skipped.
    pub fn objects(&self, name: &str) -> Vec<FieldReader<'a>> {
        match self.get(name) {
            Some(Value::Array(items)) => items
                .iter()
                .map(Self::of_value)
                .filter(|r| !r.is_empty())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Absolute asset URL, or empty
    pub fn asset_url(&self, name: &str) -> String {
        get_asset_url(self.get(name))
    }

    pub fn asset_title(&self, name: &str) -> String {
        get_asset_title(self.get(name))
    }

    /// Long text (Markdown or rich-text document) rendered to HTML
    pub fn rich_text(&self, name: &str) -> String {
        self.get(name).map(rich_text::to_html).unwrap_or_default()
    }

    /// Action from a label field and a target field; `None` unless both are set
    pub fn action(&self, label: &str, href: &str) -> Option<Action> {
        let label = self.text(label);
        let href = self.text(href).trim().to_string();
        if label.is_empty() || href.is_empty() {
            None
        } else {
            Some(Action { label, href })
        }
    }

    /// Action that is always present, possibly with empty parts
    pub fn required_action(&self, label: &str, href: &str) -> Action {
        Action {
            label: self.text(label),
            href: self.text(href).trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_text() {
        let f = fields(json!({ "a": "hi", "n": 42, "b": true, "o": {}, "pad": "  Instant cash ", "blank": "   " }));
        let r = FieldReader::new(&f);
        assert_eq!(r.text("a"), "hi");
        assert_eq!(r.text("pad"), "  Instant cash ");
        assert_eq!(r.text("blank"), "");
        assert_eq!(r.text_or("blank", "x"), "x");
        assert_eq!(r.text("n"), "42");
        assert_eq!(r.text("b"), "");
        assert_eq!(r.text("o"), "");
        assert_eq!(r.text("missing"), "");
        assert_eq!(r.text_or("missing", "x"), "x");
        assert_eq!(r.first_text(&["missing", "a"]), "hi");
    }

    #[test]
    fn test_texts() {
        let f = fields(json!({
            "list": ["a", "", 3, null, " b "],
            "csv": "salaried, self-employed\nNRI",
            "bad": { "x": 1 }
        }));
        let r = FieldReader::new(&f);
        assert_eq!(r.texts("list"), vec!["a", "3", "b"]);
        assert_eq!(r.texts("csv"), vec!["salaried", "self-employed", "NRI"]);
        assert!(r.texts("bad").is_empty());
        assert!(r.texts("missing").is_empty());
    }

    #[test]
    fn test_amount() {
        let f = fields(json!({ "a": 500000, "b": "5,00,000", "c": -3, "d": 1.5, "e": "n/a" }));
        let r = FieldReader::new(&f);
        assert_eq!(r.amount("a"), 500_000);
        assert_eq!(r.amount("b"), 500_000);
        assert_eq!(r.amount("c"), 0);
        assert_eq!(r.amount("d"), 1);
        assert_eq!(r.amount("e"), 0);
        assert_eq!(r.amount("missing"), 0);

        let f = fields(json!({ "dec": "10.5", "lakh": "1.5L", "neg": "-20", "big": "1,000.99" }));
        let r = FieldReader::new(&f);
        assert_eq!(r.amount("dec"), 10);
        assert_eq!(r.amount("lakh"), 0);
        assert_eq!(r.amount("neg"), 0);
        assert_eq!(r.amount("big"), 1000);
    }

    #[test]
    fn test_objects_skip_links() {
        let f = fields(json!({
            "items": [
                { "sys": { "id": "x" }, "fields": { "title": "resolved" } },
                { "title": "inline" },
                { "sys": { "type": "Link", "linkType": "Entry", "id": "gone" } },
                "scalar"
            ]
        }));
        let r = FieldReader::new(&f);
        let titles: Vec<_> = r.objects("items").iter().map(|o| o.text("title")).collect();
        assert_eq!(titles, vec!["resolved", "inline"]);
        assert!(r.object("missing").is_empty());
    }

    #[test]
    fn test_action() {
        let f = fields(json!({ "t": "Apply", "l": "/apply", "empty": "" }));
        let r = FieldReader::new(&f);
        assert_eq!(r.action("t", "l"), Some(Action::new("Apply", "/apply")));
        assert_eq!(r.action("t", "empty"), None);
        assert_eq!(r.required_action("t", "missing"), Action::new("Apply", ""));
    }

    #[test]
    fn test_flag() {
        let f = fields(json!({ "a": true, "b": "yes", "c": 1 }));
        let r = FieldReader::new(&f);
        assert!(r.flag("a"));
        assert!(r.flag("b"));
        assert!(!r.flag("c"));
    }
}
