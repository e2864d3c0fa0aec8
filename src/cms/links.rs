//! Link resolution against a response's `includes`

use serde_json::{Map, Value};
use std::collections::HashMap;

/// Linked entries and assets available for resolution
#[derive(Debug, Default)]
pub struct Includes {
    entries: HashMap<String, Value>,
    assets: HashMap<String, Value>,
}

impl Includes {
    /// Collect `includes.Entry`, `includes.Asset` and the top-level
    /// `items` of a delivery API response. Items take part because an
    /// entry may link to another entry returned in the same page.
    pub fn from_response(response: &Value) -> Self {
        let mut includes = Self::default();

        let by_id = |list: Option<&Value>, target: &mut HashMap<String, Value>| {
            for item in list.and_then(Value::as_array).into_iter().flatten() {
                if let Some(id) = item.pointer("/sys/id").and_then(Value::as_str) {
                    target.insert(id.to_string(), item.clone());
                }
            }
        };

        by_id(response.get("items"), &mut includes.entries);
        by_id(response.pointer("/includes/Entry"), &mut includes.entries);
        by_id(response.pointer("/includes/Asset"), &mut includes.assets);
        // Local exports keep assets beside entries
        by_id(response.get("assets"), &mut includes.assets);

        includes
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.assets.is_empty()
    }

    /// Resolve links inside a field map, `depth` levels deep
    pub fn resolve_fields(&self, fields: &Map<String, Value>, depth: u8) -> Map<String, Value> {
        fields
            .iter()
            .map(|(k, v)| (k.clone(), self.resolve(v, depth)))
            .collect()
    }

    /// Replace link objects with the linked entry or asset.
    ///
    /// Links that cannot be found, or that sit deeper than `depth`, are
    /// returned unchanged.
    pub fn resolve(&self, value: &Value, depth: u8) -> Value {
        match value {
            Value::Array(items) => Value::Array(items.iter().map(|v| self.resolve(v, depth)).collect()),
            Value::Object(map) => {
                if let Some((link_type, id)) = as_link(value) {
                    if depth == 0 {
                        return value.clone();
                    }
                    let target = match link_type {
                        "Entry" => self.entries.get(id),
                        "Asset" => self.assets.get(id),
                        _ => None,
                    };
                    return match target {
                        Some(Value::Object(target)) => {
                            let mut resolved = target.clone();
                            if let Some(Value::Object(fields)) = target.get("fields") {
                                resolved.insert(
                                    "fields".to_string(),
                                    Value::Object(self.resolve_fields(fields, depth - 1)),
                                );
                            }
                            Value::Object(resolved)
                        }
                        _ => {
                            tracing::debug!("Unresolved {} link {}", link_type, id);
                            value.clone()
                        }
                    };
                }
                Value::Object(
                    map.iter()
                        .map(|(k, v)| (k.clone(), self.resolve(v, depth)))
                        .collect(),
                )
            }
            _ => value.clone(),
        }
    }
}

/// Returns `(linkType, id)` when the value is an unresolved link
pub fn as_link(value: &Value) -> Option<(&str, &str)> {
    let sys = value.get("sys")?;
    if sys.get("type")?.as_str()? != "Link" {
        return None;
    }
    Some((sys.get("linkType")?.as_str()?, sys.get("id")?.as_str()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn link(kind: &str, id: &str) -> Value {
        json!({ "sys": { "type": "Link", "linkType": kind, "id": id } })
    }

    fn response() -> Value {
        json!({
            "items": [],
            "includes": {
                "Entry": [
                    { "sys": { "id": "f1", "type": "Entry" },
                      "fields": { "title": "Fast approval", "next": link("Entry", "f2") } },
                    { "sys": { "id": "f2", "type": "Entry" },
                      "fields": { "title": "Low rates", "next": link("Entry", "f1") } }
                ],
                "Asset": [
                    { "sys": { "id": "a1", "type": "Asset" },
                      "fields": { "title": "Hero", "file": { "url": "//images.example.net/hero.png" } } }
                ]
            }
        })
    }

    #[test]
    fn test_resolves_entries_and_assets() {
        let includes = Includes::from_response(&response());
        let resolved = includes.resolve(
            &json!({ "features": [link("Entry", "f1")], "heroImage": link("Asset", "a1") }),
            2,
        );
        assert_eq!(resolved.pointer("/features/0/fields/title"), Some(&json!("Fast approval")));
        assert_eq!(
            resolved.pointer("/heroImage/fields/file/url"),
            Some(&json!("//images.example.net/hero.png"))
        );
    }

    #[test]
    fn test_depth_cuts_cycles() {
        let includes = Includes::from_response(&response());
        let resolved = includes.resolve(&link("Entry", "f1"), 2);
        // f1 -> f2 resolved, f2 -> f1 left as a link
        assert_eq!(resolved.pointer("/fields/next/fields/title"), Some(&json!("Low rates")));
        assert!(as_link(resolved.pointer("/fields/next/fields/next").unwrap()).is_some());
    }

    #[test]
    fn test_unknown_link_is_kept() {
        let includes = Includes::from_response(&response());
        let missing = link("Entry", "nope");
        assert_eq!(includes.resolve(&missing, 2), missing);
    }

    #[test]
    fn test_depth_zero_keeps_links() {
        let includes = Includes::from_response(&response());
        let l = link("Asset", "a1");
        assert_eq!(includes.resolve(&l, 0), l);
    }
}
