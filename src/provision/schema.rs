//! Declarative content model: content types and their fields

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::path::Path;

use super::ProvisionError;

const BUILTIN: &str = include_str!("content-model.json");

/// The full set of content types the site expects
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentModel {
    pub content_types: Vec<ContentTypeDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_field: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDef {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub localized: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
    /// Item schema for `Array` fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validations: Vec<Value>,
}

impl ContentModel {
    /// The model embedded in the binary
    pub fn builtin() -> Result<Self, ProvisionError> {
        Self::parse_json(BUILTIN)
    }

    /// Load a model file; the format follows the extension (json, yml/yaml, toml)
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ProvisionError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let model: Self = match path.extension().and_then(|e| e.to_str()) {
            Some("yml") | Some("yaml") => serde_yaml::from_str(&content)
                .map_err(|e| ProvisionError::Schema(format!("{}: {}", path.display(), e)))?,
            Some("toml") => toml::from_str(&content)
                .map_err(|e| ProvisionError::Schema(format!("{}: {}", path.display(), e)))?,
            _ => Self::parse_json(&content)?,
        };
        model.check()?;
        Ok(model)
    }

    fn parse_json(content: &str) -> Result<Self, ProvisionError> {
        let model: Self =
            serde_json::from_str(content).map_err(|e| ProvisionError::Schema(e.to_string()))?;
        model.check()?;
        Ok(model)
    }

    /// Reject duplicate type ids and display fields that name no field
    fn check(&self) -> Result<(), ProvisionError> {
        let mut seen = std::collections::HashSet::new();
        for ct in &self.content_types {
            if !seen.insert(ct.id.as_str()) {
                return Err(ProvisionError::Schema(format!("duplicate content type `{}`", ct.id)));
            }
            if let Some(display) = &ct.display_field {
                if !ct.fields.iter().any(|f| &f.id == display) {
                    return Err(ProvisionError::Schema(format!(
                        "`{}` display field `{}` is not a field",
                        ct.id, display
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn ids(&self) -> Vec<&str> {
        self.content_types.iter().map(|ct| ct.id.as_str()).collect()
    }

    pub fn get(&self, id: &str) -> Option<&ContentTypeDef> {
        self.content_types.iter().find(|ct| ct.id == id)
    }
}

impl ContentTypeDef {
    /// Request body for `PUT /content_types/{id}`
    pub fn to_payload(&self) -> Value {
        let mut body = json!({
            "name": self.name,
            "description": self.description,
            "fields": self.fields,
        });
        if let Some(display) = &self.display_field {
            body["displayField"] = json!(display);
        }
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cms::content_types;

    #[test]
    fn test_builtin_covers_site_content_types() {
        let model = ContentModel::builtin().unwrap();
        for id in [
            content_types::HOME,
            content_types::PRODUCT,
            content_types::CORPORATE,
            content_types::NAVIGATION,
            content_types::FOOTER,
            content_types::FEATURE,
            content_types::FAQ,
            content_types::TEAM_MEMBER,
        ] {
            assert!(model.get(id).is_some(), "missing {}", id);
        }
    }

    #[test]
    fn test_product_slug_is_required() {
        let model = ContentModel::builtin().unwrap();
        let slug = model
            .get(content_types::PRODUCT)
            .and_then(|ct| ct.fields.iter().find(|f| f.id == "slug"))
            .unwrap();
        assert!(slug.required);
        assert_eq!(slug.field_type, "Symbol");
    }

    #[test]
    fn test_payload_shape() {
        let model = ContentModel::builtin().unwrap();
        let payload = model.get(content_types::FAQ).unwrap().to_payload();
        assert_eq!(payload["displayField"], "question");
        assert_eq!(payload["fields"][0]["type"], "Symbol");
        assert!(payload["fields"][0].get("linkType").is_none());
    }

    #[test]
    fn test_load_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.yml");
        std::fs::write(
            &path,
            r#"
contentTypes:
  - id: banner
    name: Banner
    displayField: title
    fields:
      - id: title
        name: Title
        type: Symbol
        required: true
"#,
        )
        .unwrap();
        let model = ContentModel::load(&path).unwrap();
        assert_eq!(model.ids(), vec!["banner"]);
        assert!(model.content_types[0].fields[0].required);
    }

    #[test]
    fn test_load_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.toml");
        std::fs::write(
            &path,
            r#"
[[contentTypes]]
id = "banner"
name = "Banner"

[[contentTypes.fields]]
id = "title"
name = "Title"
type = "Symbol"
"#,
        )
        .unwrap();
        assert_eq!(ContentModel::load(&path).unwrap().ids(), vec!["banner"]);
    }

    #[test]
    fn test_rejects_bad_display_field() {
        let json = r#"{"contentTypes":[{"id":"x","name":"X","displayField":"nope","fields":[]}]}"#;
        assert!(matches!(ContentModel::parse_json(json), Err(ProvisionError::Schema(_))));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let json = r#"{"contentTypes":[{"id":"x","name":"X"},{"id":"x","name":"Y"}]}"#;
        assert!(ContentModel::parse_json(json).is_err());
    }
}
