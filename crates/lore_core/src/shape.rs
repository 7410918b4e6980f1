//! Declared output shapes for structured generation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// One string field of an [`OutputShape`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeField {
    /// JSON key
    pub name: String,
    /// What the model should put there
    pub description: String,
}

impl ShapeField {
    /// Create a field description.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// The shape a structured response must take: a flat object of required
/// string fields.
///
/// # Examples
///
/// ```
/// use lore_core::Story;
///
/// let schema = Story::shape().to_json_schema();
/// assert_eq!(schema["type"], "OBJECT");
/// assert_eq!(schema["required"][0], "title");
/// assert_eq!(schema["properties"]["story"]["type"], "STRING");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutputShape {
    /// Name used in logs and spans
    pub name: String,
    /// Required fields in output order
    pub fields: Vec<ShapeField>,
}

impl OutputShape {
    /// Create a shape from its fields.
    pub fn new(name: impl Into<String>, fields: Vec<ShapeField>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Render as the OpenAPI-subset schema accepted by `responseSchema`.
    pub fn to_json_schema(&self) -> Value {
        let mut properties = Map::new();
        for field in &self.fields {
            properties.insert(
                field.name.clone(),
                json!({ "type": "STRING", "description": field.description }),
            );
        }
        let names: Vec<&str> = self.fields.iter().map(|f| f.name.as_str()).collect();
        json!({
            "type": "OBJECT",
            "properties": properties,
            "required": names,
            "propertyOrdering": names,
        })
    }

    /// Plain-language instruction appended to prompts so that drivers
    /// without schema support still answer in the right shape.
    pub fn instruction(&self) -> String {
        let fields = self
            .fields
            .iter()
            .map(|f| format!("\"{}\" ({})", f.name, f.description))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "Respond with ONLY a JSON object containing these string fields: {}.",
            fields
        )
    }

    /// Names of fields missing or blank in `value`.
    pub fn missing_fields(&self, value: &Value) -> Vec<String> {
        self.fields
            .iter()
            .filter(|field| {
                value
                    .get(&field.name)
                    .and_then(Value::as_str)
                    .is_none_or(|s| s.trim().is_empty())
            })
            .map(|field| field.name.clone())
            .collect()
    }
}
