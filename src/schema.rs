use jsonschema::validator_for;
use serde_json::{json, Value};

#[derive(Debug, thiserror::Error)]
pub enum SchemaValidationError {
    #[error("Schema compile error: {0}")]
    SchemaCompile(String),
    #[error("{0}")]
    ValidationFailed(String),
}

/// Input schema for the `generate_chart` tool.
///
/// Advertised verbatim in `tools/list` and enforced against incoming
/// arguments before they are deserialized into a [`ChartRequest`].
///
/// [`ChartRequest`]: crate::protocol::ChartRequest
pub fn generate_chart_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "chart_type": {
                "type": "string",
                "description": "Type of chart to generate",
                "enum": ["line", "bar", "scatter", "pie"]
            },
            "title": {
                "type": "string",
                "description": "Main title of the chart"
            },
            "subtitle": {
                "type": "string",
                "description": "Subtitle of the chart"
            },
            "x_label": {
                "type": "string",
                "description": "Label for the X-axis"
            },
            "y_label": {
                "type": "string",
                "description": "Label for the Y-axis"
            },
            "data": {
                "type": "object",
                "description": "Chart data with labels and values",
                "properties": {
                    "labels": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Labels for data points"
                    },
                    "values": {
                        "type": "array",
                        "items": { "type": "number" },
                        "description": "Values for data points"
                    }
                },
                "required": ["labels", "values"]
            }
        },
        "required": ["chart_type", "title", "subtitle", "x_label", "y_label", "data"]
    })
}

/// Validate a JSON instance against a JSON Schema (draft 2020-12).
///
/// Returns the first validation failure as a human-readable description;
/// callers fold it into the tool result text.
pub fn validate_arguments(schema: &Value, instance: &Value) -> Result<(), SchemaValidationError> {
    let validator = validator_for(schema)
        .map_err(|e| SchemaValidationError::SchemaCompile(e.to_string()))?;

    validator
        .validate(instance)
        .map_err(|e| SchemaValidationError::ValidationFailed(e.to_string()))
}
