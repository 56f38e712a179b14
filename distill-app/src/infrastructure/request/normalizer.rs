use distill_errors::AppError;
use serde_json::{Map, Value};

/// Object keys that may carry the content, checked in this order.
pub const CONTENT_KEYS: [&str; 4] = ["content", "text", "data", "result"];

const EMPTY_OBJECT: &str = "{}";

pub struct RequestNormalizer;

impl RequestNormalizer {
    /// Extracts the content string from a raw request body.
    pub fn extract_content(body: &[u8]) -> Result<String, AppError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| AppError::InvalidRequest(format!("body is not valid JSON ({})", e)))?;
        Self::extract_from_value(value)
    }

    pub fn extract_from_value(value: Value) -> Result<String, AppError> {
        let content = match value {
            Value::String(s) => s,
            Value::Object(map) => Self::extract_from_object(map)?,
            other => {
                return Err(AppError::InvalidRequest(format!(
                    "unexpected body type: {}",
                    json_type_name(&other)
                )))
            }
        };

        let trimmed = content.trim();
        if trimmed.is_empty() || trimmed == EMPTY_OBJECT {
            return Err(AppError::MissingContent);
        }

        Ok(content)
    }

    fn extract_from_object(mut map: Map<String, Value>) -> Result<String, AppError> {
        for key in CONTENT_KEYS {
            if let Some(Value::String(s)) = map.get(key) {
                if !s.trim().is_empty() {
                    if let Some(Value::String(s)) = map.remove(key) {
                        return Ok(s);
                    }
                }
            }
        }

        serde_json::to_string(&Value::Object(map))
            .map_err(|e| AppError::Internal(format!("failed to serialize body: {}", e)))
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
