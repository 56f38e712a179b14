use crate::domain::{Completion, StructuredPost};
use distill_errors::AppError;
use serde_json::Value;

const TITLE_FIELD: &str = "title";
const POST_CONTENT_FIELD: &str = "postContent";

pub struct ResponseValidator;

impl ResponseValidator {
    pub fn validate(text: String, structured: bool) -> Result<Completion, AppError> {
        if structured {
            Self::parse_structured(&text).map(Completion::Post)
        } else {
            Ok(Completion::text(text))
        }
    }

    /// JSON mode is best effort on the provider side, so the shape is checked
    /// here rather than trusted.
    pub fn parse_structured(text: &str) -> Result<StructuredPost, AppError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| AppError::MalformedUpstreamJson(e.to_string()))?;

        let Value::Object(map) = value else {
            return Err(AppError::UnexpectedUpstreamShape(
                "expected a JSON object".to_string(),
            ));
        };

        let field = |name: &str| match map.get(name) {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(_) => Err(AppError::UnexpectedUpstreamShape(format!(
                "field `{}` is not a string",
                name
            ))),
            None => Err(AppError::UnexpectedUpstreamShape(format!(
                "missing field `{}`",
                name
            ))),
        };

        Ok(StructuredPost::new(
            field(TITLE_FIELD)?,
            field(POST_CONTENT_FIELD)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unstructured_passes_text_through() {
        let completion = ResponseValidator::validate("not json at all".to_string(), false).unwrap();
        assert_eq!(completion, Completion::text("not json at all".to_string()));
    }

    #[test]
    fn test_structured_success_ignores_extra_fields() {
        let text = r#"{"title": "Q3 Results", "postContent": "Sales grew.", "tags": ["x"]}"#;
        let completion = ResponseValidator::validate(text.to_string(), true).unwrap();
        assert_eq!(
            completion,
            Completion::Post(StructuredPost::new(
                "Q3 Results".to_string(),
                "Sales grew.".to_string()
            ))
        );
    }

    #[test]
    fn test_structured_allows_empty_strings() {
        let post = ResponseValidator::parse_structured(r#"{"title": "", "postContent": ""}"#).unwrap();
        assert_eq!(post.title, "");
        assert_eq!(post.post_content, "");
    }

    #[test]
    fn test_not_json_is_malformed() {
        assert!(matches!(
            ResponseValidator::validate("not json".to_string(), true),
            Err(AppError::MalformedUpstreamJson(_))
        ));
        assert!(matches!(
            ResponseValidator::parse_structured(r#"{"title": "cut off"#),
            Err(AppError::MalformedUpstreamJson(_))
        ));
    }

    #[test]
    fn test_missing_post_content_is_unexpected_shape() {
        let err = ResponseValidator::parse_structured(r#"{"title": "Only a title"}"#).unwrap_err();
        assert_eq!(
            err,
            AppError::UnexpectedUpstreamShape("missing field `postContent`".to_string())
        );
    }

    #[test]
    fn test_wrong_types_are_unexpected_shape() {
        let err = ResponseValidator::parse_structured(r#"{"title": 7, "postContent": "x"}"#).unwrap_err();
        assert_eq!(
            err,
            AppError::UnexpectedUpstreamShape("field `title` is not a string".to_string())
        );

        assert!(matches!(
            ResponseValidator::parse_structured(r#"["title", "postContent"]"#),
            Err(AppError::UnexpectedUpstreamShape(_))
        ));
    }
}
