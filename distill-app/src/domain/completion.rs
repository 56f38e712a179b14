use serde::{Deserialize, Serialize};

/// A titled post returned by endpoints running in structured mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredPost {
    pub title: String,
    #[serde(rename = "postContent")]
    pub post_content: String,
}

impl StructuredPost {
    pub fn new(title: String, post_content: String) -> Self {
        Self {
            title,
            post_content,
        }
    }
}

/// Successful pipeline output, serialized as the response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Completion {
    Text { result: String },
    Post(StructuredPost),
}

impl Completion {
    pub fn text(result: String) -> Self {
        Self::Text { result }
    }
}
