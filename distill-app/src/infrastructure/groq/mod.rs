mod client;
mod prompt;
mod response_validator;
mod types;

pub use client::{GroqClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use prompt::build_prompt;
pub use response_validator::ResponseValidator;
pub use types::{ChatCompletionRequest, ChatCompletionResponse, ResponseFormat};
