use super::prompt::build_prompt;
use super::types::{ChatCompletionRequest, ChatCompletionResponse, ErrorEnvelope};
use crate::domain::Endpoint;
use distill_errors::AppError;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

pub struct GroqClient {
    http_client: reqwest::Client,
    api_key: String,
    completions_url: String,
    model: String,
}

impl GroqClient {
    pub fn new(api_key: String, base_url: &str, model: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_key,
            completions_url: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn generate(&self, endpoint: &Endpoint, content: &str) -> Result<String, AppError> {
        let prompt = build_prompt(endpoint.template, content);
        let request =
            ChatCompletionRequest::new(&self.model, prompt, endpoint.sampling, endpoint.structured);
        self.complete(&request).await
    }

    pub async fn complete(&self, request: &ChatCompletionRequest) -> Result<String, AppError> {
        let response = self
            .http_client
            .post(&self.completions_url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Groq request failed: {}", e);
                AppError::UpstreamUnreachable(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            match serde_json::from_str::<ErrorEnvelope>(&body) {
                Ok(envelope) => {
                    tracing::error!(
                        error_type = envelope.error.error_type.as_deref().unwrap_or("unknown"),
                        "Groq error: {} - {}",
                        status,
                        envelope.error.message
                    );
                    return Err(AppError::UpstreamError(envelope.error.message));
                }
                Err(_) => {
                    tracing::error!("Groq error: {} - {}", status, body);
                    return Err(AppError::UpstreamError(format!("API error: {}", status)));
                }
            }
        }

        // A failed read is a transport problem; a body that reads fully but
        // does not decode is the provider's.
        let body = response.bytes().await.map_err(|e| {
            tracing::error!("Groq response body could not be read: {}", e);
            AppError::UpstreamUnreachable(e.to_string())
        })?;

        let completion: ChatCompletionResponse = serde_json::from_slice(&body).map_err(|e| {
            tracing::error!("Groq response could not be decoded: {}", e);
            AppError::UpstreamError(format!("error decoding response body: {}", e))
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| AppError::UpstreamError("No response from AI".to_string()))
    }
}
