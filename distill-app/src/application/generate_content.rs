use crate::domain::{Completion, Endpoint};
use crate::infrastructure::groq::{GroqClient, ResponseValidator};
use crate::infrastructure::request::RequestNormalizer;
use distill_errors::AppError;

/// Normalize, prompt, complete, validate. One instance serves every endpoint.
pub struct GenerateContent {
    client: Option<GroqClient>,
}

impl GenerateContent {
    pub fn new(client: Option<GroqClient>) -> Self {
        Self { client }
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    pub async fn execute(&self, endpoint: &Endpoint, body: &[u8]) -> Result<Completion, AppError> {
        let client = self.client.as_ref().ok_or_else(|| {
            AppError::ServiceUnavailable("GROQ_API_KEY not configured".to_string())
        })?;

        let content = RequestNormalizer::extract_content(body)?;
        tracing::debug!(
            template = %endpoint.template,
            content_len = content.len(),
            "Normalized request content"
        );

        let text = client.generate(endpoint, &content).await?;
        ResponseValidator::validate(text, endpoint.structured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::find_endpoint;

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
            .block_on(future)
    }

    #[test]
    fn test_unconfigured_fails_before_reading_body() {
        let pipeline = GenerateContent::new(None);
        let endpoint = find_endpoint("generate").unwrap();

        let err = block_on(pipeline.execute(endpoint, b"{not json")).unwrap_err();
        assert!(matches!(err, AppError::ServiceUnavailable(_)));
        assert!(!pipeline.is_configured());
    }

    #[test]
    fn test_body_errors_surface_before_network() {
        // Port 9 is discard; the request must never get that far.
        let client = GroqClient::new("k".into(), "http://127.0.0.1:9", "m".into());
        let pipeline = GenerateContent::new(Some(client));
        let endpoint = find_endpoint("newsletter").unwrap();

        assert_eq!(
            block_on(pipeline.execute(endpoint, b"{}")).unwrap_err(),
            AppError::MissingContent
        );
        assert!(matches!(
            block_on(pipeline.execute(endpoint, b"[]")).unwrap_err(),
            AppError::InvalidRequest(_)
        ));
    }
}
