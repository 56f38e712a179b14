use crate::application::GenerateContent;
use crate::config::AppConfig;
use crate::infrastructure::groq::GroqClient;
use sha2::{Digest, Sha256};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub generate_content: Arc<GenerateContent>,
    api_key_digest: Option<[u8; 32]>,
}

impl AppContext {
    pub fn new(config: &AppConfig) -> Self {
        let client = match &config.groq_api_key {
            Some(key) => {
                let client =
                    GroqClient::new(key.clone(), &config.groq_base_url, config.groq_model.clone());
                tracing::info!(model = %client.model(), "Using Groq backend");
                Some(client)
            }
            None => {
                tracing::warn!("GROQ_API_KEY not set; completion endpoints will return 503");
                None
            }
        };

        if config.api_key.is_none() {
            tracing::warn!("API_KEY not set; every authenticated request will be rejected");
        }

        Self {
            generate_content: Arc::new(GenerateContent::new(client)),
            api_key_digest: config.api_key.as_deref().map(digest),
        }
    }

    /// A missing configured key rejects everything.
    pub fn is_authorized(&self, presented: Option<&str>) -> bool {
        match (&self.api_key_digest, presented) {
            (Some(expected), Some(presented)) => constant_time_eq(expected, &digest(presented)),
            _ => false,
        }
    }
}

fn digest(key: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Sha256::digest(key.as_bytes()));
    out
}

// Both sides are fixed-length digests, so the fold runs the same number of
// steps whatever the presented key is.
fn constant_time_eq(a: &[u8; 32], b: &[u8; 32]) -> bool {
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
