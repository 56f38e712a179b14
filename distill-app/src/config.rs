use crate::infrastructure::groq::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid http(s) URL: {value}")]
    InvalidUrl { var: &'static str, value: String },

    #[error("{var} is not a valid socket address: {value}")]
    InvalidAddr { var: &'static str, value: String },
}

/// Process-wide settings, read once at startup.
#[derive(Clone)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub groq_api_key: Option<String>,
    pub groq_model: String,
    pub groq_base_url: String,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source. Blank values
    /// count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let groq_base_url = var("GROQ_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        validate_base_url(&groq_base_url)?;

        let bind_addr = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr.parse::<SocketAddr>().map_err(|_| ConfigError::InvalidAddr {
            var: "BIND_ADDR",
            value: bind_addr.clone(),
        })?;

        Ok(Self {
            api_key: var("API_KEY"),
            groq_api_key: var("GROQ_API_KEY"),
            groq_model: var("GROQ_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            groq_base_url,
            bind_addr,
        })
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    pub fn with_groq_api_key(mut self, groq_api_key: Option<String>) -> Self {
        self.groq_api_key = groq_api_key;
        self
    }

    pub fn with_groq_base_url(mut self, groq_base_url: String) -> Self {
        self.groq_base_url = groq_base_url;
        self
    }

    pub fn with_groq_model(mut self, groq_model: String) -> Self {
        self.groq_model = groq_model;
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            groq_api_key: None,
            groq_model: DEFAULT_MODEL.to_string(),
            groq_base_url: DEFAULT_BASE_URL.to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

// Secrets stay out of logs.
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("groq_api_key", &self.groq_api_key.as_ref().map(|_| "<redacted>"))
            .field("groq_model", &self.groq_model)
            .field("groq_base_url", &self.groq_base_url)
            .field("bind_addr", &self.bind_addr)
            .finish()
    }
}

fn validate_base_url(value: &str) -> Result<(), ConfigError> {
    let invalid = || ConfigError::InvalidUrl {
        var: "GROQ_BASE_URL",
        value: value.to_string(),
    };
    let parsed = url::Url::parse(value).map_err(|_| invalid())?;
    match parsed.scheme() {
        "http" | "https" if parsed.host_str().is_some() => Ok(()),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.api_key, None);
        assert_eq!(config.groq_api_key, None);
        assert_eq!(config.groq_model, DEFAULT_MODEL);
        assert_eq!(config.groq_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = config_from(&[("API_KEY", "  "), ("GROQ_API_KEY", "")]).unwrap();
        assert_eq!(config.api_key, None);
        assert_eq!(config.groq_api_key, None);
    }

    #[test]
    fn test_reads_values() {
        let config = config_from(&[
            ("API_KEY", "secret"),
            ("GROQ_API_KEY", "gsk_test"),
            ("GROQ_MODEL", "llama3-8b-8192"),
            ("GROQ_BASE_URL", "http://localhost:8080/v1"),
            ("BIND_ADDR", "0.0.0.0:8000"),
        ])
        .unwrap();
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.groq_api_key.as_deref(), Some("gsk_test"));
        assert_eq!(config.groq_model, "llama3-8b-8192");
        assert_eq!(config.groq_base_url, "http://localhost:8080/v1");
        assert_eq!(config.bind_addr.port(), 8000);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            config_from(&[("GROQ_BASE_URL", "ftp://example.com")]),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            config_from(&[("GROQ_BASE_URL", "not a url")]),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            config_from(&[("BIND_ADDR", "localhost")]),
            Err(ConfigError::InvalidAddr { .. })
        ));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = AppConfig::default().with_api_key(Some("top-secret".to_string()));
        assert!(!format!("{:?}", config).contains("top-secret"));
    }
}
