//! Gemini API client configuration.

use crate::prompt::DEFAULT_TEMPERATURE;
use crate::SessionError;

pub(crate) const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini API client configuration.
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: GEMINI_API_BASE.to_string(),
            model: "gemini-3-flash-preview".to_string(),
            max_tokens: 4096,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Read the credential from the process environment. Absence is a
    /// startup-time configuration failure, not a runtime one.
    pub fn from_env() -> Result<Self, SessionError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| SessionError::Configuration("GEMINI_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GeminiConfig::new("key");
        assert_eq!(config.model, "gemini-3-flash-preview");
        assert_eq!(config.api_base, GEMINI_API_BASE);
        assert_eq!(config.max_tokens, 4096);
        assert_eq!(config.temperature, DEFAULT_TEMPERATURE);
    }

    #[test]
    fn builders() {
        let config = GeminiConfig::new("key")
            .with_model("gemini-2.0-flash")
            .with_max_tokens(1024)
            .with_temperature(0.2)
            .with_api_base("http://localhost:9999");
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.max_tokens, 1024);
        assert_eq!(config.temperature, 0.2);
        assert_eq!(config.api_base, "http://localhost:9999");
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = GeminiConfig::new("super-secret");
        let printed = format!("{config:?}");
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("[REDACTED]"));
    }
}
