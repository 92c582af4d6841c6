use crate::utils::error::{GatewayError, Result};
use crate::utils::validation::validate_url;

pub const DEFAULT_PLACES_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/place";
pub const DEFAULT_WEATHER_ENDPOINT: &str = "http://dataservice.accuweather.com";
pub const DEFAULT_TRANSLATE_ENDPOINT: &str = "https://api-free.deepl.com/v2/translate";
pub const DEFAULT_LLM_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_WIKI_ENDPOINT: &str = "https://es.wikipedia.org/api/rest_v1";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Process-wide configuration, built once at startup. Provider keys are
/// optional: a missing key degrades the affected route instead of aborting.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub google_api_key: Option<String>,
    pub accuweather_api_key: Option<String>,
    pub deepl_api_key: Option<String>,
    pub openrouter_api_key: Option<String>,

    pub places_endpoint: String,
    pub weather_endpoint: String,
    pub translate_endpoint: String,
    pub llm_endpoint: String,
    pub wiki_endpoint: String,

    pub request_timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            google_api_key: None,
            accuweather_api_key: None,
            deepl_api_key: None,
            openrouter_api_key: None,
            places_endpoint: DEFAULT_PLACES_ENDPOINT.to_string(),
            weather_endpoint: DEFAULT_WEATHER_ENDPOINT.to_string(),
            translate_endpoint: DEFAULT_TRANSLATE_ENDPOINT.to_string(),
            llm_endpoint: DEFAULT_LLM_ENDPOINT.to_string(),
            wiki_endpoint: DEFAULT_WIKI_ENDPOINT.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self> {
        let config = Self {
            google_api_key: read_key("GOOGLE_API_KEY"),
            accuweather_api_key: read_key("ACCUWEATHER_API_KEY"),
            deepl_api_key: read_key("DEEPL_API_KEY"),
            openrouter_api_key: read_key("OPENROUTER_API_KEY"),
            places_endpoint: env_or("PLACES_API_ENDPOINT", DEFAULT_PLACES_ENDPOINT),
            weather_endpoint: env_or("WEATHER_API_ENDPOINT", DEFAULT_WEATHER_ENDPOINT),
            translate_endpoint: env_or("TRANSLATE_API_ENDPOINT", DEFAULT_TRANSLATE_ENDPOINT),
            llm_endpoint: env_or("LLM_API_ENDPOINT", DEFAULT_LLM_ENDPOINT),
            wiki_endpoint: env_or("WIKI_API_ENDPOINT", DEFAULT_WIKI_ENDPOINT),
            request_timeout_secs: read_timeout("HTTP_TIMEOUT_SECS")?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_url("places_endpoint", &self.places_endpoint)?;
        validate_url("weather_endpoint", &self.weather_endpoint)?;
        validate_url("translate_endpoint", &self.translate_endpoint)?;
        validate_url("llm_endpoint", &self.llm_endpoint)?;
        validate_url("wiki_endpoint", &self.wiki_endpoint)?;

        if self.request_timeout_secs == 0 {
            return Err(GatewayError::Config {
                message: "request_timeout_secs must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

fn read_key(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => {
            tracing::warn!("Missing environment variable: {}", name);
            None
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn read_timeout(name: &str) -> Result<u64> {
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|e| GatewayError::Config {
            message: format!("{}: invalid timeout '{}': {}", name, value, e),
        }),
        Err(_) => Ok(DEFAULT_TIMEOUT_SECS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GatewayConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.request_timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(config.google_api_key.is_none());
    }

    #[test]
    fn rejects_invalid_endpoint() {
        let config = GatewayConfig {
            weather_endpoint: "not a url".to_string(),
            ..GatewayConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("weather_endpoint"));
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = GatewayConfig {
            request_timeout_secs: 0,
            ..GatewayConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
