use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{service} rejected the request: {detail}")]
    UpstreamStatus {
        service: &'static str,
        detail: String,
    },

    #[error("Unexpected payload from {service}: {detail}")]
    UpstreamPayload {
        service: &'static str,
        detail: String,
    },

    #[error("{provider} API key is not configured")]
    MissingApiKey { provider: &'static str },

    #[error("Missing required parameter: {name}")]
    MissingParameter { name: String },

    #[error("Unsupported language: {code}")]
    UnsupportedLanguage { code: String },

    #[error("Route not found")]
    RouteNotFound,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl GatewayError {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingParameter { .. } | Self::UnsupportedLanguage { .. } => 400,
            Self::RouteNotFound => 404,
            _ => 500,
        }
    }

    /// Message safe to send back to the caller. Upstream and validation
    /// failures surface their detail; anything else stays server-side.
    pub fn public_message(&self) -> String {
        match self {
            Self::Serialization(_) | Self::Config { .. } => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_400() {
        let err = GatewayError::MissingParameter {
            name: "city".to_string(),
        };
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.public_message(), "Missing required parameter: city");

        let err = GatewayError::UnsupportedLanguage {
            code: "XX".to_string(),
        };
        assert_eq!(err.status_code(), 400);
        assert!(err.public_message().contains("XX"));
    }

    #[test]
    fn unmatched_route_maps_to_404() {
        let err = GatewayError::RouteNotFound;
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.public_message(), "Route not found");
    }

    #[test]
    fn internal_errors_do_not_leak_detail() {
        let err = GatewayError::Config {
            message: "secret detail".to_string(),
        };
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.public_message(), "Internal server error");
    }

    #[test]
    fn upstream_errors_surface_detail() {
        let err = GatewayError::UpstreamStatus {
            service: "AccuWeather",
            detail: "no location match".to_string(),
        };
        assert_eq!(err.status_code(), 500);
        assert!(err.public_message().contains("no location match"));
    }
}
