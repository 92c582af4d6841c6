use crate::config::GatewayConfig;
use crate::domain::model::RawPayload;
use crate::utils::error::{GatewayError, Result};
use reqwest::Client;
use url::Url;

pub struct WikipediaClient {
    client: Client,
    base_url: String,
}

impl WikipediaClient {
    pub fn new(client: Client, config: &GatewayConfig) -> Self {
        Self {
            client,
            base_url: config.wiki_endpoint.clone(),
        }
    }

    /// Fetches the page summary for a place and forwards the raw body with
    /// its content type. The place name becomes a percent-encoded path
    /// segment.
    pub async fn summary(&self, lugar: &str) -> Result<RawPayload> {
        let mut url = Url::parse(&self.base_url).map_err(|e| GatewayError::Config {
            message: format!("wiki_endpoint: invalid URL: {}", e),
        })?;
        url.path_segments_mut()
            .map_err(|_| GatewayError::Config {
                message: "wiki_endpoint cannot be a base URL".to_string(),
            })?
            .extend(["page", "summary", lugar]);

        let response = self.client.get(url).send().await?.error_for_status()?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("application/json")
            .to_string();
        let body = response.bytes().await?.to_vec();

        Ok(RawPayload { content_type, body })
    }
}
