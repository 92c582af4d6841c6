use crate::config::GatewayConfig;
use crate::utils::error::{GatewayError, Result};
use reqwest::Client;
use serde_json::Value;

const MODEL: &str = "meta-llama/llama-3.3-8b-instruct:free";

fn itinerary_prompt(lugar: &str) -> String {
    format!(
        "Dame recomendaciones de itinerarios en {}. Quiero que lo hagas MUY \
         resumido y que respondas directamente y en español.",
        lugar
    )
}

pub struct OpenRouterClient {
    client: Client,
    api_key: Option<String>,
    endpoint: String,
}

impl OpenRouterClient {
    pub fn new(client: Client, config: &GatewayConfig) -> Self {
        Self {
            client,
            api_key: config.openrouter_api_key.clone(),
            endpoint: config.llm_endpoint.clone(),
        }
    }

    /// Asks for a condensed Spanish itinerary for a place and forwards the
    /// provider's raw chat-completion JSON.
    pub async fn recommend(&self, lugar: &str) -> Result<Value> {
        let Some(api_key) = &self.api_key else {
            return Err(GatewayError::MissingApiKey {
                provider: "OpenRouter",
            });
        };

        let body = serde_json::json!({
            "model": MODEL,
            "messages": [
                {"role": "user", "content": itinerary_prompt(lugar)}
            ],
        });

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}
