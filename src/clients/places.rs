use crate::config::GatewayConfig;
use crate::domain::model::{NormalizedPlace, RawPayload};
use crate::utils::error::{GatewayError, Result};
use reqwest::Client;
use serde_json::Value;

pub struct PlacesClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl PlacesClient {
    pub fn new(client: Client, config: &GatewayConfig) -> Self {
        Self {
            client,
            api_key: config.google_api_key.clone(),
            base_url: config.places_endpoint.clone(),
        }
    }

    /// Text search, reduced to the first hit. Zero results is a success
    /// (`None`), a non-OK provider status is an error.
    pub async fn search(&self, destination: &str) -> Result<Option<NormalizedPlace>> {
        let Some(api_key) = &self.api_key else {
            tracing::warn!("Google API key not configured, returning empty places result");
            return Ok(None);
        };

        let url = format!("{}/textsearch/json", self.base_url);
        tracing::debug!("Places text search for '{}'", destination);
        let response = self
            .client
            .get(&url)
            .query(&[("query", destination), ("key", api_key.as_str())])
            .send()
            .await?
            .error_for_status()?;

        let data: Value = response.json().await?;
        let status = data.get("status").and_then(Value::as_str).unwrap_or("");
        if status != "OK" {
            let detail = match data.get("error_message").and_then(Value::as_str) {
                Some(message) => format!("{}: {}", status, message),
                None => status.to_string(),
            };
            return Err(GatewayError::UpstreamStatus {
                service: "Google Places",
                detail,
            });
        }

        let Some(first) = data
            .get("results")
            .and_then(Value::as_array)
            .and_then(|results| results.first())
        else {
            return Ok(None);
        };

        Ok(Some(NormalizedPlace {
            nombre: str_field(first, "name"),
            direccion: str_field(first, "formatted_address"),
            rating: first.get("rating").and_then(Value::as_f64),
            tipos: first.get("types").and_then(Value::as_array).map(|types| {
                types
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            }),
            lat: first
                .pointer("/geometry/location/lat")
                .and_then(Value::as_f64),
            lng: first
                .pointer("/geometry/location/lng")
                .and_then(Value::as_f64),
            place_id: str_field(first, "place_id"),
            business_status: str_field(first, "business_status"),
            foto_ref: first
                .pointer("/photos/0/photo_reference")
                .and_then(Value::as_str)
                .map(str::to_string),
        }))
    }

    /// Proxies the photo bytes for a `photo_reference`, preserving the
    /// upstream content type.
    pub async fn photo(&self, photo_ref: &str) -> Result<RawPayload> {
        let Some(api_key) = &self.api_key else {
            return Err(GatewayError::MissingApiKey {
                provider: "Google Places",
            });
        };

        let url = format!("{}/photo", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("maxwidth", "200"),
                ("photo_reference", photo_ref),
                ("key", api_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("image/jpeg")
            .to_string();
        let body = response.bytes().await?.to_vec();

        Ok(RawPayload { content_type, body })
    }
}

fn str_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn test_client(server: &MockServer) -> PlacesClient {
        let config = GatewayConfig {
            google_api_key: Some("test-key".to_string()),
            places_endpoint: server.base_url(),
            ..GatewayConfig::default()
        };
        PlacesClient::new(Client::new(), &config)
    }

    #[tokio::test]
    async fn search_maps_first_result() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/textsearch/json")
                .query_param("query", "Granada")
                .query_param("key", "test-key");
            then.status(200).json_body(serde_json::json!({
                "status": "OK",
                "results": [
                    {
                        "name": "Alhambra",
                        "formatted_address": "Calle Real de la Alhambra, Granada",
                        "rating": 4.8,
                        "types": ["tourist_attraction", "point_of_interest"],
                        "geometry": {"location": {"lat": 37.176, "lng": -3.588}},
                        "place_id": "abc123",
                        "business_status": "OPERATIONAL",
                        "photos": [{"photo_reference": "ref-1"}, {"photo_reference": "ref-2"}]
                    },
                    {"name": "Second hit that must be ignored"}
                ]
            }));
        });

        let place = test_client(&server)
            .search("Granada")
            .await
            .unwrap()
            .unwrap();

        mock.assert();
        assert_eq!(place.nombre.as_deref(), Some("Alhambra"));
        assert_eq!(place.rating, Some(4.8));
        assert_eq!(place.lat, Some(37.176));
        assert_eq!(place.foto_ref.as_deref(), Some("ref-1"));
        assert_eq!(
            place.tipos.as_deref(),
            Some(&["tourist_attraction".to_string(), "point_of_interest".to_string()][..])
        );
    }

    #[tokio::test]
    async fn search_with_zero_results_is_null_success() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/textsearch/json");
            then.status(200)
                .json_body(serde_json::json!({"status": "OK", "results": []}));
        });

        let result = test_client(&server).search("Nowhere").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn search_with_non_ok_status_is_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/textsearch/json");
            then.status(200).json_body(serde_json::json!({
                "status": "REQUEST_DENIED",
                "error_message": "The provided API key is invalid."
            }));
        });

        let err = test_client(&server).search("Granada").await.unwrap_err();
        assert!(matches!(err, GatewayError::UpstreamStatus { .. }));
        assert!(err.to_string().contains("REQUEST_DENIED"));
    }

    #[tokio::test]
    async fn search_without_key_degrades_to_empty() {
        let config = GatewayConfig::default();
        let client = PlacesClient::new(Client::new(), &config);
        let result = client.search("Granada").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn photo_preserves_content_type() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/photo")
                .query_param("maxwidth", "200")
                .query_param("photo_reference", "ref-1");
            then.status(200)
                .header("Content-Type", "image/png")
                .body(&b"\x89PNG"[..]);
        });

        let payload = test_client(&server).photo("ref-1").await.unwrap();
        mock.assert();
        assert_eq!(payload.content_type, "image/png");
        assert_eq!(payload.body, b"\x89PNG");
    }

    #[tokio::test]
    async fn photo_defaults_to_jpeg_content_type() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/photo");
            then.status(200).body(&b"bytes"[..]);
        });

        let payload = test_client(&server).photo("ref-1").await.unwrap();
        assert_eq!(payload.content_type, "image/jpeg");
    }

    #[tokio::test]
    async fn photo_without_key_is_an_error() {
        let client = PlacesClient::new(Client::new(), &GatewayConfig::default());
        let err = client.photo("ref-1").await.unwrap_err();
        assert!(matches!(err, GatewayError::MissingApiKey { .. }));
    }
}
