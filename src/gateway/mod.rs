pub mod response;
pub mod router;

use crate::clients::{DeepLClient, OpenRouterClient, PlacesClient, WeatherClient, WikipediaClient};
use crate::config::GatewayConfig;
use crate::domain::model::ApiRequest;
use crate::utils::error::Result;
use response::ApiResponse;
use router::{resolve, Route};
use std::time::Duration;

/// Dispatch shell: owns one client per upstream provider, all sharing a
/// single reqwest client with the configured timeout.
pub struct Gateway {
    places: PlacesClient,
    weather: WeatherClient,
    translator: DeepLClient,
    recommender: OpenRouterClient,
    wiki: WikipediaClient,
}

impl Gateway {
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            places: PlacesClient::new(client.clone(), config),
            weather: WeatherClient::new(client.clone(), config),
            translator: DeepLClient::new(client.clone(), config),
            recommender: OpenRouterClient::new(client.clone(), config),
            wiki: WikipediaClient::new(client, config),
        })
    }

    /// Error envelope around dispatch: nothing past this point fails. OPTIONS
    /// short-circuits to the preflight response before any routing happens.
    pub async fn handle(&self, request: &ApiRequest) -> ApiResponse {
        if request.method.eq_ignore_ascii_case("OPTIONS") {
            return ApiResponse::preflight();
        }

        match self.dispatch(request).await {
            Ok(response) => response,
            Err(err) => {
                let status = err.status_code();
                if status < 500 {
                    tracing::warn!("{} {} -> {}: {}", request.method, request.path, status, err);
                } else {
                    tracing::error!(
                        "{} {} -> {}: {:?}",
                        request.method,
                        request.path,
                        status,
                        err
                    );
                }
                ApiResponse::error(status, &err.public_message())
            }
        }
    }

    async fn dispatch(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let resolved = resolve(request)?;
        let params = &resolved.params;

        match resolved.route {
            Route::Places => {
                let place = self.places.search(&params["destination"]).await?;
                Ok(ApiResponse::json(200, serde_json::to_value(place)?))
            }
            Route::Weather => {
                let weather = self.weather.current(&params["city"]).await?;
                Ok(ApiResponse::json(200, serde_json::to_value(weather)?))
            }
            Route::Translate => {
                let outcome = self
                    .translator
                    .translate(&params["text"], &params["lang"])
                    .await?;
                Ok(ApiResponse::json(200, serde_json::to_value(outcome)?))
            }
            Route::Languages => Ok(ApiResponse::json(
                200,
                crate::clients::deepl::supported_languages(),
            )),
            Route::Recommend => {
                let completion = self.recommender.recommend(&params["lugar"]).await?;
                Ok(ApiResponse::json(200, completion))
            }
            Route::Photo => {
                let payload = self.places.photo(&params["photo_ref"]).await?;
                Ok(ApiResponse::binary(&payload.content_type, payload.body))
            }
            Route::Wiki => {
                let payload = self.wiki.summary(&params["lugar"]).await?;
                Ok(ApiResponse::binary(&payload.content_type, payload.body))
            }
        }
    }
}
