use crate::config::GatewayConfig;
use crate::domain::model::NormalizedWeather;
use crate::utils::error::{GatewayError, Result};
use reqwest::Client;
use serde_json::Value;

pub struct WeatherClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl WeatherClient {
    pub fn new(client: Client, config: &GatewayConfig) -> Self {
        Self {
            client,
            api_key: config.accuweather_api_key.clone(),
            base_url: config.weather_endpoint.clone(),
        }
    }

    /// Two strictly ordered calls: city lookup, then current conditions.
    ///
    /// A failed lookup is an error. A failed conditions call AFTER a good
    /// lookup falls back to the placeholder and is still a success; the two
    /// cases must not be merged.
    pub async fn current(&self, city: &str) -> Result<NormalizedWeather> {
        let Some(api_key) = &self.api_key else {
            tracing::warn!("AccuWeather API key not configured, returning placeholder weather");
            return Ok(NormalizedWeather::placeholder());
        };

        let location_url = format!("{}/locations/v1/cities/search", self.base_url);
        let response = self
            .client
            .get(&location_url)
            .query(&[
                ("apikey", api_key.as_str()),
                ("q", city),
                ("language", "es-ES"),
                ("details", "false"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GatewayError::UpstreamStatus {
                service: "AccuWeather",
                detail: format!("city lookup failed with status {}", response.status()),
            });
        }

        let matches: Value = response.json().await?;
        let Some(location) = matches.as_array().and_then(|m| m.first()) else {
            return Err(GatewayError::UpstreamStatus {
                service: "AccuWeather",
                detail: format!("no location match for city '{}'", city),
            });
        };

        let Some(location_key) = location.get("Key").and_then(Value::as_str) else {
            return Err(GatewayError::UpstreamPayload {
                service: "AccuWeather",
                detail: "location match is missing its Key".to_string(),
            });
        };
        let ciudad = location
            .get("LocalizedName")
            .and_then(Value::as_str)
            .map(str::to_string);
        let pais = location
            .pointer("/Country/LocalizedName")
            .and_then(Value::as_str)
            .map(str::to_string);

        let conditions_url = format!("{}/currentconditions/v1/{}", self.base_url, location_key);
        let response = match self
            .client
            .get(&conditions_url)
            .query(&[
                ("apikey", api_key.as_str()),
                ("details", "true"),
                ("language", "es-ES"),
            ])
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!("Current conditions call failed, using placeholder: {}", err);
                return Ok(NormalizedWeather::placeholder());
            }
        };

        if !response.status().is_success() {
            tracing::warn!(
                "Current conditions returned {}, using placeholder",
                response.status()
            );
            return Ok(NormalizedWeather::placeholder());
        }

        let conditions: Value = response.json().await?;
        let Some(current) = conditions.as_array().and_then(|c| c.first()) else {
            return Err(GatewayError::UpstreamPayload {
                service: "AccuWeather",
                detail: "empty current conditions payload".to_string(),
            });
        };

        Ok(NormalizedWeather {
            ciudad,
            pais,
            temperatura: json_at(current, "/Temperature/Metric/Value"),
            unidad: current
                .pointer("/Temperature/Metric/Unit")
                .and_then(Value::as_str)
                .map(str::to_string),
            descripcion: current
                .get("WeatherText")
                .and_then(Value::as_str)
                .unwrap_or("-")
                .to_string(),
            lluvia: current
                .get("HasPrecipitation")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            humedad: current
                .get("RelativeHumidity")
                .cloned()
                .unwrap_or(Value::Null),
            viento: json_at(current, "/Wind/Speed/Metric/Value"),
            sensacion: json_at(current, "/RealFeelTemperature/Metric/Phrase"),
            sensacion_unidad: json_at(current, "/RealFeelTemperature/Metric/Value"),
        })
    }
}

fn json_at(value: &Value, pointer: &str) -> Value {
    value.pointer(pointer).cloned().unwrap_or(Value::Null)
}
