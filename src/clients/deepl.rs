use crate::config::GatewayConfig;
use crate::domain::model::TranslationOutcome;
use crate::utils::error::{GatewayError, Result};
use reqwest::Client;
use serde_json::Value;

/// Target languages accepted by the translate route, uppercase code to
/// English display name.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("BG", "Bulgarian"),
    ("CS", "Czech"),
    ("DA", "Danish"),
    ("DE", "German"),
    ("EL", "Greek"),
    ("EN", "English"),
    ("ES", "Spanish"),
    ("ET", "Estonian"),
    ("FI", "Finnish"),
    ("FR", "French"),
    ("HU", "Hungarian"),
    ("ID", "Indonesian"),
    ("IT", "Italian"),
    ("JA", "Japanese"),
    ("KO", "Korean"),
    ("LT", "Lithuanian"),
    ("LV", "Latvian"),
    ("NB", "Norwegian"),
    ("NL", "Dutch"),
    ("PL", "Polish"),
    ("PT", "Portuguese"),
    ("RO", "Romanian"),
    ("RU", "Russian"),
    ("SK", "Slovak"),
    ("SL", "Slovenian"),
    ("SV", "Swedish"),
    ("TR", "Turkish"),
    ("UK", "Ukrainian"),
    ("ZH", "Chinese"),
];

pub fn supported_languages() -> Value {
    let mut map = serde_json::Map::new();
    for (code, name) in SUPPORTED_LANGUAGES {
        map.insert((*code).to_string(), Value::String((*name).to_string()));
    }
    Value::Object(map)
}

pub struct DeepLClient {
    client: Client,
    api_key: Option<String>,
    endpoint: String,
}

impl DeepLClient {
    pub fn new(client: Client, config: &GatewayConfig) -> Self {
        Self {
            client,
            api_key: config.deepl_api_key.clone(),
            endpoint: config.translate_endpoint.clone(),
        }
    }

    /// Validates the target code (case-insensitive) before touching the
    /// network. With no API key the original text is echoed back with
    /// `success: false`, which is still a 200.
    pub async fn translate(&self, text: &str, target_lang: &str) -> Result<TranslationOutcome> {
        let code = target_lang.to_ascii_uppercase();
        if !SUPPORTED_LANGUAGES.iter().any(|(c, _)| *c == code) {
            return Err(GatewayError::UnsupportedLanguage {
                code: target_lang.to_string(),
            });
        }

        let Some(api_key) = &self.api_key else {
            tracing::warn!("DeepL API key not configured, echoing original text");
            return Ok(TranslationOutcome::Skipped {
                translated_text: text.to_string(),
                success: false,
            });
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("DeepL-Auth-Key {}", api_key),
            )
            .form(&[("text", text), ("target_lang", code.as_str())])
            .send()
            .await?
            .error_for_status()?;

        let data: Value = response.json().await?;
        let Some(first) = data.pointer("/translations/0") else {
            return Err(GatewayError::UpstreamPayload {
                service: "DeepL",
                detail: "response is missing translations".to_string(),
            });
        };

        let translated_text = first
            .get("text")
            .and_then(Value::as_str)
            .ok_or_else(|| GatewayError::UpstreamPayload {
                service: "DeepL",
                detail: "translation entry is missing its text".to_string(),
            })?
            .to_string();
        let source_lang = first
            .get("detected_source_language")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string();

        Ok(TranslationOutcome::Translated {
            translated_text,
            source_lang,
            target_lang: code,
        })
    }
}
