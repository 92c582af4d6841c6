use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Inbound request as seen by the gateway: method, path and the untyped
/// query-string mapping. Created once per invocation, read-only.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: String,
    pub path: String,
    pub params: HashMap<String, String>,
}

impl ApiRequest {
    pub fn get(path: &str) -> Self {
        Self {
            method: "GET".to_string(),
            path: path.to_string(),
            params: HashMap::new(),
        }
    }

    pub fn options(path: &str) -> Self {
        Self {
            method: "OPTIONS".to_string(),
            path: path.to_string(),
            params: HashMap::new(),
        }
    }

    pub fn with_param(mut self, name: &str, value: &str) -> Self {
        self.params.insert(name.to_string(), value.to_string());
        self
    }
}

/// First text-search hit, reduced to the fields the frontend consumes.
/// Every field is optional because the provider may omit any of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPlace {
    pub nombre: Option<String>,
    pub direccion: Option<String>,
    pub rating: Option<f64>,
    pub tipos: Option<Vec<String>>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub place_id: Option<String>,
    pub business_status: Option<String>,
    pub foto_ref: Option<String>,
}

/// Current conditions for a city. Mixed-type fields hold either the metric
/// reading or the `"-"` placeholder, so they stay as raw JSON values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedWeather {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ciudad: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pais: Option<String>,
    pub temperatura: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unidad: Option<String>,
    pub descripcion: String,
    pub lluvia: bool,
    pub humedad: Value,
    pub viento: Value,
    pub sensacion: Value,
    pub sensacion_unidad: Value,
}

impl NormalizedWeather {
    /// Fixed fallback returned as a SUCCESS when the weather provider is
    /// unconfigured or the conditions call fails after a good city lookup.
    pub fn placeholder() -> Self {
        Self {
            ciudad: None,
            pais: None,
            temperatura: Value::from("-"),
            unidad: None,
            descripcion: "-".to_string(),
            lluvia: false,
            humedad: Value::from("-"),
            viento: Value::from("-"),
            sensacion: Value::from("-"),
            sensacion_unidad: Value::from("-"),
        }
    }
}

/// Outcome of a translation call. `Skipped` echoes the original text when the
/// translation key is absent; it is still an HTTP 200.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TranslationOutcome {
    Translated {
        translated_text: String,
        source_lang: String,
        target_lang: String,
    },
    Skipped {
        translated_text: String,
        success: bool,
    },
}

/// Raw passthrough body (photo bytes, wiki summary) plus its content type.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPayload {
    pub content_type: String,
    pub body: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_weather_omits_location_fields() {
        let json = serde_json::to_value(NormalizedWeather::placeholder()).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("ciudad"));
        assert!(!obj.contains_key("pais"));
        assert!(!obj.contains_key("unidad"));
        assert_eq!(obj["temperatura"], "-");
        assert_eq!(obj["lluvia"], false);
        assert_eq!(obj["sensacion_unidad"], "-");
    }

    #[test]
    fn skipped_translation_serializes_success_flag() {
        let outcome = TranslationOutcome::Skipped {
            translated_text: "Hola".to_string(),
            success: false,
        };
        let json = serde_json::to_value(outcome).unwrap();
        assert_eq!(json["translated_text"], "Hola");
        assert_eq!(json["success"], false);
    }

    #[test]
    fn translated_outcome_has_no_success_flag() {
        let outcome = TranslationOutcome::Translated {
            translated_text: "Hello".to_string(),
            source_lang: "ES".to_string(),
            target_lang: "EN".to_string(),
        };
        let json = serde_json::to_value(outcome).unwrap();
        assert_eq!(json["target_lang"], "EN");
        assert!(json.get("success").is_none());
    }
}
