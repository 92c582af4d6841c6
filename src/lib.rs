pub mod clients;
pub mod config;
pub mod domain;
pub mod gateway;
pub mod utils;

pub use clients::{DeepLClient, OpenRouterClient, PlacesClient, WeatherClient, WikipediaClient};
pub use config::GatewayConfig;
pub use domain::model::{
    ApiRequest, NormalizedPlace, NormalizedWeather, RawPayload, TranslationOutcome,
};
pub use gateway::response::{ApiResponse, ResponseBody};
pub use gateway::Gateway;
pub use utils::error::{GatewayError, Result};
