// Upstream clients: one module per provider. Each owns a clone of the shared
// reqwest client and the slice of configuration it needs.

pub mod deepl;
pub mod openrouter;
pub mod places;
pub mod weather;
pub mod wikipedia;

pub use deepl::DeepLClient;
pub use openrouter::OpenRouterClient;
pub use places::PlacesClient;
pub use weather::WeatherClient;
pub use wikipedia::WikipediaClient;
