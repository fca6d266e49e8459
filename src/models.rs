use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct AskForm {
    #[serde(default)]
    pub user_input: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AskResponse {
    pub response: String,
    pub audio_url: String,
}

/// OpenWeatherMap current-weather payload. Every section is optional so a
/// partial or error payload still deserializes and can be validated by hand.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherPayload {
    /// The provider emits this as a number on success and a string on error.
    pub cod: Option<serde_json::Value>,
    pub main: Option<WeatherMain>,
    pub wind: Option<WeatherWind>,
    pub weather: Option<Vec<WeatherEntry>>,
    pub clouds: Option<WeatherClouds>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherMain {
    pub temp_min: f64,
    pub temp_max: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherWind {
    pub speed: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherEntry {
    pub main: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherClouds {
    pub all: f64,
}

/// Validated weather facts extracted from a provider payload.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub min_temp: f64,
    pub max_temp: f64,
    pub wind_speed: f64,
    pub condition: Condition,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rainy,
    Thunderstorm,
    Other(String),
}

impl Condition {
    pub fn describe(&self) -> &str {
        match self {
            Condition::Sunny => "sunny",
            Condition::PartlyCloudy => "partly cloudy",
            Condition::Cloudy => "cloudy",
            Condition::Rainy => "rainy",
            Condition::Thunderstorm => "thunderstorm",
            Condition::Other(raw) => raw,
        }
    }
}

/// Custom-search web result payload. `items` is absent entirely when the
/// provider has nothing for the query, which callers treat differently from
/// an empty list.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPayload {
    pub items: Option<Vec<SearchItem>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchItem {
    pub title: Option<String>,
    pub snippet: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImagePayload {
    pub items: Option<Vec<ImageItem>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageItem {
    pub link: Option<String>,
    pub image: Option<ImageMeta>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageMeta {
    pub creator: Option<String>,
}
