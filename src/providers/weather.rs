use crate::models::{Condition, WeatherPayload, WeatherReport};
use crate::providers::ProviderError;
use tracing::{debug, warn};

const WEATHER_URL: &str = "http://api.openweathermap.org/data/2.5/weather";

/// Cloudiness percentage below which a "Clouds" condition still reads as
/// partly cloudy.
const PARTLY_CLOUDY_THRESHOLD: f64 = 20.0;

/// Fetch the current weather for a city and render it as a report. Every
/// failure is converted into a complete, user-presentable sentence; this
/// function never errors to the caller.
pub async fn fetch_weather(client: &reqwest::Client, city: &str, api_key: &str) -> String {
    let payload = match request_weather(client, city, api_key).await {
        Ok(payload) => payload,
        Err(e) => {
            warn!("weather request for {city} failed: {e}");
            return format!("Oops! There was an issue fetching the weather: {e}");
        }
    };

    match build_report(&payload) {
        Ok(report) => render_report(city, &report),
        Err(WeatherFault::CityNotFound) => format!(
            "Oops! I couldn't find weather info for {city}. \
             Double-check the city name and try again."
        ),
        Err(WeatherFault::MissingSections) => {
            warn!("weather payload for {city} is missing required sections");
            "Invalid weather data received. Please try again.".to_string()
        }
        Err(WeatherFault::Malformed(detail)) => {
            warn!("weather payload for {city} is malformed: {detail}");
            format!("Something went wrong while retrieving the weather data: {detail}")
        }
    }
}

async fn request_weather(
    client: &reqwest::Client,
    city: &str,
    api_key: &str,
) -> Result<WeatherPayload, ProviderError> {
    debug!("requesting weather for {city}");
    let response = client
        .get(WEATHER_URL)
        .query(&[("q", city), ("appid", api_key), ("units", "metric")])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(ProviderError::Provider(format!(
            "HTTP {}",
            response.status()
        )));
    }

    Ok(response.json::<WeatherPayload>().await?)
}

/// Payload-level failures, distinct from [`ProviderError`]: the request
/// succeeded but the body cannot be turned into a report.
#[derive(Debug)]
enum WeatherFault {
    CityNotFound,
    MissingSections,
    Malformed(String),
}

/// Validate a provider payload and extract the typed report from it.
fn build_report(payload: &WeatherPayload) -> Result<WeatherReport, WeatherFault> {
    if !status_is_ok(payload) {
        return Err(WeatherFault::CityNotFound);
    }

    let (main, wind, weather) = match (&payload.main, &payload.wind, &payload.weather) {
        (Some(main), Some(wind), Some(weather)) => (main, wind, weather),
        _ => return Err(WeatherFault::MissingSections),
    };

    let entry = weather
        .first()
        .ok_or_else(|| WeatherFault::Malformed("empty weather list".to_string()))?;

    let condition = match entry.main.to_lowercase().as_str() {
        "clear" => Condition::Sunny,
        "clouds" => {
            let cloudiness = payload
                .clouds
                .as_ref()
                .map(|c| c.all)
                .ok_or_else(|| WeatherFault::Malformed("missing cloudiness data".to_string()))?;
            if cloudiness < PARTLY_CLOUDY_THRESHOLD {
                Condition::PartlyCloudy
            } else {
                Condition::Cloudy
            }
        }
        "rain" => Condition::Rainy,
        "thunderstorm" => Condition::Thunderstorm,
        other => Condition::Other(other.to_string()),
    };

    Ok(WeatherReport {
        min_temp: main.temp_min,
        max_temp: main.temp_max,
        wind_speed: wind.speed,
        condition,
    })
}

/// The provider reports its status inside the payload, as the number 200 on
/// success and a string code on error.
fn status_is_ok(payload: &WeatherPayload) -> bool {
    match &payload.cod {
        Some(value) => value.as_i64() == Some(200) || value.as_str() == Some("200"),
        None => false,
    }
}

fn render_report(city: &str, report: &WeatherReport) -> String {
    format!(
        "Here's a quick update on the weather for {city}:\n\
         - Minimum Temperature: {}°C\n\
         - Maximum Temperature: {}°C\n\
         - Wind Speed: {} meters per second\n\
         - Condition: {}.\n\
         Data provided by OpenWeatherMap. www.openweathermap.org",
        report.min_temp,
        report.max_temp,
        report.wind_speed,
        report.condition.describe(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> WeatherPayload {
        serde_json::from_value(value).unwrap()
    }

    fn clear_sky() -> WeatherPayload {
        payload(json!({
            "cod": 200,
            "main": { "temp_min": 10, "temp_max": 15 },
            "wind": { "speed": 3 },
            "weather": [{ "main": "Clear" }]
        }))
    }

    #[test]
    fn clear_condition_renders_full_report() {
        let report = build_report(&clear_sky()).unwrap();
        let text = render_report("Paris", &report);
        assert!(text.contains("Minimum Temperature: 10"));
        assert!(text.contains("Maximum Temperature: 15"));
        assert!(text.contains("Wind Speed: 3"));
        assert!(text.contains("Condition: sunny."));
        assert!(text.contains("OpenWeatherMap"));
    }

    #[test]
    fn light_cloud_cover_is_partly_cloudy() {
        let p = payload(json!({
            "cod": 200,
            "main": { "temp_min": 8, "temp_max": 12 },
            "wind": { "speed": 5 },
            "weather": [{ "main": "Clouds" }],
            "clouds": { "all": 10 }
        }));
        assert_eq!(build_report(&p).unwrap().condition, Condition::PartlyCloudy);
    }

    #[test]
    fn heavy_cloud_cover_is_cloudy() {
        let p = payload(json!({
            "cod": 200,
            "main": { "temp_min": 8, "temp_max": 12 },
            "wind": { "speed": 5 },
            "weather": [{ "main": "Clouds" }],
            "clouds": { "all": 50 }
        }));
        assert_eq!(build_report(&p).unwrap().condition, Condition::Cloudy);
    }

    #[test]
    fn clouds_without_cloudiness_is_malformed() {
        let p = payload(json!({
            "cod": 200,
            "main": { "temp_min": 8, "temp_max": 12 },
            "wind": { "speed": 5 },
            "weather": [{ "main": "Clouds" }]
        }));
        assert!(matches!(build_report(&p), Err(WeatherFault::Malformed(_))));
    }

    #[test]
    fn unknown_condition_falls_back_to_lowercased_raw_text() {
        let p = payload(json!({
            "cod": 200,
            "main": { "temp_min": -2, "temp_max": 1 },
            "wind": { "speed": 7 },
            "weather": [{ "main": "Snow" }]
        }));
        let report = build_report(&p).unwrap();
        assert_eq!(report.condition, Condition::Other("snow".to_string()));
        assert!(render_report("Oslo", &report).contains("Condition: snow."));
    }

    #[test]
    fn error_status_means_city_not_found() {
        let p = payload(json!({ "cod": "404", "message": "city not found" }));
        assert!(matches!(build_report(&p), Err(WeatherFault::CityNotFound)));
    }

    #[test]
    fn string_status_200_is_accepted() {
        let mut p = clear_sky();
        p.cod = Some(json!("200"));
        assert!(build_report(&p).is_ok());
    }

    #[test]
    fn missing_sections_are_rejected() {
        let p = payload(json!({
            "cod": 200,
            "main": { "temp_min": 8, "temp_max": 12 }
        }));
        assert!(matches!(build_report(&p), Err(WeatherFault::MissingSections)));
    }

    #[test]
    fn rendering_is_pure() {
        let report = build_report(&clear_sky()).unwrap();
        assert_eq!(render_report("Paris", &report), render_report("Paris", &report));
    }
}
