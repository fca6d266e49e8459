use regex::Regex;
use std::sync::OnceLock;

fn city_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)weather in (.+)|temperature in (.+)|wind in (.+)")
            .expect("city pattern is valid")
    })
}

/// Pull a city name out of weather-related phrasing. Only the first match in
/// the text is used.
pub fn extract_city(text: &str) -> Option<String> {
    let captures = city_pattern().captures(text)?;
    let city = captures
        .get(1)
        .or_else(|| captures.get(2))
        .or_else(|| captures.get(3))?;
    Some(city.as_str().trim().to_string())
}
