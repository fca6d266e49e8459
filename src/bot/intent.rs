/// The classified purpose of a user query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Farewell,
    Greeting,
    Weather,
    ImageSearch,
    GeneralSearch,
}

const FAREWELLS: &[&str] = &["quit", "exit", "bye"];
const GREETING_WORDS: &[&str] = &["hello", "hi", "hey"];
const WEATHER_WORDS: &[&str] = &["weather", "temperature", "wind", "cloudy", "sunny", "rain"];

type Predicate = fn(&str) -> bool;

/// Ordered classification rules, evaluated top-to-bottom over the lowercased
/// query; the first matching predicate wins. Ordering matters: a greeting
/// that mentions the weather is still a greeting, and only queries that miss
/// every rule fall through to general search.
const RULES: &[(Predicate, Intent)] = &[
    (is_farewell, Intent::Farewell),
    (is_greeting, Intent::Greeting),
    (mentions_weather, Intent::Weather),
    (mentions_images, Intent::ImageSearch),
];

impl Intent {
    pub fn classify(query: &str) -> Intent {
        let lowered = query.to_lowercase();
        RULES
            .iter()
            .find(|(predicate, _)| predicate(&lowered))
            .map(|(_, intent)| *intent)
            .unwrap_or(Intent::GeneralSearch)
    }
}

fn is_farewell(query: &str) -> bool {
    FAREWELLS.contains(&query)
}

fn is_greeting(query: &str) -> bool {
    GREETING_WORDS.iter().any(|word| query.contains(word))
}

fn mentions_weather(query: &str) -> bool {
    WEATHER_WORDS.iter().any(|word| query.contains(word))
}

fn mentions_images(query: &str) -> bool {
    query.contains("image")
}
