mod city;
mod intent;

pub use city::extract_city;
pub use intent::Intent;

use crate::config::Config;
use crate::providers::{images, search, weather};
use crate::speech::{AudioHandle, SpeechSynthesizer};
use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

const GOODBYE: &str =
    "Goodbye! Have a great day and safe travels. If you need more help, just let me know!";

const CITY_PROMPT: &str = "I need a city name to provide the weather report. \
     Could you please tell me the city you're interested in?";

/// Text reply plus the URL of its audio rendering.
#[derive(Debug, Clone)]
pub struct Reply {
    pub text: String,
    pub audio_url: String,
}

/// The assistant core: classifies a query, delegates to at most one
/// provider, and hands the reply to the speech synthesizer.
pub struct TravelBot {
    config: Arc<Config>,
    client: reqwest::Client,
    synthesizer: Arc<dyn SpeechSynthesizer>,
}

impl TravelBot {
    pub fn new(config: Arc<Config>, synthesizer: Arc<dyn SpeechSynthesizer>) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            synthesizer,
        }
    }

    /// Process one query. Provider failures surface as apologetic reply
    /// text, never as errors; only an empty query is refused.
    pub async fn respond(&self, query: &str) -> Result<Reply> {
        if query.trim().is_empty() {
            anyhow::bail!("empty query");
        }

        let intent = Intent::classify(query);
        info!("classified query as {intent:?}");
        let text = self.dispatch(intent, query).await;

        let handle = AudioHandle::new_in(&self.config.audio_dir);
        let audio_url = handle.url();
        self.spawn_synthesis(text.clone(), handle);

        Ok(Reply { text, audio_url })
    }

    async fn dispatch(&self, intent: Intent, query: &str) -> String {
        match intent {
            Intent::Farewell => GOODBYE.to_string(),
            Intent::Greeting => format!(
                "Hey there! I'm {}. How can I help you with your travel plans today?",
                self.config.bot_name
            ),
            Intent::Weather => match extract_city(query) {
                Some(city) => {
                    weather::fetch_weather(&self.client, &city, &self.config.weather_api_key).await
                }
                None => CITY_PROMPT.to_string(),
            },
            Intent::ImageSearch => {
                images::search_images(
                    &self.client,
                    query,
                    &self.config.search_api_key,
                    &self.config.search_cse_id,
                )
                .await
            }
            Intent::GeneralSearch => {
                search::search_travel_info(
                    &self.client,
                    query,
                    &self.config.search_api_key,
                    &self.config.search_cse_id,
                )
                .await
            }
        }
    }

    /// Audio rendering is best effort: a synthesis failure is logged and
    /// never delays or alters the text reply.
    fn spawn_synthesis(&self, text: String, handle: AudioHandle) {
        let synthesizer = self.synthesizer.clone();
        tokio::spawn(async move {
            if let Err(e) = synthesizer.synthesize(&text, &handle).await {
                warn!("speech synthesis failed: {e}");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speech::NullSynthesizer;
    use std::path::PathBuf;

    fn test_bot() -> TravelBot {
        let config = Config {
            bot_name: "SAGE".to_string(),
            weather_api_key: "weather-key".to_string(),
            search_api_key: "search-key".to_string(),
            search_cse_id: "cse-id".to_string(),
            bind_addr: "127.0.0.1:0".to_string(),
            audio_dir: PathBuf::from("audio"),
            tts_command: "espeak".to_string(),
        };
        TravelBot::new(Arc::new(config), Arc::new(NullSynthesizer))
    }

    #[tokio::test]
    async fn farewell_returns_the_goodbye_text() {
        let reply = test_bot().respond("bye").await.unwrap();
        assert_eq!(reply.text, GOODBYE);
    }

    #[tokio::test]
    async fn greeting_includes_the_bot_name() {
        let reply = test_bot().respond("hello").await.unwrap();
        assert!(reply.text.contains("SAGE"));
        assert!(reply.text.starts_with("Hey there!"));
    }

    #[tokio::test]
    async fn weather_query_without_city_asks_for_one() {
        let reply = test_bot().respond("weather today").await.unwrap();
        assert!(reply.text.contains("I need a city name"));
    }

    #[tokio::test]
    async fn empty_query_is_refused() {
        assert!(test_bot().respond("   ").await.is_err());
    }

    #[tokio::test]
    async fn every_reply_carries_a_fresh_audio_url() {
        let bot = test_bot();
        let first = bot.respond("hello").await.unwrap();
        let second = bot.respond("hello").await.unwrap();
        assert!(first.audio_url.starts_with("/audio/"));
        assert_ne!(first.audio_url, second.audio_url);
    }
}
