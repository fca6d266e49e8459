use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Runtime configuration, read once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct Config {
    /// Display name the bot uses in greetings.
    pub bot_name: String,

    /// OpenWeatherMap API key.
    pub weather_api_key: String,

    /// Custom-search API key, shared by web and image search.
    pub search_api_key: String,

    /// Custom Search Engine id scoping the search results.
    pub search_cse_id: String,

    /// Address the HTTP server binds to.
    pub bind_addr: String,

    /// Directory where synthesized audio files are written.
    pub audio_dir: PathBuf,

    /// Text-to-speech command invoked to render responses as audio.
    pub tts_command: String,
}

impl Config {
    /// Load configuration from the process environment. The three provider
    /// credentials are mandatory; startup fails fast when one is missing so
    /// the service never calls a provider with empty credentials.
    pub fn from_env() -> Result<Self> {
        let weather_api_key = require_var("WEATHER_API_KEY")?;
        let search_api_key = require_var("SEARCH_API_KEY")?;
        let search_cse_id = require_var("SEARCH_CSE_ID")?;

        Ok(Self {
            bot_name: env::var("BOT_NAME").unwrap_or_else(|_| "SAGE".to_string()),
            weather_api_key,
            search_api_key,
            search_cse_id,
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            audio_dir: env::var("AUDIO_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("audio")),
            tts_command: env::var("TTS_COMMAND").unwrap_or_else(|_| "espeak".to_string()),
        })
    }
}

fn require_var(name: &str) -> Result<String> {
    let value = env::var(name).with_context(|| format!("{name} is not set"))?;
    if value.trim().is_empty() {
        anyhow::bail!("{name} is set but empty");
    }
    Ok(value)
}
