use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("cannot synthesize empty text")]
    EmptyText,

    #[error("failed to run {command}: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("{command} exited with {status}")]
    Failed {
        command: String,
        status: std::process::ExitStatus,
    },
}

/// Location of one synthesized audio file. The caller creates a fresh handle
/// per request so concurrent requests never write to the same path.
#[derive(Debug, Clone)]
pub struct AudioHandle {
    file_name: String,
    path: PathBuf,
}

impl AudioHandle {
    pub fn new_in(dir: &Path) -> Self {
        let file_name = format!("{}.wav", Uuid::new_v4());
        let path = dir.join(&file_name);
        Self { file_name, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// URL under which the web layer serves this file.
    pub fn url(&self) -> String {
        format!("/audio/{}", self.file_name)
    }
}

/// Renders response text to an audio file at the handle's path.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str, handle: &AudioHandle) -> Result<(), SpeechError>;
}

/// Synthesizer backed by a system TTS command that writes a wav file,
/// `espeak -w <path> <text>` by default.
pub struct CommandSynthesizer {
    command: String,
}

impl CommandSynthesizer {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for CommandSynthesizer {
    async fn synthesize(&self, text: &str, handle: &AudioHandle) -> Result<(), SpeechError> {
        if text.trim().is_empty() {
            return Err(SpeechError::EmptyText);
        }

        debug!("synthesizing {} chars to {:?}", text.len(), handle.path());
        let status = tokio::process::Command::new(&self.command)
            .arg("-w")
            .arg(handle.path())
            .arg(text)
            .status()
            .await
            .map_err(|source| SpeechError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        if !status.success() {
            return Err(SpeechError::Failed {
                command: self.command.clone(),
                status,
            });
        }
        Ok(())
    }
}

/// No-op synthesizer for tests and for running without a TTS binary.
#[cfg_attr(not(test), allow(dead_code))]
pub struct NullSynthesizer;

#[async_trait]
impl SpeechSynthesizer for NullSynthesizer {
    async fn synthesize(&self, text: &str, _handle: &AudioHandle) -> Result<(), SpeechError> {
        if text.trim().is_empty() {
            return Err(SpeechError::EmptyText);
        }
        Ok(())
    }
}
