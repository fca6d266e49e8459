pub mod images;
pub mod search;
pub mod weather;

use thiserror::Error;

/// Failure modes shared by the outbound provider clients. These never leave
/// a provider module: each formatter converts them into user-presentable
/// text before returning.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Transport succeeded but the provider answered with an error status.
    #[error("{0}")]
    Provider(String),
}
