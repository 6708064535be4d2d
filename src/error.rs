//! Error types for configuration and cycles.

/// Invalid option values rejected while building [`crate::config::Config`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("interval must be a positive number of minutes, got {0}")]
    InvalidInterval(u64),

    #[error("history size must be at least 1")]
    EmptyHistory,

    #[error("promo threshold minimum ({min}) exceeds maximum ({max})")]
    PromoBounds { min: u32, max: u32 },

    #[error("invalid language '{0}', expected en, tr or mixed")]
    InvalidLanguage(String),
}

/// Failures that abort a single select-and-emit cycle. Sink failures are not
/// among them; the sinks report and swallow their own errors.
#[derive(Debug, thiserror::Error)]
pub enum CycleError {
    #[error("cycle panicked: {0}")]
    Panicked(String),
}
