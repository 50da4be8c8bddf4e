use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnnouncerError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("Config parsing error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("HTTP error: {source}")]
    HttpError {
        #[from]
        source: reqwest::Error,
    },

    #[error("Rate log endpoint answered with status {0}")]
    WebhookStatus(u16),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Could not open link: {0}")]
    LinkOpen(String),

    // Catch-all for anyhow errors bubbling up from helpers
    #[error(transparent)]
    AnyhowError(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, AnnouncerError>;
