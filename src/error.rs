use thiserror::Error;

#[derive(Error, Debug)]
pub enum FortuneError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] fortune_common::Error),
}

pub type Result<T> = std::result::Result<T, FortuneError>;
