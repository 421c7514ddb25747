use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadinessError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("store parse error: {0}")]
    StoreParse(String),

    #[error("answers parse error: {0}")]
    AnswersParse(String),

    #[error("invalid answer override: {0} (expected KEY=VALUE)")]
    InvalidOverride(String),

    #[error("invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("logging setup failed: {0}")]
    Logging(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("toml write error: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReadinessError>;
