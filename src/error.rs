use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuireError {
    #[error("unknown trim size '{key}' (known: {known})")]
    UnknownTrim { key: String, known: String },

    #[error("invalid margin: {0}")]
    InvalidMargin(String),

    #[error("unsupported manuscript format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid config: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

pub type Result<T> = std::result::Result<T, QuireError>;
