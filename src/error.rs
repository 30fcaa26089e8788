use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Writing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown preset '{0}'")]
    UnknownPreset(String),

    #[error("Unknown input '{0}'")]
    UnknownInput(String),

    #[error("Invalid number for '{key}': '{raw}'")]
    InvalidNumber { key: String, raw: String },

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type CalcResult<T> = Result<T, CalcError>;
