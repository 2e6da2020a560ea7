use filter_config::ConfigError;
use filter_syntax::ParseError;
use thiserror::Error;
use translator::{FilterError, TranslateError};

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid filter: {0}")]
    Parse(#[from] ParseError),

    #[error("Failed to translate filter: {0}")]
    Translate(#[from] TranslateError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl From<FilterError> for CliError {
    fn from(err: FilterError) -> Self {
        match err {
            FilterError::Parse(err) => CliError::Parse(err),
            FilterError::Translate(err) => CliError::Translate(err),
        }
    }
}
