use crate::error::ConfigError;
use filter_syntax::ParseOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;
use translator::{Translator, Whitelist};

/// Translator configuration, usually read from a JSON file:
///
/// ```json
/// { "whitelist": ["name", "age"], "max_depth": 32 }
/// ```
///
/// Every key is optional. A missing whitelist leaves fields unrestricted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    pub whitelist: Option<Vec<String>>,
    pub max_depth: Option<usize>,
}

impl FilterConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_json(&text)?;
        info!("Loaded filter config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: FilterConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == Some(0) {
            return Err(ConfigError::InvalidMaxDepth);
        }
        Ok(())
    }

    /// Replaces the configured whitelist when `fields` is given.
    pub fn with_whitelist_override(mut self, fields: Option<Vec<String>>) -> Self {
        if let Some(fields) = fields {
            info!("Whitelist overridden with {} field(s)", fields.len());
            self.whitelist = Some(fields);
        }
        self
    }

    pub fn whitelist(&self) -> Whitelist {
        match &self.whitelist {
            Some(fields) => Whitelist::from_fields(fields.iter().cloned()),
            None => Whitelist::unrestricted(),
        }
    }

    pub fn parse_options(&self) -> ParseOptions {
        match self.max_depth {
            Some(max_depth) => ParseOptions { max_depth },
            None => ParseOptions::default(),
        }
    }

    pub fn translator(&self) -> Translator {
        Translator::new(self.whitelist())
    }
}
