// Filter configuration: the path parameter delimiter

pub mod yml_settings;

use std::path::Path;

use tracing::debug;

use crate::{error::Error, validation};
use yml_settings::YmlSettings;

pub const DEFAULT_PARAM_SEP: &str = ":";

/// Configuration handed to every filter call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    pub param_sep: String,
}

impl FilterConfig {
    /// Build a config with a custom delimiter, rejecting delimiters that clash with URL syntax
    pub fn with_param_sep(param_sep: &str) -> Result<Self, Error> {
        validation::validate_delimiter(param_sep)?;
        Ok(Self {
            param_sep: param_sep.to_string(),
        })
    }

    pub fn from_yaml_str(yml: &str) -> Result<Self, Error> {
        let settings: YmlSettings = serde_yaml::from_str(yml)?;
        match settings.param_sep() {
            Some(sep) => Self::with_param_sep(sep),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let yml = std::fs::read_to_string(path)
            .map_err(|e| Error::Io(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_yaml_str(&yml)?;
        debug!(path = %path.display(), param_sep = %config.param_sep, "loaded filter config");
        Ok(config)
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            param_sep: DEFAULT_PARAM_SEP.to_string(),
        }
    }
}
