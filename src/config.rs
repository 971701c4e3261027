use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

use crate::dictionary::{Language, SearchStrategy};
use crate::{Error, Result};

/// How check results are written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::Config(format!("Invalid OUTPUT_FORMAT: {other}"))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub language: Option<Language>,
    pub dictionary_dir: PathBuf,
    pub strategy: SearchStrategy,
    pub output_format: OutputFormat,
}

impl Config {
    /// Build the configuration from a variable lookup, e.g. `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let language = lookup("SPELLCHECK_LANGUAGE")
            .filter(|value| !value.trim().is_empty())
            .map(|value| {
                value
                    .parse::<Language>()
                    .map_err(|_| Error::Config(format!("Invalid SPELLCHECK_LANGUAGE: {value}")))
            })
            .transpose()?;

        let dictionary_dir = lookup("DICTIONARY_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./data"));

        let strategy = lookup("SEARCH_STRATEGY")
            .unwrap_or_else(|| "membership".to_string())
            .parse::<SearchStrategy>()
            .map_err(|e| Error::Config(format!("Invalid SEARCH_STRATEGY: {e}")))?;

        let output_format = lookup("OUTPUT_FORMAT")
            .unwrap_or_else(|| "text".to_string())
            .parse::<OutputFormat>()?;

        Ok(Self {
            language,
            dictionary_dir,
            strategy,
            output_format,
        })
    }
}

pub fn load_config() -> miette::Result<Config> {
    info!("Loading configuration");

    // Load environment variables
    dotenv().ok();

    let config = Config::from_lookup(|key| env::var(key).ok())?;
    Ok(config)
}
