use anyhow::Result;
use common::NumberFormat;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://ratecalc.db?mode=rwc";
pub const DEFAULT_CONFIG_FILE: &str = "ratecalc";
pub const ENV_PREFIX: &str = "RATECALC";

/// Application configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AppConfig {
    /// SeaORM connection string
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// Number display settings
    #[serde(default)]
    pub format: FormatConfig,
}

/// Number display settings. Unset separators come from the locale preset, or
/// from the fixed fallback scheme when no known locale is configured.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct FormatConfig {
    pub locale: Option<String>,
    pub decimal_places: Option<usize>,
    pub thousands_separator: Option<String>,
    pub decimal_separator: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            format: FormatConfig::default(),
        }
    }
}

fn default_database_url() -> String {
    DEFAULT_DATABASE_URL.to_string()
}

impl FormatConfig {
    /// Resolves the settings into the formatter handed to the renderers.
    pub fn number_format(&self) -> NumberFormat {
        let mut format = NumberFormat::for_locale_or_fallback(self.locale.as_deref());
        if let Some(decimal_places) = self.decimal_places {
            format.decimal_places = decimal_places;
        }
        if let Some(separator) = &self.thousands_separator {
            format.thousands_separator = separator.clone();
        }
        if let Some(separator) = &self.decimal_separator {
            format.decimal_separator = separator.clone();
        }
        format
    }
}

/// Loads configuration from an optional file and `RATECALC__*` environment
/// variables, in that order of precedence (later wins).
///
/// Without `config_path`, `ratecalc.toml` in the working directory is read if present.
pub fn load_config(config_path: Option<&Path>) -> Result<AppConfig> {
    let file = match config_path {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            config::File::from(path).required(true)
        }
        None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let settings = config::Config::builder()
        .add_source(file)
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    let cfg: AppConfig = settings.try_deserialize()?;
    info!("Configuration loaded");
    debug!("Configuration: {:?}", cfg);
    Ok(cfg)
}
