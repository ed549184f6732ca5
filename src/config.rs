use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;

fn default_interval() -> u64 {
    900
}

fn default_open_token() -> String {
    "abierta".to_string()
}

fn default_link_template() -> String {
    "https://betowa.sena.edu.co/oferta?search={ficha}".to_string()
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Published-sheet CSV export. Overridable via SHEET_CSV_URL; required.
    #[serde(default)]
    pub sheet_csv_url: String,
    #[serde(default = "default_interval")]
    pub check_interval_seconds: u64,
    /// Offer-type value that means "accepting enrollments".
    #[serde(default = "default_open_token")]
    pub open_token: String,
    /// Outbound link per offering; `{ficha}` is replaced by the record number.
    #[serde(default = "default_link_template")]
    pub ficha_link_template: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sheet_csv_url: String::new(),
            check_interval_seconds: default_interval(),
            open_token: default_open_token(),
            ficha_link_template: default_link_template(),
        }
    }
}

pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    Ok(serde_json::from_str(content)?)
}

/// Loads config.json if present (a missing file just means all-defaults),
/// applies the SHEET_CSV_URL override, and rejects a configuration without a
/// feed URL before anything is fetched.
pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let config = match fs::read_to_string(path) {
        Ok(content) => parse_config(&content)?,
        Err(e) if e.kind() == ErrorKind::NotFound => AppConfig::default(),
        Err(e) => return Err(e.into()),
    };
    with_url_override(config, std::env::var("SHEET_CSV_URL").ok())
}

fn with_url_override(
    mut config: AppConfig,
    override_url: Option<String>,
) -> Result<AppConfig, ConfigError> {
    if let Some(url) = override_url {
        if !url.trim().is_empty() {
            config.sheet_csv_url = url;
        }
    }

    if config.sheet_csv_url.trim().is_empty() {
        return Err(ConfigError::MissingSheetUrl);
    }
    Ok(config)
}
