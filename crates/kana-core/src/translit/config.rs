use std::collections::BTreeMap;

use serde::Deserialize;

use crate::unicode::is_katakana_text;

#[derive(Deserialize)]
struct KatakanaConfig {
    mappings: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslitConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("non-katakana key: {0}")]
    NonKatakanaKey(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("katakana table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a sorted `BTreeMap<katakana, latin>`.
pub fn parse_katakana_toml(
    toml_str: &str,
) -> Result<BTreeMap<String, String>, TranslitConfigError> {
    let config: KatakanaConfig =
        toml::from_str(toml_str).map_err(|e| TranslitConfigError::Parse(e.to_string()))?;

    if config.mappings.is_empty() {
        return Err(TranslitConfigError::Empty);
    }

    for (key, value) in &config.mappings {
        if !is_katakana_text(key) {
            return Err(TranslitConfigError::NonKatakanaKey(key.clone()));
        }
        if value.is_empty() {
            return Err(TranslitConfigError::EmptyValue(key.clone()));
        }
    }

    Ok(config.mappings)
}
