//! UniFFI export layer: typed bindings for the kana engine.
//!
//! Generated bindings only ever pass strings, so the argument guard in
//! [`crate::boundary`] is not needed here.

mod types;

pub use types::KanaError;

use std::path::Path;

use kana_core::translit::{default_toml, KatakanaTrie};

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[uniffi::export]
fn kana2romaji(input: String) -> String {
    kana_core::kana2romaji(&input)
}

#[uniffi::export]
fn kana2voca(input: String) -> String {
    kana_core::kana2voca(&input)
}

#[uniffi::export]
fn hiragana_to_katakana(input: String) -> String {
    kana_core::unicode::hiragana_to_katakana(&input)
}

/// Install a custom katakana table. Must run before the first conversion.
#[uniffi::export]
fn translit_load_config(path: String) -> Result<(), KanaError> {
    let content = std::fs::read_to_string(&path).map_err(|e| KanaError::Io {
        msg: format!("{path}: {e}"),
    })?;
    KatakanaTrie::init_custom(content).map_err(|e| KanaError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

#[uniffi::export]
fn translit_default_config() -> String {
    default_toml().to_string()
}

#[uniffi::export]
fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}
