use std::collections::BTreeMap;
use std::sync::OnceLock;

use lexime_trie::{DoubleArray, TrieSearch};

use super::config::{parse_katakana_toml, TranslitConfigError};
use super::table::DEFAULT_TOML;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Katakana → Latin table on a double-array trie over UTF-8 keys.
pub struct KatakanaTrie {
    da: DoubleArray<u8>,
    values: Vec<String>,
}

impl KatakanaTrie {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), TranslitConfigError> {
        // Validate eagerly
        parse_katakana_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| TranslitConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    ///
    /// Panics if the table fails validation: a broken table is a deployment
    /// error, not something a single conversion can recover from.
    pub fn global() -> &'static KatakanaTrie {
        static INSTANCE: OnceLock<KatakanaTrie> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            let map = parse_katakana_toml(toml_str).expect("katakana TOML must be valid");
            KatakanaTrie::from_mappings(&map)
        })
    }

    /// Build a standalone trie from TOML, independent of the global instance.
    pub fn from_toml(toml_str: &str) -> Result<KatakanaTrie, TranslitConfigError> {
        let map = parse_katakana_toml(toml_str)?;
        Ok(KatakanaTrie::from_mappings(&map))
    }

    pub fn from_mappings(map: &BTreeMap<String, String>) -> KatakanaTrie {
        // BTreeMap<String, _> iterates in byte order: DoubleArray build needs sorted keys
        let keys: Vec<&[u8]> = map.keys().map(|k| k.as_bytes()).collect();
        let values: Vec<String> = map.values().cloned().collect();
        let da = DoubleArray::<u8>::build(&keys);
        KatakanaTrie { da, values }
    }

    /// Longest key that is a prefix of `text`, as `(key_len_in_bytes, latin)`.
    ///
    /// Keys are whole UTF-8 strings, so the length always ends on a char
    /// boundary of `text`.
    pub fn longest_match(&self, text: &str) -> Option<(usize, &str)> {
        self.da
            .common_prefix_search(text.as_bytes())
            .max_by_key(|m| m.len)
            .map(|m| (m.len, self.values[m.value_id as usize].as_str()))
    }
}
