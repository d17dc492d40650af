use std::collections::HashMap;
use std::path::PathBuf;

use serde_json::Value;

use crate::core::error::{Error, ErrorKind, Result};
use crate::segment::TokenizeOption;

/// Default location of the compiled dictionaries.
pub const DEFAULT_DICT_PATH: &str = "/usr/local/share/tokenizer/dicts";

/// Per-invocation tokenizer configuration.
///
/// Immutable once constructed. `split_url` takes precedence over
/// `split_host` when both are set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VietnameseConfig {
    pub dict_path: PathBuf,
    pub keep_punctuation: bool,
    pub split_host: bool,
    pub split_url: bool,
}

impl Default for VietnameseConfig {
    fn default() -> Self {
        VietnameseConfig {
            dict_path: PathBuf::from(DEFAULT_DICT_PATH),
            keep_punctuation: false,
            split_host: false,
            split_url: false,
        }
    }
}

impl VietnameseConfig {
    pub fn new(dict_path: impl Into<PathBuf>) -> Self {
        VietnameseConfig {
            dict_path: dict_path.into(),
            ..VietnameseConfig::default()
        }
    }

    /// Build a config from a dynamic key/value map.
    ///
    /// Recognized keys: `dictPath` (string), `keepPunctuation`,
    /// `splitHost`, `splitURL` (booleans). Unknown keys are ignored so
    /// callers can pass richer maps; a recognized key holding the wrong
    /// type is rejected here rather than silently defaulted.
    pub fn from_map(map: &HashMap<String, Value>) -> Result<Self> {
        let mut config = VietnameseConfig::default();

        if let Some(value) = map.get("dictPath") {
            match value {
                Value::String(path) => config.dict_path = PathBuf::from(path),
                other => return Err(invalid_key("dictPath", "string", other)),
            }
        }
        config.keep_punctuation = bool_key(map, "keepPunctuation")?
            .unwrap_or(config.keep_punctuation);
        config.split_host = bool_key(map, "splitHost")?.unwrap_or(config.split_host);
        config.split_url = bool_key(map, "splitURL")?.unwrap_or(config.split_url);

        Ok(config)
    }

    /// Mode the segmenter runs in, derived from the split flags.
    pub fn tokenize_option(&self) -> TokenizeOption {
        if self.split_url {
            TokenizeOption::Url
        } else if self.split_host {
            TokenizeOption::Host
        } else {
            TokenizeOption::Normal
        }
    }
}

fn bool_key(map: &HashMap<String, Value>, key: &str) -> Result<Option<bool>> {
    match map.get(key) {
        None => Ok(None),
        Some(Value::Bool(flag)) => Ok(Some(*flag)),
        Some(other) => Err(invalid_key(key, "boolean", other)),
    }
}

fn invalid_key(key: &str, expected: &str, got: &Value) -> Error {
    Error::new(
        ErrorKind::InvalidArgument,
        format!("config key '{}' must be a {}, got {}", key, expected, got),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_match_documented_values() {
        let config = VietnameseConfig::default();
        assert_eq!(config.dict_path, PathBuf::from(DEFAULT_DICT_PATH));
        assert!(!config.keep_punctuation);
        assert!(!config.split_host);
        assert!(!config.split_url);
        assert_eq!(config.tokenize_option(), TokenizeOption::Normal);
    }

    #[test]
    fn from_map_reads_known_keys_and_ignores_unknown() {
        let mut map = HashMap::new();
        map.insert("dictPath".to_string(), json!("/tmp/dicts"));
        map.insert("keepPunctuation".to_string(), json!(true));
        map.insert("somethingElse".to_string(), json!({"nested": 1}));

        let config = VietnameseConfig::from_map(&map).unwrap();
        assert_eq!(config.dict_path, PathBuf::from("/tmp/dicts"));
        assert!(config.keep_punctuation);
        assert!(!config.split_url);
    }

    #[test]
    fn from_map_rejects_wrong_types() {
        let mut map = HashMap::new();
        map.insert("splitURL".to_string(), json!("yes"));
        assert!(VietnameseConfig::from_map(&map).is_err());
    }

    #[test]
    fn split_url_wins_over_split_host() {
        let mut config = VietnameseConfig::default();
        config.split_host = true;
        config.split_url = true;
        assert_eq!(config.tokenize_option(), TokenizeOption::Url);

        config.split_url = false;
        assert_eq!(config.tokenize_option(), TokenizeOption::Host);
    }
}
