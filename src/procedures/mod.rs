use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::analysis::token::Token;
use crate::core::config::VietnameseConfig;
use crate::core::error::Result;
use crate::dict;
use crate::segment::Segmenter;

/// One row of the streaming `tokenize` operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResult {
    pub token: String,
    #[serde(rename = "type")]
    pub token_type: String,
    pub start_position: i64,
    pub end_position: i64,
}

impl From<Token> for TokenResult {
    fn from(token: Token) -> Self {
        TokenResult {
            token_type: token.token_type.as_str().to_string(),
            start_position: token.start as i64,
            end_position: token.end as i64,
            token: token.text,
        }
    }
}

/// Tokenize Vietnamese text, streaming one `TokenResult` per token.
///
/// `config` is a dynamic map with the keys `dictPath`,
/// `keepPunctuation`, `splitHost` and `splitURL`; missing keys fall
/// back to the defaults and unknown keys are ignored.
pub fn tokenize(
    text: &str,
    config: &HashMap<String, Value>,
) -> Result<impl Iterator<Item = TokenResult>> {
    Ok(segment(text, config)?.into_iter().map(TokenResult::from))
}

/// Extract the token strings of `text` as a list.
pub fn tokens(text: &str, config: &HashMap<String, Value>) -> Result<Vec<String>> {
    Ok(segment(text, config)?
        .into_iter()
        .map(|token| token.text)
        .collect())
}

fn segment(text: &str, config: &HashMap<String, Value>) -> Result<Vec<Token>> {
    if text.is_empty() {
        return Ok(Vec::new());
    }
    let config = VietnameseConfig::from_map(config)?;
    let dictionary = dict::dictionary_for(&config.dict_path)?;
    let segmenter = Segmenter::new(dictionary);
    Ok(segmenter.segment(text, config.tokenize_option(), config.keep_punctuation))
}
