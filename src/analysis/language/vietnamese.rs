use std::sync::Arc;

use crate::analysis::token::Token;
use crate::analysis::tokenizer::Tokenizer;
use crate::core::config::VietnameseConfig;
use crate::core::error::Result;
use crate::dict::{self, Dictionary};
use crate::segment::{Segmenter, TokenizeOption};

/// Dictionary-backed Vietnamese tokenizer.
///
/// Vietnamese words frequently span several space-delimited syllables
/// ("việt nam", "xã hội"); plain word splitting breaks them apart, so
/// tokenization runs the maximum-matching segmenter against a phrase
/// dictionary.
#[derive(Clone)]
pub struct VietnameseTokenizer {
    segmenter: Segmenter,
    option: TokenizeOption,
    keep_punctuation: bool,
}

impl VietnameseTokenizer {
    pub fn new(dict: Arc<Dictionary>, config: &VietnameseConfig) -> Self {
        VietnameseTokenizer {
            segmenter: Segmenter::new(dict),
            option: config.tokenize_option(),
            keep_punctuation: config.keep_punctuation,
        }
    }

    /// Build a tokenizer from a config alone, loading (or reusing) the
    /// process-wide dictionary at `config.dict_path`.
    pub fn from_config(config: &VietnameseConfig) -> Result<Self> {
        let dictionary = dict::dictionary_for(&config.dict_path)?;
        Ok(VietnameseTokenizer::new(dictionary, config))
    }
}

impl Tokenizer for VietnameseTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        self.segmenter
            .segment(text, self.option, self.keep_punctuation)
    }

    fn name(&self) -> &str {
        "vietnamese"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_through_the_segmenter() {
        let dict = Arc::new(Dictionary::from_terms(["hà nội", "việt nam"], "test").unwrap());
        let tokenizer = VietnameseTokenizer::new(dict, &VietnameseConfig::default());

        let tokens = tokenizer.tokenize("Hà Nội, Việt Nam");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["hà nội", "việt nam"]);
        assert_eq!(tokenizer.name(), "vietnamese");
    }
}
