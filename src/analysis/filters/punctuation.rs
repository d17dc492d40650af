use crate::analysis::filter::TokenFilter;
use crate::analysis::token::{Token, TokenType};

/// Drops punctuation tokens from the stream.
pub struct PunctuationFilter;

impl TokenFilter for PunctuationFilter {
    fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens
            .into_iter()
            .filter(|token| token.token_type != TokenType::Punctuation)
            .collect()
    }

    fn name(&self) -> &str {
        "punctuation"
    }

    fn clone_box(&self) -> Box<dyn TokenFilter> {
        Box::new(PunctuationFilter)
    }
}
