use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenType};

pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;

    fn name(&self) -> &str;

    fn clone_box(&self) -> Box<dyn Tokenizer>;
}

/// Standard Unicode tokenizer
#[derive(Clone)]
pub struct StandardTokenizer {
    pub lowercase: bool,
    pub max_token_length: usize,
}

impl Default for StandardTokenizer {
    fn default() -> Self {
        StandardTokenizer {
            lowercase: true,
            max_token_length: 255,
        }
    }
}

impl Tokenizer for StandardTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();

        for (offset, word) in text.unicode_word_indices() {
            if word.len() > self.max_token_length {
                continue;
            }
            let token_text = if self.lowercase {
                word.to_lowercase()
            } else {
                word.to_string()
            };
            let token_type = if word.chars().all(|c| c.is_numeric()) {
                TokenType::Number
            } else {
                TokenType::Word
            };

            let mut token = Token::new(token_text, token_type, offset, offset + word.len());
            token.position = tokens.len() as u32;
            tokens.push(token);
        }

        tokens
    }

    fn name(&self) -> &str {
        "standard"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(self.clone())
    }
}
