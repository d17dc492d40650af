use std::fmt;

use serde::{Deserialize, Serialize};

/// Token produced by one segmentation pass.
///
/// `start` and `end` are byte offsets into the UTF-8 input with
/// `start <= end`; tokens of one pass are ordered by `start` and do not
/// overlap. `position` is the token's ordinal in the final output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub token_type: TokenType,
    pub start: usize,
    pub end: usize,
    pub position: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenType {
    Word,
    Number,
    Punctuation,
    Url,
    Host,
    Email,
}

impl TokenType {
    /// Wire name used by the host-facing procedures.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Word => "WORD",
            TokenType::Number => "NUMBER",
            TokenType::Punctuation => "PUNCTUATION",
            TokenType::Url => "URL",
            TokenType::Host => "HOST",
            TokenType::Email => "EMAIL",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Token {
    pub fn new(text: String, token_type: TokenType, start: usize, end: usize) -> Self {
        Token {
            text,
            token_type,
            start,
            end,
            position: 0,
        }
    }

    /// Span length in bytes of the original input.
    pub fn span_len(&self) -> usize {
        self.end - self.start
    }
}
