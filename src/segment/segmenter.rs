use std::sync::Arc;

use crate::analysis::token::{Token, TokenType};
use crate::core::error::{Error, ErrorKind, Result};
use crate::dict::Dictionary;
use crate::segment::{classifier, pattern};

/// Segmentation mode. `Normal` keeps URL- and host-shaped runs whole;
/// `Host` decomposes standalone hostnames into their labels; `Url`
/// additionally decomposes URLs into scheme/host/path parts. Emails are
/// always emitted whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizeOption {
    Normal,
    Host,
    Url,
}

/// Greedy maximum-matching word segmenter over a shared immutable
/// dictionary. Cheap to clone; safe to use from many threads at once.
#[derive(Debug, Clone)]
pub struct Segmenter {
    dict: Arc<Dictionary>,
}

enum Raw {
    Syllable {
        start: usize,
        end: usize,
    },
    Fixed {
        start: usize,
        end: usize,
        token_type: TokenType,
    },
}

impl Segmenter {
    pub fn new(dict: Arc<Dictionary>) -> Self {
        Segmenter { dict }
    }

    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dict
    }

    /// Segment `text` into ordered, non-overlapping tokens. Token text
    /// is lowercased; offsets are byte offsets into `text`. Empty input
    /// yields an empty vector.
    pub fn segment(
        &self,
        text: &str,
        option: TokenizeOption,
        keep_punctuation: bool,
    ) -> Vec<Token> {
        let raws = scan(text, option);

        let mut tokens = Vec::new();
        let mut idx = 0;
        while idx < raws.len() {
            match raws[idx] {
                Raw::Fixed {
                    start,
                    end,
                    token_type,
                } => {
                    tokens.push(Token::new(
                        text[start..end].to_lowercase(),
                        token_type,
                        start,
                        end,
                    ));
                    idx += 1;
                }
                Raw::Syllable { .. } => {
                    // Consecutive syllables are separated by whitespace
                    // only; they form one run for dictionary matching.
                    let mut spans = Vec::new();
                    while let Some(Raw::Syllable { start, end }) = raws.get(idx) {
                        spans.push((*start, *end));
                        idx += 1;
                    }
                    self.match_run(text, &spans, &mut tokens);
                }
            }
        }

        if !keep_punctuation {
            tokens.retain(|token| token.token_type != TokenType::Punctuation);
        }
        for (position, token) in tokens.iter_mut().enumerate() {
            token.position = position as u32;
        }
        tokens
    }

    /// Segment raw bytes, failing with `ErrorKind::Encoding` when the
    /// input is not valid UTF-8.
    pub fn segment_bytes(
        &self,
        bytes: &[u8],
        option: TokenizeOption,
        keep_punctuation: bool,
    ) -> Result<Vec<Token>> {
        let text = std::str::from_utf8(bytes).map_err(|e| {
            Error::new(
                ErrorKind::Encoding,
                format!("input is not valid UTF-8: {}", e),
            )
        })?;
        Ok(self.segment(text, option, keep_punctuation))
    }

    /// Greedy maximum matching over one syllable run: prefer the
    /// longest dictionary entry at each index, fall back to the single
    /// syllable so unknown text still tokenizes.
    fn match_run(&self, text: &str, spans: &[(usize, usize)], out: &mut Vec<Token>) {
        let syllables: Vec<String> = spans
            .iter()
            .map(|&(start, end)| text[start..end].to_lowercase())
            .collect();
        let refs: Vec<&str> = syllables.iter().map(String::as_str).collect();

        let mut i = 0;
        while i < spans.len() {
            let matched = self.dict.longest_match(&refs[i..]).unwrap_or(1);
            if matched >= 2 {
                let (start, _) = spans[i];
                let (_, end) = spans[i + matched - 1];
                out.push(Token::new(
                    syllables[i..i + matched].join(" "),
                    TokenType::Word,
                    start,
                    end,
                ));
                i += matched;
            } else {
                let (start, end) = spans[i];
                let token_type = classifier::classify(&syllables[i]);
                out.push(Token::new(syllables[i].clone(), token_type, start, end));
                i += 1;
            }
        }
    }
}

fn scan(text: &str, option: TokenizeOption) -> Vec<Raw> {
    let mut raws = Vec::new();
    let mut i = 0;
    while i < text.len() {
        let rest = &text[i..];
        let Some(c) = rest.chars().next() else { break };

        if c.is_whitespace() {
            i += c.len_utf8();
            continue;
        }
        if let Some(len) = pattern::match_email(rest) {
            raws.push(Raw::Fixed {
                start: i,
                end: i + len,
                token_type: TokenType::Email,
            });
            i += len;
            continue;
        }
        if let Some(len) = pattern::match_url(rest) {
            if option == TokenizeOption::Url {
                decompose(text, i, i + len, &mut raws);
            } else {
                raws.push(Raw::Fixed {
                    start: i,
                    end: i + len,
                    token_type: TokenType::Url,
                });
            }
            i += len;
            continue;
        }
        if let Some(len) = pattern::match_host(rest) {
            if option == TokenizeOption::Normal {
                raws.push(Raw::Fixed {
                    start: i,
                    end: i + len,
                    token_type: TokenType::Host,
                });
            } else {
                decompose(text, i, i + len, &mut raws);
            }
            i += len;
            continue;
        }
        if let Some(len) = pattern::match_number(rest) {
            raws.push(Raw::Fixed {
                start: i,
                end: i + len,
                token_type: TokenType::Number,
            });
            i += len;
            continue;
        }
        if c.is_alphanumeric() {
            let len: usize = rest
                .chars()
                .take_while(|ch| ch.is_alphanumeric())
                .map(char::len_utf8)
                .sum();
            raws.push(Raw::Syllable {
                start: i,
                end: i + len,
            });
            i += len;
            continue;
        }
        raws.push(Raw::Fixed {
            start: i,
            end: i + c.len_utf8(),
            token_type: TokenType::Punctuation,
        });
        i += c.len_utf8();
    }
    raws
}

/// Split a URL- or host-shaped span into its alphanumeric parts, each
/// emitted as its own sub-token.
fn decompose(text: &str, start: usize, end: usize, out: &mut Vec<Raw>) {
    let slice = &text[start..end];
    let mut run_start: Option<usize> = None;
    for (offset, c) in slice.char_indices() {
        if c.is_alphanumeric() {
            if run_start.is_none() {
                run_start = Some(offset);
            }
        } else if let Some(run) = run_start.take() {
            push_part(text, start + run, start + offset, out);
        }
    }
    if let Some(run) = run_start {
        push_part(text, start + run, end, out);
    }
}

fn push_part(text: &str, start: usize, end: usize, out: &mut Vec<Raw>) {
    let part = &text[start..end];
    let token_type = if part.chars().all(|c| c.is_numeric()) {
        TokenType::Number
    } else {
        TokenType::Word
    };
    out.push(Raw::Fixed {
        start,
        end,
        token_type,
    });
}
