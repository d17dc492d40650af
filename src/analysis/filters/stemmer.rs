use rust_stemmers::{Algorithm, Stemmer};

use crate::analysis::filter::TokenFilter;
use crate::analysis::token::Token;

pub struct StemmerFilter {
    algorithm: Algorithm,
    stemmer: Stemmer,
}

impl StemmerFilter {
    pub fn new(algorithm: Algorithm) -> Self {
        StemmerFilter {
            algorithm,
            stemmer: Stemmer::create(algorithm),
        }
    }
}

impl TokenFilter for StemmerFilter {
    fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens
            .into_iter()
            .map(|mut token| {
                token.text = self.stemmer.stem(&token.text).to_string();
                token
            })
            .collect()
    }

    fn name(&self) -> &str {
        "stemmer"
    }

    fn clone_box(&self) -> Box<dyn TokenFilter> {
        Box::new(StemmerFilter::new(self.algorithm))
    }
}
