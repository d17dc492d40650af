use std::collections::HashMap;
use std::sync::OnceLock;

use log::debug;
use parking_lot::RwLock;
use rust_stemmers::Algorithm;

use crate::analysis::filter::TokenFilter;
use crate::analysis::filters::lowercase::LowercaseFilter;
use crate::analysis::filters::punctuation::PunctuationFilter;
use crate::analysis::filters::stemmer::StemmerFilter;
use crate::analysis::filters::stopword::StopWordFilter;
use crate::analysis::language::vietnamese::VietnameseTokenizer;
use crate::analysis::token::Token;
use crate::analysis::tokenizer::{StandardTokenizer, Tokenizer};
use crate::core::config::VietnameseConfig;
use crate::core::error::{Error, ErrorKind, Result};

/// Text analysis pipeline
pub struct Analyzer {
    pub tokenizer: Box<dyn Tokenizer>,
    pub filters: Vec<Box<dyn TokenFilter>>,
    pub name: String,
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("name", &self.name)
            .field("filters", &self.filters.len())
            .finish()
    }
}

impl Analyzer {
    pub fn new(name: String, tokenizer: Box<dyn Tokenizer>) -> Self {
        Analyzer {
            tokenizer,
            filters: Vec::new(),
            name,
        }
    }

    pub fn add_filter(mut self, filter: Box<dyn TokenFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn analyze(&self, text: &str) -> Vec<Token> {
        let mut tokens = self.tokenizer.tokenize(text);

        for filter in &self.filters {
            tokens = filter.filter(tokens);
        }

        tokens
    }

    /// `(text, start, end)` tuples for index build/query analysis.
    pub fn offsets(&self, text: &str) -> Vec<(String, usize, usize)> {
        self.analyze(text)
            .into_iter()
            .map(|token| (token.text, token.start, token.end))
            .collect()
    }

    /// Standard analyzer for English text
    pub fn standard() -> Self {
        Analyzer::new(
            "standard".to_string(),
            Box::new(StandardTokenizer::default()),
        )
        .add_filter(Box::new(LowercaseFilter))
        .add_filter(Box::new(StopWordFilter::english()))
        .add_filter(Box::new(StemmerFilter::new(Algorithm::English)))
    }

    /// Vietnamese analyzer over the dictionary configured in `config`.
    /// Punctuation and stop words never reach the index.
    pub fn vietnamese(config: &VietnameseConfig) -> Result<Self> {
        let tokenizer = VietnameseTokenizer::from_config(config)?;
        Ok(Analyzer::new("vietnamese".to_string(), Box::new(tokenizer))
            .add_filter(Box::new(LowercaseFilter))
            .add_filter(Box::new(PunctuationFilter))
            .add_filter(Box::new(StopWordFilter::vietnamese())))
    }
}

type AnalyzerFactory = Box<dyn Fn() -> Result<Analyzer> + Send + Sync>;

/// Process-wide mapping from analyzer name to a factory function,
/// populated at startup with the built-in analyzers. `create` builds a
/// fresh pipeline each call; factories are free to share heavyweight
/// state (the Vietnamese factory reuses the cached dictionary).
pub struct AnalyzerRegistry {
    factories: RwLock<HashMap<String, AnalyzerFactory>>,
}

impl AnalyzerRegistry {
    pub fn new() -> Self {
        let registry = AnalyzerRegistry {
            factories: RwLock::new(HashMap::new()),
        };
        registry.register_defaults();
        registry
    }

    fn register_defaults(&self) {
        self.register("standard", || Ok(Analyzer::standard()));
        self.register("vietnamese", || {
            Analyzer::vietnamese(&VietnameseConfig::default())
        });
    }

    pub fn register<F>(&self, name: &str, factory: F)
    where
        F: Fn() -> Result<Analyzer> + Send + Sync + 'static,
    {
        debug!("registering analyzer '{}'", name);
        self.factories
            .write()
            .insert(name.to_string(), Box::new(factory));
    }

    pub fn create(&self, name: &str) -> Result<Analyzer> {
        let factories = self.factories.read();
        let factory = factories.get(name).ok_or_else(|| {
            Error::new(
                ErrorKind::NotFound,
                format!("analyzer '{}' not found", name),
            )
        })?;
        factory()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.read().contains_key(name)
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.factories.read().keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for AnalyzerRegistry {
    fn default() -> Self {
        AnalyzerRegistry::new()
    }
}

/// The process-wide registry instance.
pub fn global() -> &'static AnalyzerRegistry {
    static REGISTRY: OnceLock<AnalyzerRegistry> = OnceLock::new();
    REGISTRY.get_or_init(AnalyzerRegistry::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dict::Dictionary;
    use std::sync::Arc;

    #[test]
    fn registry_registers_builtin_analyzers() {
        let registry = AnalyzerRegistry::new();
        assert_eq!(registry.names(), vec!["standard", "vietnamese"]);
        assert!(registry.contains("standard"));

        let analyzer = registry.create("standard").unwrap();
        assert_eq!(analyzer.name, "standard");

        let err = registry.create("klingon").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::NotFound));
    }

    #[test]
    fn custom_factories_build_fresh_pipelines() {
        let registry = AnalyzerRegistry::new();
        let dict = Arc::new(Dictionary::from_terms(["hà nội", "việt nam"], "test").unwrap());

        registry.register("vi_test", move || {
            let tokenizer =
                VietnameseTokenizer::new(Arc::clone(&dict), &VietnameseConfig::default());
            Ok(Analyzer::new("vi_test".to_string(), Box::new(tokenizer))
                .add_filter(Box::new(StopWordFilter::vietnamese())))
        });

        let analyzer = registry.create("vi_test").unwrap();
        let tokens = analyzer.analyze("Việt Nam và Hà Nội");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        // "và" is a stop word
        assert_eq!(texts, vec!["việt nam", "hà nội"]);
    }

    #[test]
    fn standard_pipeline_lowercases_stops_and_stems() {
        let analyzer = Analyzer::standard();
        let tokens = analyzer.analyze("The Runners are running");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["runner", "run"]);
    }

    #[test]
    fn offsets_expose_the_indexing_view() {
        let analyzer = Analyzer::new(
            "plain".to_string(),
            Box::new(StandardTokenizer::default()),
        );
        let offsets = analyzer.offsets("xin chào");
        assert_eq!(
            offsets,
            vec![
                ("xin".to_string(), 0, 3),
                ("chào".to_string(), 4, "xin chào".len())
            ]
        );
    }

    #[test]
    fn global_registry_is_shared() {
        assert!(global().contains("vietnamese"));
        assert!(global().contains("standard"));
    }
}
