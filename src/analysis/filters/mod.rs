pub mod lowercase;
pub mod punctuation;
pub mod stemmer;
pub mod stopword;
