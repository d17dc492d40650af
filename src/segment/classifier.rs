use crate::analysis::token::TokenType;
use crate::segment::pattern;

/// Classify a matched span. Pure function of the span text; the
/// patterns are tried from most to least specific.
pub fn classify(span: &str) -> TokenType {
    if pattern::is_email(span) {
        return TokenType::Email;
    }
    if pattern::is_url(span) {
        return TokenType::Url;
    }
    if pattern::is_host(span) {
        return TokenType::Host;
    }
    if pattern::is_number(span) {
        return TokenType::Number;
    }

    let mut chars = span.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_alphanumeric() => TokenType::Punctuation,
        _ => TokenType::Word,
    }
}
