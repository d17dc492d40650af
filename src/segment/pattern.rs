use std::sync::OnceLock;

use regex::Regex;

// All patterns are anchored: they match at the current scan position
// only. Boundary checks (no alphanumeric character directly after the
// match) are done in code since the regex crate has no lookahead.

const EMAIL: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}";
const URL: &str = r"^(?:[A-Za-z][A-Za-z0-9+.-]*://|www\.)\S+";
const HOST: &str = r"^(?:[A-Za-z0-9][A-Za-z0-9-]*\.)+[A-Za-z]{2,}";
const NUMBER: &str = r"^\d+(?:[.,]\d+)*";

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL).expect("valid email pattern"))
}

fn url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(URL).expect("valid url pattern"))
}

fn host_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(HOST).expect("valid host pattern"))
}

fn number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(NUMBER).expect("valid number pattern"))
}

/// Byte length of an email-shaped run starting at the beginning of
/// `text`, if any.
pub fn match_email(text: &str) -> Option<usize> {
    let m = email_re().find(text)?;
    at_boundary(text, m.end()).then_some(m.end())
}

/// Byte length of a URL-shaped run (`scheme://...` or `www.`-prefixed)
/// starting at the beginning of `text`. Trailing punctuation is not
/// part of the URL.
pub fn match_url(text: &str) -> Option<usize> {
    let m = url_re().find(text)?;
    let mut end = m.end();
    while end > 0 {
        let last = text[..end].chars().next_back()?;
        if matches!(last, '.' | ',' | ';' | ':' | '!' | '?' | ')' | '(' | '"' | '\'') {
            end -= last.len_utf8();
        } else {
            break;
        }
    }
    (end > 0).then_some(end)
}

/// Byte length of a hostname-shaped run (dot-separated labels with an
/// alphabetic TLD) starting at the beginning of `text`.
pub fn match_host(text: &str) -> Option<usize> {
    let m = host_re().find(text)?;
    at_boundary(text, m.end()).then_some(m.end())
}

/// Byte length of a numeric run (digits with `.`/`,` group separators)
/// starting at the beginning of `text`.
pub fn match_number(text: &str) -> Option<usize> {
    let m = number_re().find(text)?;
    at_boundary(text, m.end()).then_some(m.end())
}

pub fn is_email(text: &str) -> bool {
    match_email(text) == Some(text.len())
}

pub fn is_url(text: &str) -> bool {
    match_url(text) == Some(text.len())
}

pub fn is_host(text: &str) -> bool {
    match_host(text) == Some(text.len())
}

pub fn is_number(text: &str) -> bool {
    match_number(text) == Some(text.len())
}

fn at_boundary(text: &str, end: usize) -> bool {
    text[end..]
        .chars()
        .next()
        .map_or(true, |c| !c.is_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_runs_stop_at_boundaries() {
        assert_eq!(match_email("test@example.com, rest"), Some(16));
        assert_eq!(match_email("a.b+c@mail.co.uk"), Some(16));
        assert_eq!(match_email("not an email"), None);
        // no boundary: digits continue right after the TLD
        assert_eq!(match_email("x@y.com123"), None);
    }

    #[test]
    fn url_runs_trim_trailing_punctuation() {
        assert_eq!(
            match_url("https://vnexpress.net/tin-tuc."),
            Some("https://vnexpress.net/tin-tuc".len())
        );
        assert_eq!(match_url("www.example.com,"), Some("www.example.com".len()));
        assert_eq!(match_url("example.com"), None);
    }

    #[test]
    fn host_requires_alphabetic_tld() {
        assert_eq!(match_host("vnexpress.net nhé"), Some("vnexpress.net".len()));
        assert_eq!(match_host("1.2.3"), None);
        assert_eq!(match_host("việt.nam"), None);
    }

    #[test]
    fn numbers_allow_group_separators() {
        assert_eq!(match_number("0123456789"), Some(10));
        assert_eq!(match_number("1.234,56 đồng"), Some(8));
        assert_eq!(match_number("12giờ"), None);
    }

    #[test]
    fn full_match_predicates() {
        assert!(is_email("test@example.com"));
        assert!(is_url("https://example.com/a"));
        assert!(is_host("example.com"));
        assert!(is_number("42"));
        assert!(!is_host("https://example.com"));
    }
}
