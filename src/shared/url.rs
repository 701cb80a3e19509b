use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlError {
    #[error("url is empty")]
    Empty,
    #[error("`{0}` is not an absolute url")]
    NotAbsolute(String),
    #[error("`{0}` has an invalid scheme")]
    InvalidScheme(String),
    #[error("`{0}` contains whitespace or control characters")]
    IllegalCharacter(String),
}

/// A syntactically valid absolute URL.
///
/// Validation is shape-only: a scheme in RFC 3986 form, a colon, and a
/// non-empty remainder free of whitespace and control characters. No scheme
/// allowlist is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedUrl(String);

impl FeedUrl {
    pub fn parse(raw: &str) -> Result<Self, UrlError> {
        if raw.is_empty() {
            return Err(UrlError::Empty);
        }
        if raw.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(UrlError::IllegalCharacter(raw.to_owned()));
        }
        let (scheme, rest) = raw
            .split_once(':')
            .ok_or_else(|| UrlError::NotAbsolute(raw.to_owned()))?;
        if rest.is_empty() {
            return Err(UrlError::NotAbsolute(raw.to_owned()));
        }
        let mut chars = scheme.chars();
        let valid_scheme = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        if !valid_scheme {
            return Err(UrlError::InvalidScheme(raw.to_owned()));
        }
        Ok(Self(raw.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FeedUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[test]
fn valid_url_test_1() {
    let url = "https://example.com/gbfs/en/station_status.json";
    assert_eq!(FeedUrl::parse(url).unwrap().as_str(), url);
}

#[test]
fn valid_url_test_2() {
    let url = "http://localhost:8080/gbfs.json";
    assert!(FeedUrl::parse(url).is_ok());
}

#[test]
fn valid_url_test_3() {
    // No scheme allowlist, any absolute url passes.
    let url = "ftp+ssh://files.example.com/feed.json";
    assert!(FeedUrl::parse(url).is_ok());
}

#[test]
fn invalid_url_test_1() {
    assert_eq!(FeedUrl::parse(""), Err(UrlError::Empty));
}

#[test]
fn invalid_url_test_2() {
    let url = "/gbfs/en/station_status.json";
    assert!(matches!(
        FeedUrl::parse(url),
        Err(UrlError::NotAbsolute(_))
    ));
}

#[test]
fn invalid_url_test_3() {
    let url = "https://example.com/a b.json";
    assert!(matches!(
        FeedUrl::parse(url),
        Err(UrlError::IllegalCharacter(_))
    ));
}

#[test]
fn invalid_url_test_4() {
    let url = "1https://example.com/feed.json";
    assert!(matches!(
        FeedUrl::parse(url),
        Err(UrlError::InvalidScheme(_))
    ));
}

#[test]
fn invalid_url_test_5() {
    assert!(matches!(
        FeedUrl::parse("https:"),
        Err(UrlError::NotAbsolute(_))
    ));
}
