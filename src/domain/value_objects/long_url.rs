//! Long URL value object.
//!
//! A [`LongUrl`] can only be obtained through validation, so any instance
//! reaching the repository is known to be an absolute `http`/`https` URL with
//! a well-formed host and at most [`MAX_URL_LENGTH`] characters.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use url::{Host, ParseError, Url};

use crate::domain::errors::UrlError;

/// Maximum accepted URL length, in characters.
pub const MAX_URL_LENGTH: usize = 2048;

/// Maximum length of a DNS hostname.
const MAX_HOSTNAME_LENGTH: usize = 253;

/// Dot-separated DNS labels ending in an alphabetic or punycode TLD.
///
/// Applied to the host after `url` has lowercased and IDNA-encoded it.
static HOSTNAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+(?:[a-z]{2,63}|xn--[a-z0-9-]{1,59})$")
        .expect("hostname regex is valid")
});

/// An original URL accepted for shortening.
///
/// The input string is kept verbatim: trailing slashes, query parameter order
/// and letter case are preserved, so two URLs that differ only in formatting
/// are distinct values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LongUrl(String);

impl LongUrl {
    /// Validates `value` and wraps it.
    ///
    /// # Errors
    ///
    /// - [`UrlError::EmptyUrl`] if the input is empty or whitespace-only
    /// - [`UrlError::UrlTooLong`] if it exceeds [`MAX_URL_LENGTH`] characters
    /// - [`UrlError::InvalidUrl`] if the scheme is missing or not `http`/`https`,
    ///   or the host is empty or malformed
    pub fn new(value: impl Into<String>) -> Result<Self, UrlError> {
        let value = value.into();
        validate(&value)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for LongUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LongUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LongUrl {
    type Error = UrlError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for LongUrl {
    type Error = UrlError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

fn validate(value: &str) -> Result<(), UrlError> {
    if value.trim().is_empty() {
        return Err(UrlError::EmptyUrl);
    }

    let length = value.chars().count();
    if length > MAX_URL_LENGTH {
        return Err(UrlError::UrlTooLong {
            length,
            max_length: MAX_URL_LENGTH,
        });
    }

    let parsed = Url::parse(value).map_err(|e| match e {
        ParseError::RelativeUrlWithoutBase => UrlError::invalid(
            value,
            "URL must include a scheme (e.g., http:// or https://)",
        ),
        ParseError::EmptyHost => {
            UrlError::invalid(value, "URL must include a domain (e.g., example.com)")
        }
        other => UrlError::invalid(value, other.to_string()),
    })?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(UrlError::invalid(
                value,
                format!("Unsupported scheme '{other}'. Only http and https are allowed"),
            ));
        }
    }

    if !has_authority(value, parsed.scheme().len()) {
        return Err(UrlError::invalid(
            value,
            "URL must include a domain (e.g., example.com)",
        ));
    }

    match parsed.host() {
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => Ok(()),
        Some(Host::Domain(domain)) if is_valid_hostname(domain) => Ok(()),
        Some(Host::Domain(domain)) => Err(UrlError::invalid(
            value,
            format!("Invalid host '{domain}'"),
        )),
        None => Err(UrlError::invalid(
            value,
            "URL must include a domain (e.g., example.com)",
        )),
    }
}

/// Checks that `scheme:` is followed by `//` and a non-empty authority.
///
/// `Url::parse` fills in a host for `http:example.com` and similar forms, so
/// the raw input is inspected instead.
fn has_authority(value: &str, scheme_len: usize) -> bool {
    let trimmed = value.trim_matches(|c: char| c <= ' ');
    let Some(rest) = trimmed
        .get(scheme_len..)
        .and_then(|rest| rest.strip_prefix("://"))
    else {
        return false;
    };

    let end = rest.find(['/', '\\', '?', '#']).unwrap_or(rest.len());
    !rest[..end].is_empty()
}

fn is_valid_hostname(domain: &str) -> bool {
    let domain = domain.strip_suffix('.').unwrap_or(domain);

    if domain.is_empty() || domain.len() > MAX_HOSTNAME_LENGTH {
        return false;
    }

    domain == "localhost" || HOSTNAME_REGEX.is_match(domain)
}
