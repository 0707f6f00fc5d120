//! Walled-garden address grammar: validation and decomposition.
//!
//! User-typed addresses follow `[scheme://]label(.label)+.tld[/path]*` where
//! the top-level label comes from a fixed allow list. Anything outside the
//! grammar fails closed.

use gate_core::GateError;
use gate_core::GateResult;

/// Top-level labels accepted by the address grammar.
const ALLOWED_TLDS: &[&str] = &["co.uk", "com", "org"];

/// A validated address decomposed into its hosted `domain` and `subpath`.
///
/// Immutable once parsed. The subpath keeps everything after the first slash
/// verbatim, including further slashes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    domain: String,
    subpath: String,
}

impl Address {
    /// Validates `input` against the grammar, then decomposes it.
    pub fn from_input(input: &str) -> GateResult<Self> {
        if !validate(input) {
            return Err(GateError::new(
                "address.invalid_format",
                format!("`{input}` does not match the hosted-domain grammar"),
            ));
        }

        Ok(Self::parse(input))
    }

    /// Decomposes `input` without re-validating; callers validate first.
    ///
    /// Strips a leading `http://`/`https://`, trims surrounding slashes and
    /// splits on the first remaining slash. Pure, no side effects.
    pub fn parse(input: &str) -> Self {
        let stripped = strip_scheme(input).trim_matches('/');

        match stripped.split_once('/') {
            Some((domain, subpath)) => Self {
                domain: domain.to_owned(),
                subpath: subpath.to_owned(),
            },
            None => Self {
                domain: stripped.to_owned(),
                subpath: String::new(),
            },
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn subpath(&self) -> &str {
        &self.subpath
    }

    pub fn has_subpath(&self) -> bool {
        !self.subpath.is_empty()
    }
}

/// Returns true when `input` matches the full address grammar.
pub fn validate(input: &str) -> bool {
    let stripped = strip_scheme(input);
    if stripped.is_empty() {
        return false;
    }

    let (host, path) = match stripped.split_once('/') {
        Some((host, rest)) => (host, Some(rest)),
        None => (stripped, None),
    };

    if !host_matches_grammar(host) {
        return false;
    }

    match path {
        None => true,
        Some(rest) => rest.bytes().all(is_path_byte),
    }
}

/// Removes a leading `http://` or `https://`; only those schemes are
/// recognized, anything else stays in place and fails host matching.
pub fn strip_scheme(input: &str) -> &str {
    input
        .strip_prefix("http://")
        .or_else(|| input.strip_prefix("https://"))
        .unwrap_or(input)
}

fn host_matches_grammar(host: &str) -> bool {
    let Some(labels) = split_off_allowed_tld(host) else {
        return false;
    };

    // The grammar needs at least one label before the top-level label.
    if labels.is_empty() {
        return false;
    }

    labels
        .split('.')
        .all(|label| !label.is_empty() && label.bytes().all(is_label_byte))
}

fn split_off_allowed_tld(host: &str) -> Option<&str> {
    for tld in ALLOWED_TLDS {
        if let Some(prefix) = host.strip_suffix(tld)
            && let Some(labels) = prefix.strip_suffix('.')
        {
            return Some(labels);
        }
    }

    None
}

fn is_label_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'-'
}

fn is_path_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'/')
}

#[cfg(test)]
mod tests {
    use super::Address;
    use super::validate;

    #[test]
    fn accepts_bare_domains_with_allowed_tlds() {
        assert!(validate("example.com"));
        assert!(validate("news.co.uk"));
        assert!(validate("my-site.org"));
        assert!(validate("sub.example.com"));
    }

    #[test]
    fn accepts_scheme_prefixed_input() {
        assert!(validate("http://example.com"));
        assert!(validate("https://example.com/foo/bar"));
    }

    #[test]
    fn accepts_paths_with_allowed_characters() {
        assert!(validate("example.com/foo"));
        assert!(validate("example.com/foo/bar_baz-2"));
        assert!(validate("example.com/"));
    }

    #[test]
    fn rejects_empty_and_whitespace_input() {
        assert!(!validate(""));
        assert!(!validate("not a domain"));
        assert!(!validate("   "));
    }

    #[test]
    fn rejects_unlisted_tlds() {
        assert!(!validate("example.net"));
        assert!(!validate("example.io"));
        assert!(!validate("example"));
    }

    #[test]
    fn rejects_missing_host_label() {
        assert!(!validate(".com"));
        assert!(!validate("https://.org"));
        assert!(!validate("..com"));
    }

    #[test]
    fn rejects_disallowed_path_characters() {
        assert!(!validate("example.com/foo?query=1"));
        assert!(!validate("example.com/foo bar"));
        assert!(!validate("example.com/foo.html"));
    }

    #[test]
    fn rejects_unknown_schemes() {
        assert!(!validate("ftp://example.com"));
        assert!(!validate("javascript://example.com"));
    }

    #[test]
    fn parse_splits_domain_from_subpath() {
        let address = Address::parse("example.com/foo/bar");
        assert_eq!(address.domain(), "example.com");
        assert_eq!(address.subpath(), "foo/bar");
        assert!(address.has_subpath());
    }

    #[test]
    fn parse_without_path_leaves_subpath_empty() {
        let address = Address::parse("https://example.com");
        assert_eq!(address.domain(), "example.com");
        assert_eq!(address.subpath(), "");
        assert!(!address.has_subpath());
    }

    #[test]
    fn parse_only_splits_on_the_first_slash() {
        let address = Address::parse("example.com/a/b/c");
        assert_eq!(address.subpath(), "a/b/c");
    }

    #[test]
    fn parse_trims_surrounding_slashes() {
        let address = Address::parse("example.com/foo/");
        assert_eq!(address.domain(), "example.com");
        assert_eq!(address.subpath(), "foo");
    }

    #[test]
    fn from_input_round_trips_domain_and_subpath_structure() {
        for input in ["example.com", "example.com/foo", "shop.co.uk/items/42"] {
            let address = match Address::from_input(input) {
                Ok(address) => address,
                Err(error) => panic!("{error}"),
            };

            let rejoined = if address.has_subpath() {
                format!("{}/{}", address.domain(), address.subpath())
            } else {
                address.domain().to_owned()
            };
            assert_eq!(rejoined, input);
        }
    }

    #[test]
    fn from_input_rejects_invalid_addresses_with_code() {
        let error = match Address::from_input("example.net") {
            Ok(_) => panic!("example.net must not validate"),
            Err(error) => error,
        };
        assert_eq!(error.code, "address.invalid_format");
    }
}
