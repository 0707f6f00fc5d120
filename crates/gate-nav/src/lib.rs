//! Navigation interception and rewriting onto the static host.
//!
//! Every outgoing navigation is classified exactly once: it either already
//! lies under the static host (allowed through), looks like a hosted domain
//! and is rewritten, or is blocked. The engine is never left pointing at an
//! arbitrary external origin.

use gate_address::Address;
use gate_core::GateError;
use gate_core::GateResult;
use url::Url;

/// Terminal decision for a single observed navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    /// The target is already under the static host; load it unmodified.
    Allow,
    /// Cancel the navigation and load `target` instead, showing
    /// `virtual_address` in the address bar.
    Redirect {
        target: String,
        virtual_address: String,
    },
    /// Cancel the navigation with no replacement load.
    Block,
}

/// Concrete resource location derived from a parsed address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub target: String,
    pub virtual_address: String,
}

/// Outcome of an address-bar submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// A literal start token; load the fixed start page.
    StartPage,
    /// A valid hosted address; load the rewritten target.
    Load {
        target: String,
        virtual_address: String,
        domain: String,
    },
    /// Input failed grammar validation; show an error document, touch nothing.
    Invalid,
}

/// Navigation policy anchored to one static-hosting origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gateway {
    host: String,
    start_page: String,
}

impl Gateway {
    /// Builds a gateway for `host_base`, which must be an absolute http(s)
    /// URL. A missing trailing slash is added so prefix checks stay exact.
    pub fn new(host_base: &str) -> GateResult<Self> {
        let parsed = Url::parse(host_base).map_err(|error| {
            GateError::new(
                "nav.host.invalid",
                format!("failed to parse host base `{host_base}`: {error}"),
            )
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(GateError::new(
                "nav.host.scheme_unsupported",
                format!("host base scheme `{}` is not http(s)", parsed.scheme()),
            ));
        }

        if parsed.host_str().is_none() {
            return Err(GateError::new(
                "nav.host.missing",
                "host base has no host component",
            ));
        }

        let mut host = host_base.to_owned();
        if !host.ends_with('/') {
            host.push('/');
        }

        let start_page = format!("{host}start/index.html");
        Ok(Self { host, start_page })
    }

    /// The static-host prefix every real load must live under.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The fixed start page, `{host}start/index.html`.
    pub fn start_page(&self) -> &str {
        &self.start_page
    }

    /// True when `url` already lies under the static host.
    pub fn is_internal(&self, url: &str) -> bool {
        url.starts_with(self.host.as_str())
    }

    /// Classifies one outgoing navigation target. Terminal per event; an
    /// already-rewritten target passes through unmodified rather than being
    /// rewritten again.
    pub fn decide(&self, target: &str) -> NavigationDecision {
        if self.is_internal(target) {
            return NavigationDecision::Allow;
        }

        let Some(remainder) = scheme_remainder(target) else {
            return NavigationDecision::Block;
        };

        if !gate_address::validate(remainder) {
            return NavigationDecision::Block;
        }

        let rewrite = self.rewrite(&Address::parse(remainder));
        NavigationDecision::Redirect {
            target: rewrite.target,
            virtual_address: rewrite.virtual_address,
        }
    }

    /// Maps a parsed address onto the static host.
    pub fn rewrite(&self, address: &Address) -> Rewrite {
        if address.has_subpath() {
            Rewrite {
                target: format!(
                    "{}{}/{}.html",
                    self.host,
                    address.domain(),
                    address.subpath()
                ),
                virtual_address: format!("{}/{}", address.domain(), address.subpath()),
            }
        } else {
            Rewrite {
                target: format!("{}{}/index.html", self.host, address.domain()),
                virtual_address: address.domain().to_owned(),
            }
        }
    }

    /// Derives the user-facing virtual address from a true loaded location:
    /// host prefix stripped, the `.html` suffix stripped, surrounding slashes
    /// trimmed. Locations outside the host have no virtual address.
    pub fn virtual_address_for(&self, true_url: &str) -> Option<String> {
        let stripped = true_url.strip_prefix(self.host.as_str())?;
        let stripped = stripped.strip_suffix(".html").unwrap_or(stripped);
        Some(stripped.trim_matches('/').to_owned())
    }

    /// Resolves address-bar input to a load action.
    pub fn resolve_submission(&self, input: &str) -> Submission {
        let trimmed = input.trim();
        if is_start_token(trimmed) {
            return Submission::StartPage;
        }

        match Address::from_input(trimmed) {
            Ok(address) => {
                let rewrite = self.rewrite(&address);
                Submission::Load {
                    target: rewrite.target,
                    virtual_address: rewrite.virtual_address,
                    domain: address.domain().to_owned(),
                }
            }
            Err(_) => Submission::Invalid,
        }
    }
}

/// Literal tokens that load the start page instead of being rewritten.
pub fn is_start_token(input: &str) -> bool {
    let trimmed = input.trim();
    trimmed.eq_ignore_ascii_case("start") || trimmed.eq_ignore_ascii_case("websites/start")
}

fn scheme_remainder(target: &str) -> Option<&str> {
    target
        .strip_prefix("http://")
        .or_else(|| target.strip_prefix("https://"))
}
