//! The resolution engine: raw query → destination URL, blocked result,
//! or one of the terminal non-redirect outcomes.
//!
//! `resolve` is a pure function of the catalog, the block policy and its
//! arguments. All failure paths are result variants; nothing here
//! returns an error or panics.

use crate::catalog::Catalog;
use crate::model::{Bang, TEMPLATE_PLACEHOLDER};
use crate::parser::ParsedQuery;
use crate::policy::BlockPolicy;

/// Which kind of redirect a block intercepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectKind {
    Root,
    Search,
}

/// Outcome of one resolution call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Go here.
    Redirect { url: String },
    /// A block intercepted the redirect. `url` is the destination the
    /// redirect would have used, when one was computable; callers should
    /// disable their override action when it is absent.
    Blocked {
        tag: String,
        url: Option<String>,
        kind: RedirectKind,
    },
    /// Empty input; the caller renders its landing surface instead.
    NoQuery,
    /// No usable bang (unknown token and unusable default), or the
    /// selected record cannot serve the requested redirect kind.
    Unresolvable,
}

pub fn resolve(
    catalog: &Catalog,
    policy: &BlockPolicy,
    raw_query: &str,
    default_tag: &str,
    override_block: bool,
) -> Resolution {
    let raw_query = raw_query.trim();
    if raw_query.is_empty() {
        return Resolution::NoQuery;
    }

    let parsed = ParsedQuery::parse(raw_query);

    let bang = parsed
        .bang
        .as_deref()
        .and_then(|tag| catalog.get(tag))
        .or_else(|| catalog.get(default_tag));
    let Some(bang) = bang else {
        return Resolution::Unresolvable;
    };

    if parsed.is_root_redirect() {
        root_redirect(policy, bang, override_block)
    } else {
        search_redirect(policy, bang, &parsed.terms, override_block)
    }
}

fn root_redirect(policy: &BlockPolicy, bang: &Bang, override_block: bool) -> Resolution {
    let Some(url) = bang.root_url() else {
        return Resolution::Unresolvable;
    };
    if policy.mode_for(&bang.tag).blocks_root() && !override_block {
        return Resolution::Blocked {
            tag: bang.tag.to_lowercase(),
            url: Some(url),
            kind: RedirectKind::Root,
        };
    }
    Resolution::Redirect { url }
}

fn search_redirect(
    policy: &BlockPolicy,
    bang: &Bang,
    terms: &str,
    override_block: bool,
) -> Resolution {
    if !bang.url_template.contains(TEMPLATE_PLACEHOLDER) {
        return Resolution::Unresolvable;
    }
    let url = bang
        .url_template
        .replace(TEMPLATE_PLACEHOLDER, &encode_terms(terms));
    if policy.mode_for(&bang.tag).blocks_search() && !override_block {
        return Resolution::Blocked {
            tag: bang.tag.to_lowercase(),
            url: Some(url),
            kind: RedirectKind::Search,
        };
    }
    Resolution::Redirect { url }
}

/// URI-component encoding of the residual text, with encoded slashes
/// restored so path-like queries (`!gh owner/repo`) stay readable at the
/// destination.
fn encode_terms(terms: &str) -> String {
    urlencoding::encode(terms).replace("%2F", "/")
}
