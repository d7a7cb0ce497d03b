use serde::{Deserialize, Serialize};

/// A single catalog entry binding a bang tag to a target site.
///
/// Serialized field names follow the upstream dataset (`t`, `s`, `d`,
/// `u`, `r`), so the embedded catalog stays byte-compatible with it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bang {
    /// Short identifier, matched case-insensitively (e.g. "gh")
    #[serde(rename = "t")]
    pub tag: String,

    /// Human-readable label, used for search and display
    #[serde(rename = "s")]
    pub name: String,

    /// Root domain without scheme, used for bare redirects
    #[serde(rename = "d")]
    pub domain: String,

    /// Search URL with a `{{{s}}}` placeholder for the encoded query
    #[serde(rename = "u")]
    pub url_template: String,

    /// Popularity hint carried from the upstream dataset; never affects
    /// resolution
    #[serde(rename = "r", default)]
    pub rank: u32,
}

/// Placeholder the catalog templates use for the encoded query.
pub const TEMPLATE_PLACEHOLDER: &str = "{{{s}}}";

impl Bang {
    /// URL of the bang's bare domain, for root redirects.
    /// Empty when the record carries no domain.
    pub fn root_url(&self) -> Option<String> {
        if self.domain.is_empty() {
            None
        } else {
            Some(format!("https://{}", self.domain))
        }
    }
}
