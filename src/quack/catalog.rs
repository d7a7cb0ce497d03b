//! The bang catalog: an ordered, read-only collection of [`Bang`] records.
//!
//! The production catalog is embedded at compile time and parsed on first
//! use behind a process-wide singleton, so every caller shares one load
//! and concurrent first uses cannot trigger duplicate parses. Alternative
//! datasets can be loaded with [`Catalog::from_json`] (tests do this).

use crate::error::Result;
use crate::model::Bang;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static BANGS_JSON: &str = include_str!("../../data/bangs.json");

static SHARED: Lazy<Catalog> = Lazy::new(|| {
    Catalog::from_json(BANGS_JSON).expect("embedded bang catalog must be valid JSON")
});

pub struct Catalog {
    bangs: Vec<Bang>,
    // lowercased tag -> position in `bangs`; first record wins on duplicates
    by_tag: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(bangs: Vec<Bang>) -> Self {
        let mut by_tag = HashMap::with_capacity(bangs.len());
        for (index, bang) in bangs.iter().enumerate() {
            by_tag.entry(bang.tag.to_lowercase()).or_insert(index);
        }
        Self { bangs, by_tag }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let bangs: Vec<Bang> = serde_json::from_str(json)?;
        Ok(Self::new(bangs))
    }

    /// The embedded catalog, loaded once for the process lifetime.
    pub fn shared() -> &'static Catalog {
        &SHARED
    }

    /// Case-insensitive exact lookup by tag.
    pub fn get(&self, tag: &str) -> Option<&Bang> {
        self.by_tag
            .get(&tag.to_lowercase())
            .map(|&index| &self.bangs[index])
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.by_tag.contains_key(&tag.to_lowercase())
    }

    /// All records in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Bang> {
        self.bangs.iter()
    }

    pub fn len(&self) -> usize {
        self.bangs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bangs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::from_json(
            r#"[
                {"t":"gh","s":"GitHub","d":"github.com","u":"https://github.com/search?q={{{s}}}","r":20},
                {"t":"GH","s":"Shadowed","d":"example.com","u":"https://example.com/?q={{{s}}}"},
                {"t":"ddg","s":"DuckDuckGo","d":"duckduckgo.com","u":"https://duckduckgo.com/?q={{{s}}}","r":90}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let catalog = sample();
        assert_eq!(catalog.get("GH").unwrap().name, "GitHub");
        assert_eq!(catalog.get("Gh").unwrap().name, "GitHub");
    }

    #[test]
    fn first_record_wins_on_duplicate_tag() {
        let catalog = sample();
        assert_eq!(catalog.get("gh").unwrap().domain, "github.com");
    }

    #[test]
    fn missing_tag_is_none() {
        assert!(sample().get("nope").is_none());
    }

    #[test]
    fn iteration_preserves_catalog_order() {
        let catalog = sample();
        let tags: Vec<&str> = catalog.iter().map(|b| b.tag.as_str()).collect();
        assert_eq!(tags, ["gh", "GH", "ddg"]);
    }

    #[test]
    fn embedded_catalog_loads_and_has_the_fallback() {
        let catalog = Catalog::shared();
        assert!(!catalog.is_empty());
        assert!(catalog.contains("ddg"));
        assert!(catalog.contains("gh"));
    }

    #[test]
    fn embedded_templates_carry_the_placeholder() {
        for bang in Catalog::shared().iter() {
            assert!(
                bang.url_template.contains(crate::model::TEMPLATE_PLACEHOLDER),
                "template for !{} lacks placeholder",
                bang.tag
            );
        }
    }
}
