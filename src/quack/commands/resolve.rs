use crate::catalog::Catalog;
use crate::commands::{normalize_tag, CmdMessage, CmdResult, QuackPaths};
use crate::config::QuackConfig;
use crate::error::Result;
use crate::policy::BlockPolicy;
use crate::resolver;
use crate::store::PolicyStore;

/// One resolution request as it arrives from the outside.
#[derive(Debug, Clone)]
pub struct ResolveRequest {
    pub query: String,
    /// One-shot default-bang override (the web frontend's `d` parameter).
    /// When it names a valid catalog tag it also becomes the persisted
    /// default.
    pub default_override: Option<String>,
    /// Bypass block checks for exactly this resolution
    pub bypass_block: bool,
}

pub fn run<S: PolicyStore>(
    store: &S,
    paths: &QuackPaths,
    catalog: &Catalog,
    req: &ResolveRequest,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut config = QuackConfig::load(&paths.data_dir);

    let default_tag = match &req.default_override {
        Some(tag) => {
            let tag = normalize_tag(tag);
            if catalog.contains(&tag) {
                if config.default_bang != tag {
                    config.default_bang = tag.clone();
                    config.save(&paths.data_dir)?;
                    result.add_message(CmdMessage::info(format!("Default bang set to !{}", tag)));
                }
            } else {
                result.add_message(CmdMessage::warning(format!(
                    "Unknown bang !{} used as one-shot default",
                    tag
                )));
            }
            tag
        }
        None => config.effective_default(catalog).to_string(),
    };

    let policy = BlockPolicy::from_state(store.load_state());
    let resolution = resolver::resolve(
        catalog,
        &policy,
        &req.query,
        &default_tag,
        req.bypass_block,
    );

    Ok(result.with_resolution(resolution).with_config(config))
}
