use crate::catalog::Catalog;
use crate::commands::{normalize_tag, CmdMessage, CmdResult};
use crate::error::{QuackError, Result};
use crate::policy::{BlockMode, BlockPolicy};
use crate::store::PolicyStore;

#[derive(Debug, Clone)]
pub enum BlockAction {
    /// Set a tag to an explicit mode. Tags must exist in the catalog.
    Set { tag: String, mode: BlockMode },
    /// Advance a tag through the none → both → root → search cycle
    Cycle { tag: String },
    /// Remove all blocks from a tag. Works for tags the catalog no
    /// longer carries, so stale entries can always be cleaned up.
    Clear { tag: String },
    /// List all blocked tags with their modes
    List,
}

pub fn run<S: PolicyStore>(store: &mut S, catalog: &Catalog, action: BlockAction) -> Result<CmdResult> {
    match action {
        BlockAction::Set { tag, mode } => {
            let tag = require_known(catalog, &tag)?;
            apply(store, &tag, mode)
        }
        BlockAction::Cycle { tag } => {
            let tag = require_known(catalog, &tag)?;
            let policy = BlockPolicy::from_state(store.load_state());
            let next = policy.mode_for(&tag).cycle();
            apply(store, &tag, next)
        }
        BlockAction::Clear { tag } => apply(store, &normalize_tag(&tag), BlockMode::None),
        BlockAction::List => {
            let policy = BlockPolicy::from_state(store.load_state());
            Ok(CmdResult::default().with_blocked_entries(policy.entries()))
        }
    }
}

fn require_known(catalog: &Catalog, tag: &str) -> Result<String> {
    let tag = normalize_tag(tag);
    if !catalog.contains(&tag) {
        return Err(QuackError::UnknownBang(tag));
    }
    Ok(tag)
}

fn apply<S: PolicyStore>(store: &mut S, tag: &str, mode: BlockMode) -> Result<CmdResult> {
    let mut policy = BlockPolicy::from_state(store.load_state());
    policy.set_mode(tag, mode);
    store.save_state(policy.state())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(describe(tag, mode)));
    Ok(result)
}

fn describe(tag: &str, mode: BlockMode) -> String {
    match mode {
        BlockMode::None => format!("Bang !{} unblocked.", tag),
        BlockMode::Both => format!("Bang !{} blocked for root and search.", tag),
        BlockMode::Root => format!("Bang !{} blocked for root only.", tag),
        BlockMode::Search => format!("Bang !{} blocked for search only.", tag),
    }
}
