//! Block modes and the merged block policy.
//!
//! Persisted state comes in two shapes (see [`crate::store`]);
//! [`BlockPolicy`] merges them into one view so the resolver and the CLI
//! only ever deal in [`BlockMode`]s keyed by lowercased tag.

use crate::store::{ModeFlags, PolicyState};
use std::fmt;
use std::str::FromStr;

/// Per-bang block policy: which redirect kinds are held back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockMode {
    None,
    Root,
    Search,
    Both,
}

impl BlockMode {
    /// Advance to the next mode in the interactive cycle.
    /// The order none → both → root → search → none is fixed; the
    /// blocklist UI depends on it.
    pub fn cycle(self) -> Self {
        match self {
            BlockMode::None => BlockMode::Both,
            BlockMode::Both => BlockMode::Root,
            BlockMode::Root => BlockMode::Search,
            BlockMode::Search => BlockMode::None,
        }
    }

    pub fn blocks_root(self) -> bool {
        matches!(self, BlockMode::Root | BlockMode::Both)
    }

    pub fn blocks_search(self) -> bool {
        matches!(self, BlockMode::Search | BlockMode::Both)
    }

    fn from_flags(flags: ModeFlags) -> Self {
        match (flags.root, flags.search) {
            (true, true) => BlockMode::Both,
            (true, false) => BlockMode::Root,
            (false, true) => BlockMode::Search,
            (false, false) => BlockMode::None,
        }
    }
}

impl fmt::Display for BlockMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BlockMode::None => "none",
            BlockMode::Root => "root",
            BlockMode::Search => "search",
            BlockMode::Both => "both",
        };
        f.write_str(s)
    }
}

impl FromStr for BlockMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(BlockMode::None),
            "root" => Ok(BlockMode::Root),
            "search" => Ok(BlockMode::Search),
            "both" => Ok(BlockMode::Both),
            other => Err(format!(
                "invalid block mode '{}' (expected none, root, search, or both)",
                other
            )),
        }
    }
}

/// The merged, in-memory block policy.
///
/// A per-mode entry wins over legacy-list membership for the same tag;
/// a tag in neither shape is unblocked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockPolicy {
    state: PolicyState,
}

impl BlockPolicy {
    pub fn from_state(state: PolicyState) -> Self {
        Self { state }
    }

    pub fn mode_for(&self, tag: &str) -> BlockMode {
        let tag = tag.to_lowercase();
        if let Some(&flags) = self.state.modes.get(&tag) {
            return BlockMode::from_flags(flags);
        }
        if self.state.legacy.contains(&tag) {
            return BlockMode::Both;
        }
        BlockMode::None
    }

    /// Set a tag's mode. `Both` normalizes into the legacy list, `None`
    /// removes the tag from both shapes, so repeated identical calls
    /// leave identical state.
    pub fn set_mode(&mut self, tag: &str, mode: BlockMode) {
        let tag = tag.to_lowercase();
        match mode {
            BlockMode::Both => {
                self.state.legacy.insert(tag.clone());
                self.state.modes.remove(&tag);
            }
            BlockMode::None => {
                self.state.legacy.remove(&tag);
                self.state.modes.remove(&tag);
            }
            BlockMode::Root | BlockMode::Search => {
                self.state.legacy.remove(&tag);
                self.state.modes.insert(
                    tag,
                    ModeFlags {
                        root: mode == BlockMode::Root,
                        search: mode == BlockMode::Search,
                    },
                );
            }
        }
    }

    /// All blocked tags with their modes, sorted by tag. Unblocked tags
    /// never appear.
    pub fn entries(&self) -> Vec<(String, BlockMode)> {
        let mut entries: Vec<(String, BlockMode)> = self
            .state
            .legacy
            .iter()
            .filter(|tag| !self.state.modes.contains_key(*tag))
            .map(|tag| (tag.clone(), BlockMode::Both))
            .chain(self.state.modes.iter().filter_map(|(tag, &flags)| {
                let mode = BlockMode::from_flags(flags);
                (mode != BlockMode::None).then(|| (tag.clone(), mode))
            }))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    pub fn state(&self) -> &PolicyState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_order_is_fixed() {
        assert_eq!(BlockMode::None.cycle(), BlockMode::Both);
        assert_eq!(BlockMode::Both.cycle(), BlockMode::Root);
        assert_eq!(BlockMode::Root.cycle(), BlockMode::Search);
        assert_eq!(BlockMode::Search.cycle(), BlockMode::None);
    }

    #[test]
    fn cycling_four_times_returns_to_start() {
        for mode in [
            BlockMode::None,
            BlockMode::Root,
            BlockMode::Search,
            BlockMode::Both,
        ] {
            assert_eq!(mode.cycle().cycle().cycle().cycle(), mode);
        }
    }

    #[test]
    fn unknown_tag_is_unblocked() {
        let policy = BlockPolicy::default();
        assert_eq!(policy.mode_for("gh"), BlockMode::None);
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut policy = BlockPolicy::default();
        policy.set_mode("gh", BlockMode::Both);
        assert_eq!(policy.mode_for("gh"), BlockMode::Both);

        policy.set_mode("gh", BlockMode::Root);
        assert_eq!(policy.mode_for("gh"), BlockMode::Root);

        policy.set_mode("gh", BlockMode::None);
        assert_eq!(policy.mode_for("gh"), BlockMode::None);
        assert!(policy.state().legacy.is_empty());
        assert!(policy.state().modes.is_empty());
    }

    #[test]
    fn set_mode_is_idempotent() {
        let mut policy = BlockPolicy::default();
        policy.set_mode("gh", BlockMode::Both);
        let once = policy.clone();
        policy.set_mode("gh", BlockMode::Both);
        assert_eq!(policy, once);
    }

    #[test]
    fn both_lands_in_the_legacy_shape() {
        let mut policy = BlockPolicy::default();
        policy.set_mode("gh", BlockMode::Both);
        assert!(policy.state().legacy.contains("gh"));
        assert!(!policy.state().modes.contains_key("gh"));
    }

    #[test]
    fn tags_are_matched_case_insensitively() {
        let mut policy = BlockPolicy::default();
        policy.set_mode("GH", BlockMode::Search);
        assert_eq!(policy.mode_for("gh"), BlockMode::Search);
        assert_eq!(policy.mode_for("Gh"), BlockMode::Search);
    }

    #[test]
    fn legacy_membership_means_fully_blocked() {
        let mut state = PolicyState::default();
        state.legacy.insert("gh".to_string());
        let policy = BlockPolicy::from_state(state);
        assert_eq!(policy.mode_for("gh"), BlockMode::Both);
    }

    #[test]
    fn per_mode_entry_wins_over_legacy() {
        let mut state = PolicyState::default();
        state.legacy.insert("gh".to_string());
        state.modes.insert(
            "gh".to_string(),
            ModeFlags {
                root: true,
                search: false,
            },
        );
        let policy = BlockPolicy::from_state(state);
        assert_eq!(policy.mode_for("gh"), BlockMode::Root);
    }

    #[test]
    fn entries_are_sorted_and_deduplicated() {
        let mut state = PolicyState::default();
        state.legacy.insert("yt".to_string());
        state.legacy.insert("gh".to_string());
        state.modes.insert(
            "gh".to_string(),
            ModeFlags {
                root: false,
                search: true,
            },
        );
        let policy = BlockPolicy::from_state(state);
        assert_eq!(
            policy.entries(),
            vec![
                ("gh".to_string(), BlockMode::Search),
                ("yt".to_string(), BlockMode::Both),
            ]
        );
    }

    #[test]
    fn mode_parses_from_str() {
        assert_eq!("both".parse::<BlockMode>().unwrap(), BlockMode::Both);
        assert_eq!("Root".parse::<BlockMode>().unwrap(), BlockMode::Root);
        assert!("everything".parse::<BlockMode>().is_err());
    }
}
