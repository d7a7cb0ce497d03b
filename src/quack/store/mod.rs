//! # Storage Layer
//!
//! Persistence abstraction for the block policy. The [`PolicyStore`]
//! trait lets the application work with different backends:
//!
//! - [`fs::FileStore`]: Production JSON-file storage in the data dir
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! ## Persisted Shapes
//!
//! Two shapes exist on disk, written by different generations of the
//! tool, and both are always read:
//!
//! ```text
//! blocked-bangs.json        # legacy: ["gh", "yt"] — fully blocked
//! blocked-bang-modes.json   # {"gh": {"root": true, "search": false}}
//! ```
//!
//! [`PolicyState`] carries both raw shapes; merging them into one view is
//! the job of [`crate::policy::BlockPolicy`], so nothing above the policy
//! layer ever sees the split.
//!
//! ## Tolerance
//!
//! Loading never fails: a missing, unreadable, or malformed file is
//! treated as empty state. Saving reports real errors. Writes are not
//! atomic across concurrent processes; last write wins.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

pub mod fs;
pub mod memory;

/// Per-tag block flags, the on-disk unit of the per-mode map.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModeFlags {
    #[serde(default)]
    pub root: bool,
    #[serde(default)]
    pub search: bool,
}

/// Raw persisted block state, both shapes side by side.
/// Keys and entries are lowercased tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyState {
    /// Legacy fully-blocked list
    pub legacy: BTreeSet<String>,
    /// Per-mode map
    pub modes: BTreeMap<String, ModeFlags>,
}

/// Abstract interface for block-policy persistence.
pub trait PolicyStore {
    /// Load the persisted state. Missing or malformed data loads as
    /// empty state; this never fails.
    fn load_state(&self) -> PolicyState;

    /// Persist the given state (both shapes).
    fn save_state(&mut self, state: &PolicyState) -> Result<()>;
}
