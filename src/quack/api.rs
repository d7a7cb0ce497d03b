//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: the single
//! entry point for all quack operations, regardless of the UI in front.
//!
//! It dispatches to the appropriate command function and returns
//! structured `Result<CmdResult>` values. It holds no business logic, does
//! no I/O formatting, and never touches stdout or stderr.
//!
//! `QuackApi<S: PolicyStore>` is generic over the storage backend:
//! production uses `FileStore`, tests use `InMemoryStore` and never touch
//! the filesystem for policy state.

use crate::catalog::Catalog;
use crate::commands;
use crate::error::Result;
use crate::policy::BlockMode;
use crate::store::PolicyStore;

/// The main API facade for quack operations.
pub struct QuackApi<'a, S: PolicyStore> {
    store: S,
    paths: commands::QuackPaths,
    catalog: &'a Catalog,
}

impl<'a, S: PolicyStore> QuackApi<'a, S> {
    pub fn new(store: S, paths: commands::QuackPaths, catalog: &'a Catalog) -> Self {
        Self {
            store,
            paths,
            catalog,
        }
    }

    pub fn resolve(&self, req: &commands::resolve::ResolveRequest) -> Result<commands::CmdResult> {
        commands::resolve::run(&self.store, &self.paths, self.catalog, req)
    }

    pub fn search(&self, term: &str, limit: usize) -> Result<commands::CmdResult> {
        commands::search::run(self.catalog, term, limit)
    }

    pub fn block(&mut self, tag: &str, mode: BlockMode) -> Result<commands::CmdResult> {
        commands::block::run(
            &mut self.store,
            self.catalog,
            commands::block::BlockAction::Set {
                tag: tag.to_string(),
                mode,
            },
        )
    }

    pub fn unblock(&mut self, tag: &str) -> Result<commands::CmdResult> {
        commands::block::run(
            &mut self.store,
            self.catalog,
            commands::block::BlockAction::Clear {
                tag: tag.to_string(),
            },
        )
    }

    pub fn cycle(&mut self, tag: &str) -> Result<commands::CmdResult> {
        commands::block::run(
            &mut self.store,
            self.catalog,
            commands::block::BlockAction::Cycle {
                tag: tag.to_string(),
            },
        )
    }

    pub fn blocked(&mut self) -> Result<commands::CmdResult> {
        commands::block::run(
            &mut self.store,
            self.catalog,
            commands::block::BlockAction::List,
        )
    }

    pub fn config(&self, action: commands::config::ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, self.catalog, action)
    }

    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    pub fn paths(&self) -> &commands::QuackPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::resolve::ResolveRequest;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, QuackPaths};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::Resolution;
    use crate::store::memory::InMemoryStore;

    fn catalog() -> Catalog {
        Catalog::from_json(
            r#"[
                {"t":"ddg","s":"DuckDuckGo","d":"duckduckgo.com","u":"https://duckduckgo.com/?q={{{s}}}"},
                {"t":"gh","s":"GitHub","d":"github.com","u":"https://github.com/search?q={{{s}}}"}
            ]"#,
        )
        .unwrap()
    }

    fn api<'a>(dir: &tempfile::TempDir, catalog: &'a Catalog) -> QuackApi<'a, InMemoryStore> {
        QuackApi::new(
            InMemoryStore::new(),
            QuackPaths {
                data_dir: dir.path().to_path_buf(),
            },
            catalog,
        )
    }

    #[test]
    fn block_then_resolve_then_unblock() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = catalog();
        let mut api = api(&dir, &catalog);

        api.block("gh", BlockMode::Both).unwrap();

        let req = ResolveRequest {
            query: "!gh rust".to_string(),
            default_override: None,
            bypass_block: false,
        };
        let result = api.resolve(&req).unwrap();
        assert!(matches!(
            result.resolution,
            Some(Resolution::Blocked { .. })
        ));

        api.unblock("gh").unwrap();
        let result = api.resolve(&req).unwrap();
        assert!(matches!(
            result.resolution,
            Some(Resolution::Redirect { .. })
        ));
    }

    #[test]
    fn search_dispatches_to_the_matcher() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = catalog();
        let api = api(&dir, &catalog);
        let result = api.search("gh", 0).unwrap();
        assert_eq!(result.listed_bangs[0].tag, "gh");
    }
}
