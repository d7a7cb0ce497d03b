use crate::config::QuackConfig;
use crate::model::Bang;
use crate::policy::BlockMode;
use crate::resolver::Resolution;
use std::path::PathBuf;

pub mod block;
pub mod config;
pub mod resolve;
pub mod search;

/// Filesystem locations the commands persist into.
#[derive(Debug, Clone)]
pub struct QuackPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured command output. Commands never print; the CLI (or any
/// other client) decides how to render this.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub resolution: Option<Resolution>,
    pub listed_bangs: Vec<Bang>,
    pub blocked_entries: Vec<(String, BlockMode)>,
    pub config: Option<QuackConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = Some(resolution);
        self
    }

    pub fn with_listed_bangs(mut self, bangs: Vec<Bang>) -> Self {
        self.listed_bangs = bangs;
        self
    }

    pub fn with_blocked_entries(mut self, entries: Vec<(String, BlockMode)>) -> Self {
        self.blocked_entries = entries;
        self
    }

    pub fn with_config(mut self, config: QuackConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Tags arrive in user-typed form (`!GH`, `gh`); commands and the store
/// always work with the bare lowercased tag.
pub fn normalize_tag(tag: &str) -> String {
    tag.trim().trim_start_matches('!').to_lowercase()
}
