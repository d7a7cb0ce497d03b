use crate::catalog::Catalog;
use crate::error::{QuackError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Tag used when no default is stored or the stored one is unusable.
pub const FALLBACK_BANG: &str = "ddg";

/// User preferences, stored in config.json in the data dir
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuackConfig {
    /// Bang used when a query carries no (known) bang token
    #[serde(default = "default_bang")]
    pub default_bang: String,
}

fn default_bang() -> String {
    FALLBACK_BANG.to_string()
}

impl Default for QuackConfig {
    fn default() -> Self {
        Self {
            default_bang: default_bang(),
        }
    }
}

impl QuackConfig {
    /// Load config from the given directory. A missing, unreadable, or
    /// malformed file yields the defaults; resolution must keep working
    /// no matter what is on disk.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Self {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        let Ok(content) = fs::read_to_string(&config_path) else {
            return Self::default();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(QuackError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(QuackError::Serialization)?;
        fs::write(config_path, content).map_err(QuackError::Io)?;
        Ok(())
    }

    /// The tag resolution should fall back to: the stored default when
    /// the catalog knows it, otherwise [`FALLBACK_BANG`].
    pub fn effective_default<'a>(&'a self, catalog: &Catalog) -> &'a str {
        if catalog.contains(&self.default_bang) {
            &self.default_bang
        } else {
            FALLBACK_BANG
        }
    }
}
