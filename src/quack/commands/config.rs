use crate::catalog::Catalog;
use crate::commands::{normalize_tag, CmdMessage, CmdResult, QuackPaths};
use crate::config::QuackConfig;
use crate::error::{QuackError, Result};

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    SetDefaultBang(String),
}

pub fn run(paths: &QuackPaths, catalog: &Catalog, action: ConfigAction) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll | ConfigAction::ShowKey(_) => {
            let config = QuackConfig::load(&paths.data_dir);
            Ok(result.with_config(config))
        }
        ConfigAction::SetDefaultBang(tag) => {
            let tag = normalize_tag(&tag);
            if !catalog.contains(&tag) {
                return Err(QuackError::UnknownBang(tag));
            }
            let mut config = QuackConfig::load(&paths.data_dir);
            config.default_bang = tag.clone();
            config.save(&paths.data_dir)?;
            result.add_message(CmdMessage::success(format!("Default bang set to !{}", tag)));
            Ok(result.with_config(config))
        }
    }
}
