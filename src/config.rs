use std::path::PathBuf;

use crate::cmds::App;
use crate::entities::AccessMode;

/// settings shared by every command of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub mode: AccessMode,
}

impl From<&App> for Config {
    fn from(app: &App) -> Self {
        Self {
            data_dir: app.data_dir.clone(),
            mode: match app.members_only {
                true => AccessMode::MembersOnly,
                false => AccessMode::Open,
            },
        }
    }
}
