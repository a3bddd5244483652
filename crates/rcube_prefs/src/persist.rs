use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use eyre::Result;
use serde::Serialize;

const PREFS_FILE_NAME: &str = "rcube";
const PREFS_FILE_EXTENSION: &str = "yaml";

lazy_static! {
    static ref PROJECT_DIRS: Option<ProjectDirs> = ProjectDirs::from("", "", "rcube");
}

#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefsError {
    #[error("unable to get preferences file path")]
    NoPreferencesPath,
}

/// Returns the path of the user preferences file in the platform config
/// directory.
pub fn prefs_file_path() -> Result<PathBuf, PrefsError> {
    let dirs = PROJECT_DIRS.as_ref().ok_or(PrefsError::NoPreferencesPath)?;
    let mut p = dirs.config_dir().to_owned();
    p.push(format!("{PREFS_FILE_NAME}.{PREFS_FILE_EXTENSION}"));
    Ok(p)
}

pub fn save(path: &Path, prefs_data: &impl Serialize) -> Result<()> {
    if let Some(p) = path.parent() {
        std::fs::create_dir_all(p)?;
    }
    serde_norway::to_writer(std::fs::File::create(path)?, prefs_data)?;
    log::info!("Saved preferences to {}", path.display());
    Ok(())
}
