//! User preferences.
//!
//! The built-in defaults live in `default.yaml`. A user file, if present, is
//! layered on top of them, so it only needs to mention the keys it changes.

#![allow(missing_docs)] // field names are self-explanatory

#[macro_use]
extern crate lazy_static;

use std::path::Path;

use serde::{Deserialize, Serialize};

mod animation;
mod colors;
#[cfg(not(target_arch = "wasm32"))]
pub mod persist;
mod view;

pub use animation::*;
pub use colors::*;
pub use view::*;

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

lazy_static! {
    /// Built-in preferences.
    pub static ref DEFAULT_PREFS: Preferences = Preferences::default();
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Preferences {
    pub animation: AnimationPreferences,
    pub view: ViewPreferences,
    pub lighting: LightingPreferences,
    pub colors: ColorPreferences,
}
impl Preferences {
    /// Loads the built-in preferences, overridden by `user_file` if it is
    /// given and exists. If loading fails, the built-in preferences are
    /// returned.
    pub fn load(user_file: Option<&Path>) -> Self {
        let mut config = config::Config::builder();

        // Load default preferences.
        let default_config_source = config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT);
        config = config.add_source(default_config_source);

        // Load user preferences.
        if let Some(path) = user_file {
            log::debug!("Loading user preferences from {}", path.display());
            let user_config_source = config::File::from(path)
                .format(PREFS_FILE_FORMAT)
                .required(false);
            config = config.add_source(user_config_source);
        }

        let mut prefs: Self = config
            .build()
            .and_then(|c| c.try_deserialize())
            .unwrap_or_else(|e| {
                log::warn!("Error loading preferences: {e}");
                DEFAULT_PREFS.clone()
            });
        prefs.validate();
        prefs
    }

    /// Loads preferences from the platform config directory.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_user() -> Self {
        match persist::prefs_file_path() {
            Ok(path) => Self::load(Some(&path)),
            Err(e) => {
                log::warn!("Error loading user preferences: {e}");
                Self::load(None)
            }
        }
    }

    /// Parses preferences from a YAML string. Missing keys take their default
    /// values, and so do invalid ones.
    pub fn from_yaml(s: &str) -> Result<Self, serde_norway::Error> {
        let mut prefs: Self = serde_norway::from_str(s)?;
        prefs.validate();
        Ok(prefs)
    }

    /// Replaces invalid values with their defaults, logging a warning for
    /// each.
    pub fn validate(&mut self) {
        self.view.validate();
    }
    /// Serializes preferences to a YAML string.
    pub fn to_yaml(&self) -> Result<String, serde_norway::Error> {
        serde_norway::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_yaml_matches_default() {
        let from_yaml = Preferences::from_yaml(DEFAULT_PREFS_STR).unwrap();
        assert_eq!(from_yaml, Preferences::default());
    }

    #[test]
    fn test_load_without_user_file() {
        assert_eq!(Preferences::load(None), Preferences::default());
    }

    #[test]
    fn test_partial_yaml() {
        let prefs = Preferences::from_yaml("animation:\n  overlap_policy: reject\n").unwrap();
        assert_eq!(prefs.animation.overlap_policy, MoveOverlapPolicy::Reject);
        assert_eq!(prefs.animation.quarter_turn_ms, 600);
        assert_eq!(prefs.view, ViewPreferences::default());
    }

    #[test]
    fn test_invalid_view_from_yaml() {
        let yaml = "view:\n  fov_degrees: 0.0\n  zoom_step: 2.0\n";
        let prefs = Preferences::from_yaml(yaml).unwrap();
        assert_eq!(prefs.view.fov_degrees, 45.0);
        assert_eq!(prefs.view.zoom_step, 2.0);
    }

    #[test]
    fn test_overlap_policy_names() {
        assert_eq!(MoveOverlapPolicy::CommitPending.to_string(), "commit_pending");
        assert_eq!("reject".parse(), Ok(MoveOverlapPolicy::Reject));
    }
}
