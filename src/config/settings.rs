use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AppResult;

const DEFAULT_LAUNCHER: &str = "firefox";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub firefox_dir: Option<PathBuf>,
    #[serde(default)]
    pub launcher: Option<String>,
}

impl Settings {
    pub fn launcher(&self) -> String {
        self.launcher
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_LAUNCHER)
            .to_string()
    }

    /// Picks the Firefox root: explicit flag, then settings, then the platform default.
    pub fn firefox_dir(&self, flag: Option<PathBuf>, platform_default: &Path) -> PathBuf {
        flag.or_else(|| self.firefox_dir.clone())
            .unwrap_or_else(|| platform_default.to_path_buf())
    }
}

pub fn load(path: PathBuf) -> AppResult<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let raw = fs::read_to_string(path)?;
    let settings = serde_json::from_str(&raw)?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launcher_defaults_to_firefox() {
        assert_eq!(Settings::default().launcher(), "firefox");

        let blank = Settings {
            launcher: Some("  ".to_string()),
            ..Settings::default()
        };
        assert_eq!(blank.launcher(), "firefox");
    }

    #[test]
    fn root_flag_beats_settings_and_platform() {
        let settings = Settings {
            firefox_dir: Some(PathBuf::from("/from/settings")),
            ..Settings::default()
        };
        let platform = Path::new("/platform");

        assert_eq!(
            settings.firefox_dir(Some(PathBuf::from("/from/flag")), platform),
            PathBuf::from("/from/flag")
        );
        assert_eq!(
            settings.firefox_dir(None, platform),
            PathBuf::from("/from/settings")
        );
        assert_eq!(
            Settings::default().firefox_dir(None, platform),
            PathBuf::from("/platform")
        );
    }

    #[test]
    fn missing_settings_file_yields_defaults() {
        let settings = load(PathBuf::from("/definitely/not/here/settings.json"))
            .expect("missing file is not an error");
        assert_eq!(settings, Settings::default());
    }
}
