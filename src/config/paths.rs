use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

const APP_DIR: &str = "ffprofile";

#[derive(Debug, Clone)]
pub struct AppPaths {
    config_dir: PathBuf,
    firefox_dir: PathBuf,
}

impl AppPaths {
    pub fn discover() -> AppResult<Self> {
        let config_root = dirs::config_dir()
            .ok_or_else(|| AppError::Config("unable to resolve config directory".to_string()))?;

        Ok(Self {
            config_dir: config_root.join(APP_DIR),
            firefox_dir: default_firefox_dir()?,
        })
    }

    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }

    /// Platform-conventional Firefox root, before any override is applied.
    pub fn firefox_dir(&self) -> &Path {
        &self.firefox_dir
    }
}

#[cfg(target_os = "macos")]
fn default_firefox_dir() -> AppResult<PathBuf> {
    let data_root = dirs::data_dir()
        .ok_or_else(|| AppError::Config("unable to resolve data directory".to_string()))?;
    Ok(data_root.join("Firefox"))
}

#[cfg(windows)]
fn default_firefox_dir() -> AppResult<PathBuf> {
    let data_root = dirs::data_dir()
        .ok_or_else(|| AppError::Config("unable to resolve data directory".to_string()))?;
    Ok(data_root.join("Mozilla").join("Firefox"))
}

#[cfg(not(any(target_os = "macos", windows)))]
fn default_firefox_dir() -> AppResult<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| AppError::Config("unable to resolve home directory".to_string()))?;
    Ok(home.join(".mozilla").join("firefox"))
}
