use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;

use super::ini::Section;

pub const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileRecord {
    pub name: String,
    pub section: String,
    /// `Path` exactly as written in profiles.ini.
    pub path: String,
    pub location: PathBuf,
    pub display_path: String,
    pub is_relative: bool,
    pub is_default: bool,
    pub created_at: String,
}

impl ProfileRecord {
    pub fn from_section(section: &Section, root: &Path) -> Self {
        let name = section.get("Name").unwrap_or(UNKNOWN).to_string();
        let path = section.get("Path").unwrap_or(UNKNOWN).to_string();
        let is_relative = section.get("IsRelative").is_none_or(|value| value == "1");
        let is_default = section.get("Default").is_some_and(|value| value == "1");

        let location = resolve_location(root, &path, is_relative);
        let display_path = if location.exists() {
            location
                .file_name()
                .map(|value| value.to_string_lossy().to_string())
                .unwrap_or_else(|| path.clone())
        } else {
            path.clone()
        };
        let created_at = created_at(&location);

        Self {
            name,
            section: section.name().to_string(),
            path,
            location,
            display_path,
            is_relative,
            is_default,
            created_at,
        }
    }
}

pub fn resolve_location(root: &Path, path: &str, is_relative: bool) -> PathBuf {
    if is_relative {
        root.join(path)
    } else {
        PathBuf::from(path)
    }
}

/// Local `YYYY-MM-DD` of the directory's birth time, or its mtime where the
/// platform has no birth time. Never fails.
pub fn created_at(dir: &Path) -> String {
    let metadata = match fs::metadata(dir) {
        Ok(metadata) if metadata.is_dir() => metadata,
        Ok(_) => return UNKNOWN.to_string(),
        Err(err) => {
            tracing::debug!(dir = %dir.display(), error = %err, "profile directory not readable");
            return UNKNOWN.to_string();
        }
    };

    match metadata.created().or_else(|_| metadata.modified()) {
        Ok(time) => DateTime::<Local>::from(time).format("%Y-%m-%d").to_string(),
        Err(err) => {
            tracing::warn!(dir = %dir.display(), error = %err, "no timestamp for profile directory");
            UNKNOWN.to_string()
        }
    }
}
