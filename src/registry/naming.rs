use uuid::Uuid;

use crate::error::{AppError, AppResult};

use super::ini::IniDocument;

pub const PROFILE_PREFIX: &str = "Profile";

/// Accepts letters, digits, spaces, hyphens and underscores, with at least one letter or digit.
/// Leading and trailing spaces are rejected: profiles.ini values are read back trimmed.
pub fn validate_name(name: &str) -> AppResult<()> {
    if name.trim() != name {
        return Err(AppError::InvalidInput(format!(
            "profile name `{name}` may not start or end with whitespace"
        )));
    }

    let mut core = name
        .chars()
        .filter(|ch| !matches!(ch, ' ' | '-' | '_'))
        .peekable();

    if core.peek().is_none() || !core.all(char::is_alphanumeric) {
        return Err(AppError::InvalidInput(format!(
            "profile name `{name}` may only contain letters, numbers, spaces, hyphens, and underscores"
        )));
    }

    Ok(())
}

pub fn slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// `<hex8><hex8>.<slug>`, the layout Firefox itself uses for profile folders.
pub fn directory_name(name: &str) -> String {
    let salt: String = (0..2)
        .map(|_| Uuid::new_v4().simple().to_string()[..8].to_string())
        .collect();
    format!("{salt}.{}", slug(name))
}

pub fn profile_index(section_name: &str) -> Option<u64> {
    section_name.strip_prefix(PROFILE_PREFIX)?.parse().ok()
}

pub fn next_profile_index(doc: &IniDocument) -> u64 {
    doc.sections()
        .filter_map(|section| profile_index(section.name()))
        .max()
        .map_or(0, |max| max + 1)
}
