//! The profiles.ini registry and the profile directories it points at.
//!
//! `ProfileRegistry` keeps no state between calls: every operation re-reads
//! profiles.ini, and every mutation rewrites it whole.

pub mod ini;
pub mod naming;
pub mod record;
pub mod seed;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};

pub use ini::{IniDocument, Section};
pub use record::ProfileRecord;

pub const REGISTRY_FILE: &str = "profiles.ini";

#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    /// False when profiles.ini does not exist yet.
    pub registry_found: bool,
    pub profiles: Vec<ProfileRecord>,
}

#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    root: PathBuf,
}

impl ProfileRegistry {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn registry_file(&self) -> PathBuf {
        self.root.join(REGISTRY_FILE)
    }

    pub fn list(&self) -> AppResult<Listing> {
        let Some(doc) = self.read()? else {
            return Ok(Listing {
                registry_found: false,
                profiles: Vec::new(),
            });
        };

        let mut profiles = doc
            .sections()
            .filter(|section| section.name().starts_with(naming::PROFILE_PREFIX))
            .map(|section| ProfileRecord::from_section(section, &self.root))
            .collect::<Vec<_>>();
        profiles.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(Listing {
            registry_found: true,
            profiles,
        })
    }

    /// The record `rename` and `delete` would act on: the first `Profile` section
    /// in file order whose `Name` matches exactly.
    pub fn find(&self, name: &str) -> AppResult<ProfileRecord> {
        let doc = self.read_existing()?;
        doc.sections()
            .find(|section| is_profile_named(section, name))
            .map(|section| ProfileRecord::from_section(section, &self.root))
            .ok_or_else(|| not_found(name))
    }

    /// Like `find`, but the profile directory must exist: Firefox cannot start
    /// a profile whose folder is gone.
    pub fn find_launchable(&self, name: &str) -> AppResult<ProfileRecord> {
        let record = self.find(name)?;
        if !record.location.is_dir() {
            return Err(AppError::NotFound(format!(
                "profile directory for `{name}` is missing: {}",
                record.location.display()
            )));
        }
        Ok(record)
    }

    pub fn create(&self, name: &str) -> AppResult<ProfileRecord> {
        naming::validate_name(name)?;

        let dir_name = naming::directory_name(name);
        let location = self.root.join(&dir_name);
        let failed = |source: io::Error| AppError::CreateFailed {
            name: name.to_string(),
            source,
        };

        fs::create_dir_all(&location).map_err(failed)?;
        seed::write_seed_files(&location, name).map_err(failed)?;
        debug!(dir = %location.display(), "seeded profile directory");

        let mut doc = self.read()?.unwrap_or_default();
        let section_name = format!(
            "{}{}",
            naming::PROFILE_PREFIX,
            naming::next_profile_index(&doc)
        );
        let section = Section::new(&section_name)
            .with("Name", name)
            .with("IsRelative", "1")
            .with("Path", &dir_name);
        let record = ProfileRecord::from_section(&section, &self.root);
        doc.push_section(section);
        self.write(&doc).map_err(|err| match err {
            AppError::Io(source) => failed(source),
            other => other,
        })?;

        info!(profile = name, section = %section_name, path = %dir_name, "created profile");
        Ok(record)
    }

    pub fn rename(&self, old_name: &str, new_name: &str) -> AppResult<ProfileRecord> {
        if new_name.is_empty() || new_name == old_name {
            return Err(AppError::Guarded(format!(
                "new name for `{old_name}` must be non-empty and different"
            )));
        }
        naming::validate_name(new_name)?;

        let mut doc = self.read_existing()?;
        let section = doc
            .sections_mut()
            .find(|section| is_profile_named(section, old_name))
            .ok_or_else(|| not_found(old_name))?;
        if is_default(section) {
            return Err(AppError::Guarded(format!(
                "cannot rename the default profile `{old_name}`"
            )));
        }

        section.set("Name", new_name);
        let record = ProfileRecord::from_section(section, &self.root);
        self.write(&doc)?;

        info!(from = old_name, to = new_name, section = %record.section, "renamed profile");
        Ok(record)
    }

    /// Removes the registry entry, then the directory. A failure deleting the
    /// directory leaves it orphaned; the registry is not restored.
    pub fn delete(&self, name: &str, confirmed: bool) -> AppResult<ProfileRecord> {
        let mut doc = self.read_existing()?;
        let section = doc
            .sections()
            .find(|section| is_profile_named(section, name))
            .ok_or_else(|| not_found(name))?;
        if is_default(section) {
            return Err(AppError::Guarded(format!(
                "cannot delete the default profile `{name}`"
            )));
        }
        if !confirmed {
            return Err(AppError::Guarded(format!(
                "deleting `{name}` was not confirmed"
            )));
        }

        let record = ProfileRecord::from_section(section, &self.root);
        self.ensure_removable(&record)?;
        doc.remove_first(|section| is_profile_named(section, name));
        self.write(&doc)?;
        info!(profile = name, section = %record.section, "removed registry entry");

        if record.location.exists() {
            fs::remove_dir_all(&record.location).inspect_err(|err| {
                warn!(
                    dir = %record.location.display(),
                    error = %err,
                    "profile directory left orphaned"
                );
            })?;
            info!(dir = %record.location.display(), "deleted profile directory");
        } else {
            debug!(dir = %record.location.display(), "profile directory already gone");
        }

        Ok(record)
    }

    /// Rejects a `Path` that would make `remove_dir_all` take the root (and
    /// every other profile with it) instead of a single profile folder.
    fn ensure_removable(&self, record: &ProfileRecord) -> AppResult<()> {
        let unsafe_target = |reason: &str| {
            AppError::Registry(format!(
                "refusing to delete `{}`: Path `{}` {reason}",
                record.name, record.path
            ))
        };

        if record.path.trim().is_empty() {
            return Err(unsafe_target("is empty"));
        }
        let canonical_hit = match (record.location.canonicalize(), self.root.canonicalize()) {
            (Ok(location), Ok(root)) => encloses(&location, &root),
            _ => false,
        };
        if canonical_hit || encloses(&record.location, &self.root) {
            return Err(unsafe_target(
                "resolves to the Firefox root or one of its parents",
            ));
        }

        Ok(())
    }

    fn read(&self) -> AppResult<Option<IniDocument>> {
        let path = self.registry_file();
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(file = %path.display(), "registry file not found");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        debug!(file = %path.display(), bytes = raw.len(), "read registry file");
        IniDocument::parse(&raw).map(Some)
    }

    fn read_existing(&self) -> AppResult<IniDocument> {
        self.read()?.ok_or_else(|| {
            AppError::NotFound(format!(
                "no registry file at {}",
                self.registry_file().display()
            ))
        })
    }

    fn write(&self, doc: &IniDocument) -> AppResult<()> {
        fs::create_dir_all(&self.root)?;

        let path = self.registry_file();
        let tmp = path.with_extension("ini.tmp");
        fs::write(&tmp, doc.render())?;
        fs::rename(&tmp, &path)?;

        debug!(file = %path.display(), "wrote registry file");
        Ok(())
    }
}

fn is_profile_named(section: &Section, name: &str) -> bool {
    section.name().starts_with(naming::PROFILE_PREFIX) && section.get("Name") == Some(name)
}

/// True when `location` is `root` or an ancestor of it, compared by components.
fn encloses(location: &Path, root: &Path) -> bool {
    root.starts_with(location)
}

fn is_default(section: &Section) -> bool {
    section.get("Default").is_some_and(|value| value == "1")
}

fn not_found(name: &str) -> AppError {
    AppError::NotFound(format!("no profile named `{name}`"))
}
