use std::path::PathBuf;

use crate::config::{self, AppPaths};
use crate::error::AppResult;
use crate::launch::Launcher;
use crate::output::Output;
use crate::registry::ProfileRegistry;

#[derive(Debug)]
pub struct AppContext {
    pub registry: ProfileRegistry,
    pub launcher: Launcher,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(root: Option<PathBuf>, json: bool) -> AppResult<Self> {
        let paths = AppPaths::discover()?;
        let settings = config::load_settings(&paths)?;
        let firefox_dir = settings.firefox_dir(root, paths.firefox_dir());
        tracing::debug!(root = %firefox_dir.display(), "using firefox directory");

        let registry = ProfileRegistry::new(firefox_dir);
        let launcher = Launcher::new(settings.launcher());
        let output = Output::new(json);

        Ok(Self {
            registry,
            launcher,
            output,
        })
    }
}
