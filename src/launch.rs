use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use serde::Serialize;
use tracing::info;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchTarget {
    pub profile: String,
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl LaunchTarget {
    pub fn command_line(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().map(|arg| {
            if arg.contains(' ') {
                format!("\"{arg}\"")
            } else {
                arg.clone()
            }
        }));
        parts.join(" ")
    }
}

#[derive(Debug, Clone)]
pub struct Launcher {
    program: String,
    search_path: Option<OsString>,
}

impl Launcher {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            search_path: None,
        }
    }

    /// Searches `paths` instead of the process `PATH`.
    pub fn with_search_path(mut self, paths: impl Into<OsString>) -> Self {
        self.search_path = Some(paths.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Firefox looks the profile up by name itself, so only the name is passed on.
    pub fn resolve_launch_target(&self, profile: &str) -> AppResult<LaunchTarget> {
        let found = match &self.search_path {
            Some(paths) => {
                let cwd = std::env::current_dir()?;
                which::which_in(&self.program, Some(paths), cwd)
            }
            None => which::which(&self.program),
        };
        let program = found.map_err(|_| {
            AppError::NotFound(format!(
                "`{}` not found. make sure Firefox is installed and on your PATH",
                self.program
            ))
        })?;

        Ok(LaunchTarget {
            profile: profile.to_string(),
            program,
            args: vec![
                "-P".to_string(),
                profile.to_string(),
                "--new-instance".to_string(),
            ],
        })
    }

    /// Starts the browser detached from this process; output is discarded.
    pub fn spawn(&self, target: &LaunchTarget) -> AppResult<()> {
        let child = Command::new(&target.program)
            .args(&target.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|err| {
                AppError::Launch(format!("{}: {err}", target.program.display()))
            })?;

        info!(profile = %target.profile, pid = child.id(), "launched browser");
        Ok(())
    }
}
