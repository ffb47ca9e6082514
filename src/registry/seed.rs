use std::fs;
use std::io;
use std::path::Path;

use chrono::Utc;
use serde::Serialize;

pub const PREFS_FILE: &str = "prefs.js";
pub const USER_PREFS_FILE: &str = "user.js";
pub const TIMES_FILE: &str = "times.json";

#[derive(Debug, Serialize)]
struct Times {
    created: i64,
    reset: i64,
}

/// Writes the minimum set of files Firefox needs to accept a folder as a profile.
pub fn write_seed_files(dir: &Path, name: &str) -> io::Result<()> {
    fs::write(dir.join(PREFS_FILE), prefs_js(name))?;
    fs::write(dir.join(USER_PREFS_FILE), "")?;

    let now = Utc::now().timestamp_micros();
    let times = serde_json::to_string(&Times {
        created: now,
        reset: now,
    })?;
    fs::write(dir.join(TIMES_FILE), times)?;

    Ok(())
}

fn prefs_js(name: &str) -> String {
    format!(
        "// Firefox Profile: {name}\n\
         user_pref(\"browser.startup.page\", 1);\n\
         user_pref(\"browser.startup.homepage\", \"about:blank\");\n"
    )
}
