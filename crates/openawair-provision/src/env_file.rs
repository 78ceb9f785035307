//! `.env` handling shared by `build.rs` and the tests.

use std::path::{Path, PathBuf};

/// Settings forwarded from `.env` into `option_env!`
pub const FORWARDED_VARS: [&str; 2] = ["OPENAWAIR_MODEL", "OPENAWAIR_DEVICE_ID"];

/// The workspace-root `.env`, two levels above this crate's manifest.
pub fn workspace_env_path(manifest_dir: &Path) -> PathBuf {
    manifest_dir.join("..").join("..").join(".env")
}

/// Forwarded settings found in the file at `path`.
///
/// A missing file yields no settings. A file that does not parse is an error.
pub fn read_forwarded(path: &Path) -> Result<Vec<(String, String)>, dotenvy::Error> {
    let entries = match dotenvy::from_path_iter(path) {
        Ok(entries) => entries,
        Err(e) if e.not_found() => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };

    let mut found = Vec::new();
    for entry in entries {
        let (key, value) = entry?;
        if FORWARDED_VARS.contains(&key.as_str()) {
            found.push((key, value));
        }
    }
    Ok(found)
}
