//! Where signin keeps its files.
//!
//! The config file lives in the per-user configuration directory. The debug
//! log goes to the temp directory and is truncated on every start.

use std::ffi::OsString;
use std::path::PathBuf;

/// Directory under the user's configuration directory.
pub const APP_DIR: &str = "signin";

/// File name of the debug log.
pub const LOG_FILE_NAME: &str = "signin.log";

const CONFIG_FILE_NAME: &str = "config.json";

/// Path to the debug log file.
#[must_use]
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

/// Path to the config file.
///
/// Falls back to `signin/config.json` under the working directory when no
/// configuration directory can be found.
#[must_use]
pub fn config_file() -> PathBuf {
    let mut var_os = |key: &'static str| std::env::var_os(key);
    config_file_from(&mut var_os).unwrap_or_else(|| PathBuf::from(APP_DIR).join(CONFIG_FILE_NAME))
}

fn config_file_from(var_os: &mut impl FnMut(&'static str) -> Option<OsString>) -> Option<PathBuf> {
    config_dir_from(var_os).map(|dir| dir.join(APP_DIR).join(CONFIG_FILE_NAME))
}

/// Only absolute, non-empty values count; anything else is treated as unset.
fn absolute(value: Option<OsString>) -> Option<PathBuf> {
    value
        .map(PathBuf::from)
        .filter(|path| path.is_absolute())
}

#[cfg(windows)]
fn config_dir_from(var_os: &mut impl FnMut(&'static str) -> Option<OsString>) -> Option<PathBuf> {
    absolute(var_os("APPDATA")).or_else(|| {
        absolute(var_os("USERPROFILE")).map(|home| home.join("AppData").join("Roaming"))
    })
}

#[cfg(target_os = "macos")]
fn config_dir_from(var_os: &mut impl FnMut(&'static str) -> Option<OsString>) -> Option<PathBuf> {
    absolute(var_os("HOME")).map(|home| home.join("Library").join("Application Support"))
}

#[cfg(all(not(windows), not(target_os = "macos")))]
fn config_dir_from(var_os: &mut impl FnMut(&'static str) -> Option<OsString>) -> Option<PathBuf> {
    absolute(var_os("XDG_CONFIG_HOME"))
        .or_else(|| absolute(var_os("HOME")).map(|home| home.join(".config")))
}
