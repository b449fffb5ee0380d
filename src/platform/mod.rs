// Platform paths
// Resolves where settings and the history/bookmark database live on each OS.

use std::env;
use std::path::PathBuf;

/// Directory name used on Linux (lowercase, XDG style).
const APP_DIR_UNIX: &str = "urlbar-suggest";
/// Directory name used on macOS and Windows.
const APP_DIR_DESKTOP: &str = "UrlbarSuggest";

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the platform-specific configuration directory.
///
/// - **Linux**: `$XDG_CONFIG_HOME/urlbar-suggest` or `~/.config/urlbar-suggest`
/// - **macOS**: `~/Library/Application Support/UrlbarSuggest`
/// - **Windows**: `%APPDATA%/UrlbarSuggest`
pub fn get_config_dir() -> PathBuf {
    if cfg!(target_os = "macos") {
        home_dir()
            .join("Library")
            .join("Application Support")
            .join(APP_DIR_DESKTOP)
    } else if cfg!(target_os = "windows") {
        appdata_dir().join(APP_DIR_DESKTOP)
    } else {
        xdg_dir("XDG_CONFIG_HOME", &[".config"]).join(APP_DIR_UNIX)
    }
}

/// Returns the platform-specific data directory (holds the SQLite store).
///
/// - **Linux**: `$XDG_DATA_HOME/urlbar-suggest` or `~/.local/share/urlbar-suggest`
/// - **macOS**: same as the config directory
/// - **Windows**: `%APPDATA%/UrlbarSuggest/data`
pub fn get_data_dir() -> PathBuf {
    if cfg!(target_os = "macos") {
        get_config_dir()
    } else if cfg!(target_os = "windows") {
        appdata_dir().join(APP_DIR_DESKTOP).join("data")
    } else {
        xdg_dir("XDG_DATA_HOME", &[".local", "share"]).join(APP_DIR_UNIX)
    }
}

fn xdg_dir(var: &str, fallback: &[&str]) -> PathBuf {
    match env::var(var) {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => fallback.iter().fold(home_dir(), |path, part| path.join(part)),
    }
}

fn appdata_dir() -> PathBuf {
    env::var("APPDATA")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join("AppData").join("Roaming"))
}
