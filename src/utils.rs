use std::path::PathBuf;

pub fn get_config_dir() -> PathBuf {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(path).join("bm2html");
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".config/bm2html");
    }

    #[cfg(target_os = "windows")]
    if let Ok(appdata) = std::env::var("APPDATA") {
        return PathBuf::from(appdata).join("bm2html");
    }

    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Where default (timestamped) exports land. Falls back to the home
/// directory when no Desktop exists.
pub fn get_desktop_dir() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        let desktop = PathBuf::from(&home).join("Desktop");
        if desktop.is_dir() {
            return desktop;
        }
        return PathBuf::from(home);
    }

    #[cfg(target_os = "windows")]
    if let Ok(profile) = std::env::var("USERPROFILE") {
        return PathBuf::from(profile).join("Desktop");
    }

    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
