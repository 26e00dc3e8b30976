use crate::error::{ExportError, Result};
use crate::models::{BookmarkDocument, RawBookmarkFile};
use std::fs;
use std::path::{Path, PathBuf};

/// Browsers that keep their bookmarks in the Chromium JSON format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserKind {
    Chrome,
    Chromium,
    Edge,
}

impl BrowserKind {
    /// Get a user-friendly display name for the browser
    pub fn display_name(&self) -> &str {
        match self {
            BrowserKind::Chrome => "Chrome",
            BrowserKind::Chromium => "Chromium",
            BrowserKind::Edge => "Edge",
        }
    }

    /// Parse browser kind from string (case-insensitive)
    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "chrome" => Some(BrowserKind::Chrome),
            "chromium" => Some(BrowserKind::Chromium),
            "edge" => Some(BrowserKind::Edge),
            _ => None,
        }
    }
}

/// A detected browser profile and its `Bookmarks` file location
#[derive(Debug, Clone)]
pub struct BrowserProfile {
    pub browser: BrowserKind,
    pub profile_name: String,
    pub path: PathBuf,
}

impl BrowserProfile {
    pub fn display_string(&self) -> String {
        format!("{} ({})", self.browser.display_name(), self.profile_name)
    }
}

// Profile directories Chromium creates, checked in this order so the
// default profile wins when several exist.
const PROFILE_DIRS: [&str; 5] = ["Default", "Profile 1", "Profile 2", "Profile 3", "Profile 4"];

/// Detect every profile with an existing `Bookmarks` file, in a stable
/// order (Chrome before Chromium before Edge, default profile first).
pub fn detect_profiles() -> Vec<BrowserProfile> {
    let mut profiles = Vec::new();
    let home = match std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE")) {
        Ok(h) => h,
        Err(_) => return profiles,
    };

    #[cfg(target_os = "macos")]
    let bases = [
        (
            BrowserKind::Chrome,
            format!("{}/Library/Application Support/Google/Chrome", home),
        ),
        (
            BrowserKind::Edge,
            format!("{}/Library/Application Support/Microsoft Edge", home),
        ),
    ];

    #[cfg(target_os = "linux")]
    let bases = [
        (
            BrowserKind::Chrome,
            format!("{}/.config/google-chrome", home),
        ),
        (BrowserKind::Chromium, format!("{}/.config/chromium", home)),
        (
            BrowserKind::Edge,
            format!("{}/.config/microsoft-edge", home),
        ),
    ];

    #[cfg(target_os = "windows")]
    let bases = [
        (
            BrowserKind::Chrome,
            format!("{}\\AppData\\Local\\Google\\Chrome\\User Data", home),
        ),
        (
            BrowserKind::Edge,
            format!("{}\\AppData\\Local\\Microsoft\\Edge\\User Data", home),
        ),
    ];

    for (browser, base) in bases {
        let base_path = PathBuf::from(&base);
        if !base_path.exists() {
            continue;
        }
        for profile_name in PROFILE_DIRS {
            let bookmarks_path = base_path.join(profile_name).join("Bookmarks");
            if bookmarks_path.exists() {
                log::debug!(
                    "found {} profile {} at {}",
                    browser.display_name(),
                    profile_name,
                    bookmarks_path.display()
                );
                profiles.push(BrowserProfile {
                    browser,
                    profile_name: profile_name.to_string(),
                    path: bookmarks_path,
                });
            }
        }
    }

    profiles
}

/// First detected profile's bookmark file, optionally restricted to a
/// preferred browser.
pub fn default_bookmarks_path(preferred: Option<BrowserKind>) -> Option<PathBuf> {
    let profiles = detect_profiles();
    match preferred {
        Some(kind) => profiles
            .into_iter()
            .find(|p| p.browser == kind)
            .map(|p| p.path),
        None => profiles.into_iter().next().map(|p| p.path),
    }
}

/// Read and parse a `Bookmarks` file into the typed bookmark tree.
///
/// Read failures and parse failures are distinct errors so the caller can
/// report which step went wrong; in both cases nothing has been written.
pub fn load_bookmark_file(path: &Path) -> Result<BookmarkDocument> {
    let mut bytes = fs::read(path).map_err(|source| ExportError::SourceRead {
        path: path.to_path_buf(),
        source,
    })?;
    let raw: RawBookmarkFile = simd_json::serde::from_slice(&mut bytes)?;
    BookmarkDocument::from_raw(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[rstest]
    #[case("chrome", Some(BrowserKind::Chrome))]
    #[case("Chrome", Some(BrowserKind::Chrome))]
    #[case("CHROMIUM", Some(BrowserKind::Chromium))]
    #[case("edge", Some(BrowserKind::Edge))]
    #[case("safari", None)]
    #[case("", None)]
    fn test_browser_kind_from_string(#[case] input: &str, #[case] expected: Option<BrowserKind>) {
        assert_eq!(BrowserKind::from_string(input), expected);
    }

    #[test]
    fn test_profile_display_string() {
        let profile = BrowserProfile {
            browser: BrowserKind::Edge,
            profile_name: "Default".to_string(),
            path: PathBuf::from("/tmp/Bookmarks"),
        };
        assert_eq!(profile.display_string(), "Edge (Default)");
    }

    #[test]
    fn test_load_valid_bookmark_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "checksum": "e68417696614de65818e666d48227636",
                "roots": {{
                    "bookmark_bar": {{
                        "children": [
                            {{
                                "date_added": "13245678900000000",
                                "id": "1",
                                "name": "Google",
                                "type": "url",
                                "url": "https://www.google.com/"
                            }}
                        ],
                        "id": "1",
                        "name": "Bookmarks Bar",
                        "type": "folder"
                    }},
                    "other": {{ "children": [], "type": "folder", "name": "Other" }},
                    "synced": {{ "children": [], "type": "folder", "name": "Mobile" }}
                }},
                "version": 1
            }}"#
        )
        .unwrap();

        let doc = load_bookmark_file(file.path()).unwrap();
        assert_eq!(doc.url_count(), 1);
        assert_eq!(doc.folder_count(), 0);
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let err = load_bookmark_file(Path::new("/nonexistent/Bookmarks")).unwrap_err();
        assert!(matches!(err, ExportError::SourceRead { .. }));
    }

    #[test]
    fn test_load_truncated_json_is_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"roots": {{"bookmark_bar": {{"children": ["#).unwrap();

        let err = load_bookmark_file(file.path()).unwrap_err();
        assert!(matches!(err, ExportError::SourceParse(_)));
    }

    #[test]
    fn test_load_missing_bar_is_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"roots": {{}}}}"#).unwrap();

        let err = load_bookmark_file(file.path()).unwrap_err();
        assert!(matches!(err, ExportError::SourceParse(_)));
    }
}
