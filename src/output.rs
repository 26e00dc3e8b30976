use crate::browser::BrowserProfile;
use owo_colors::OwoColorize;
use std::path::Path;

/// Success line for a completed export. Human-facing only.
pub fn print_export_summary(urls: usize, folders: usize, path: &Path) {
    println!(
        "{} Exported {} bookmark(s) and {} folder(s) to {}",
        "✓".green(),
        urls.to_string().bright_blue(),
        folders.to_string().bright_blue(),
        path.display().to_string().yellow()
    );
}

/// Listing for --list-profiles
pub fn print_profile_list(profiles: &[BrowserProfile]) {
    if profiles.is_empty() {
        println!("No browser profiles detected.");
        return;
    }
    println!("Detected browser profiles:");
    for profile in profiles {
        println!(
            "  • {} {}",
            profile.display_string().bold(),
            profile.path.display().to_string().dimmed()
        );
    }
}
