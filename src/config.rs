use crate::browser::{self, BrowserKind};
use crate::cli::Cli;
use crate::error::{ExportError, Result};
use crate::picker::PathPicker;
use crate::utils;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preferred browser when probing for the default source
    /// (chrome, chromium, edge)
    #[serde(default)]
    pub browser: Option<String>,

    /// Directory for default timestamped output files; desktop if unset
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ExportError::Config(format!("{}: {}", path.display(), e)))?;
        let config: Config =
            serde_yaml::from_str(&contents).map_err(|e| ExportError::Config(e.to_string()))?;
        Ok(config)
    }

    /// Load configuration from default location (~/.config/bm2html/config.yml)
    /// Falls back to default config if file doesn't exist
    pub fn load() -> Self {
        let config_path = utils::get_config_dir().join("config.yml");

        if config_path.exists() {
            match Self::load_from_path(&config_path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to load config from {:?}: {}",
                        config_path, e
                    );
                    eprintln!("Using default configuration");
                    Self::default()
                }
            }
        } else {
            Self::default()
        }
    }
}

/// Everything one export run needs, resolved once at startup. The render
/// pipeline never touches the environment after this.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub source: PathBuf,
    pub output: PathBuf,
    pub open: bool,
}

/// Resolve source and output paths from the prompt toggles, explicit path
/// flags, the config file, and browser detection, in that precedence.
/// A cancelled prompt falls back to the path that would have been used
/// without it.
pub fn resolve_run_config(
    cli: &Cli,
    config: &Config,
    picker: &mut dyn PathPicker,
) -> Result<RunConfig> {
    let preferred = preferred_browser(cli, config)?;

    let source = if cli.pick_source {
        match picker.pick_source()? {
            Some(path) => path,
            None => fallback_source(cli, preferred)?,
        }
    } else {
        fallback_source(cli, preferred)?
    };

    let output = if cli.pick_output {
        match picker.pick_output()? {
            Some(path) => path,
            None => fallback_output(cli, config),
        }
    } else {
        fallback_output(cli, config)
    };

    Ok(RunConfig {
        source,
        output,
        open: cli.open,
    })
}

fn preferred_browser(cli: &Cli, config: &Config) -> Result<Option<BrowserKind>> {
    let name = cli.browser.as_deref().or(config.browser.as_deref());
    match name {
        None => Ok(None),
        Some(s) => BrowserKind::from_string(s)
            .map(Some)
            .ok_or_else(|| ExportError::Config(format!("unknown browser: {}", s))),
    }
}

fn fallback_source(cli: &Cli, preferred: Option<BrowserKind>) -> Result<PathBuf> {
    if let Some(path) = &cli.source {
        return Ok(path.clone());
    }
    browser::default_bookmarks_path(preferred).ok_or_else(|| {
        ExportError::Config(
            "no browser profile detected; pass the bookmark file path".to_string(),
        )
    })
}

fn fallback_output(cli: &Cli, config: &Config) -> PathBuf {
    if let Some(path) = &cli.output {
        return path.clone();
    }
    let dir = config
        .output_dir
        .clone()
        .unwrap_or_else(utils::get_desktop_dir);
    // Only the default file name is time-dependent, never the content.
    let stamp = Utc::now().format("%Y%m%dT%H%M%SZ");
    dir.join(format!("bookmarks_{}.html", stamp))
}
