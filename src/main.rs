mod browser;
mod cli;
mod config;
mod error;
mod models;
mod output;
mod picker;
mod render;
mod utils;

use clap::Parser;
use error::{ExportError, Result};
use log::{debug, info};
use picker::PathPicker;
use std::fs;

fn main() {
    let args = cli::Cli::parse();

    // Initialize logger
    env_logger::init();

    if args.version {
        println!("bm2html {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &cli::Cli) -> Result<()> {
    if args.list_profiles {
        output::print_profile_list(&browser::detect_profiles());
        return Ok(());
    }

    let cfg = if let Some(config_path) = &args.config {
        config::Config::load_from_path(config_path)?
    } else {
        config::Config::load()
    };

    // The line editor takes over the terminal, so only build it when a
    // prompt was actually requested.
    let mut line_picker: Box<dyn PathPicker> = if args.pick_source || args.pick_output {
        Box::new(picker::LinePicker::new()?)
    } else {
        Box::new(picker::NullPicker)
    };
    let run = config::resolve_run_config(args, &cfg, line_picker.as_mut())?;
    debug!("source: {}, output: {}", run.source.display(), run.output.display());

    let document = browser::load_bookmark_file(&run.source)?;
    info!(
        "parsed {} bookmark(s) in {} folder(s)",
        document.url_count(),
        document.folder_count()
    );

    let html = render::render_document(&document);
    fs::write(&run.output, &html).map_err(|source| ExportError::DestinationWrite {
        path: run.output.clone(),
        source,
    })?;

    output::print_export_summary(document.url_count(), document.folder_count(), &run.output);

    if run.open {
        if let Err(e) = open::that(&run.output) {
            eprintln!("Warning: could not open {}: {}", run.output.display(), e);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn write_bookmarks(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", json).unwrap();
        file
    }

    const SAMPLE: &str = r#"{
        "roots": {
            "bookmark_bar": {
                "children": [
                    {
                        "date_added": "13350000000000000",
                        "name": "Example",
                        "type": "url",
                        "url": "https://example.com"
                    },
                    {
                        "children": [
                            {
                                "date_added": "0",
                                "name": "Mail",
                                "type": "url",
                                "url": "https://mail.example"
                            }
                        ],
                        "name": "Work",
                        "type": "folder"
                    },
                    { "type": "separator" }
                ],
                "name": "Bookmarks Bar",
                "type": "folder"
            }
        },
        "version": 1
    }"#;

    #[test]
    fn test_run_exports_file_end_to_end() {
        let source = write_bookmarks(SAMPLE);
        let out_dir = TempDir::new().unwrap();
        let out_path = out_dir.path().join("bookmarks.html");

        let args = cli::Cli::try_parse_from([
            "bm2html",
            source.path().to_str().unwrap(),
            "-o",
            out_path.to_str().unwrap(),
        ])
        .unwrap();

        run(&args).unwrap();

        let html = fs::read_to_string(&out_path).unwrap();
        assert!(html.starts_with("<!DOCTYPE NETSCAPE-Bookmark-file-1>\n"));
        assert!(html
            .contains("<DT><A HREF=\"https://example.com\" ADD_DATE=\"13350000000000000\">Example</A>"));
        assert!(html.contains("<DT><H3>Work</H3>"));
        assert_eq!(html.matches("<A HREF=").count(), 2);
        assert_eq!(html.matches("<H3>").count(), 1);
    }

    #[test]
    fn test_run_malformed_source_writes_nothing() {
        let source = write_bookmarks(r#"{"roots": {"bookmark_bar""#);
        let out_dir = TempDir::new().unwrap();
        let out_path = out_dir.path().join("bookmarks.html");

        let args = cli::Cli::try_parse_from([
            "bm2html",
            source.path().to_str().unwrap(),
            "-o",
            out_path.to_str().unwrap(),
        ])
        .unwrap();

        let err = run(&args).unwrap_err();
        assert!(matches!(err, ExportError::SourceParse(_)));
        assert!(!out_path.exists());
    }

    #[test]
    fn test_run_unwritable_output_is_write_error() {
        let source = write_bookmarks(SAMPLE);

        let args = cli::Cli::try_parse_from([
            "bm2html",
            source.path().to_str().unwrap(),
            "-o",
            "/nonexistent-dir/bookmarks.html",
        ])
        .unwrap();

        let err = run(&args).unwrap_err();
        assert!(matches!(err, ExportError::DestinationWrite { .. }));
    }
}
