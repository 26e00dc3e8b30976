use crate::error::{ExportError, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Capability interface for interactive path selection.
///
/// `None` means the prompt was cancelled; the caller falls back to the
/// default path instead of aborting the run.
pub trait PathPicker {
    fn pick_source(&mut self) -> Result<Option<PathBuf>>;
    fn pick_output(&mut self) -> Result<Option<PathBuf>>;
}

/// Terminal line-editor picker
pub struct LinePicker {
    editor: DefaultEditor,
}

impl LinePicker {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().map_err(|e| ExportError::Picker(e.to_string()))?;
        Ok(Self { editor })
    }

    fn prompt(&mut self, prompt: &str) -> Result<Option<PathBuf>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(PathBuf::from(line)))
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(ExportError::Picker(e.to_string())),
        }
    }
}

impl PathPicker for LinePicker {
    fn pick_source(&mut self) -> Result<Option<PathBuf>> {
        self.prompt("bookmark file> ")
    }

    fn pick_output(&mut self) -> Result<Option<PathBuf>> {
        self.prompt("output file> ")
    }
}

/// Picker used when no prompting was requested; never selects anything.
pub struct NullPicker;

impl PathPicker for NullPicker {
    fn pick_source(&mut self) -> Result<Option<PathBuf>> {
        Ok(None)
    }

    fn pick_output(&mut self) -> Result<Option<PathBuf>> {
        Ok(None)
    }
}
