//! Interactive input-directory selection.
//!
//! The picker is the only interactive piece of the program, kept behind a
//! narrow trait so the conversion pipeline can run headlessly in tests.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Source of the input directory when it was not given on the command line.
pub trait DirectoryPicker {
    /// Ask for a directory. `None` means the user declined, which ends the
    /// run cleanly before the batch starts.
    fn select_directory(&self) -> Option<PathBuf>;
}

/// Prompts on stderr and reads one line from stdin. An empty line declines.
pub struct StdinPicker;

impl DirectoryPicker for StdinPicker {
    fn select_directory(&self) -> Option<PathBuf> {
        eprint!("Folder containing the Keep HTML export (empty to cancel): ");
        let _ = io::stderr().flush();

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line).ok()?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(PathBuf::from(trimmed))
        }
    }
}
