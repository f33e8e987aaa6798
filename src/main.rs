use clap::Parser;
use eyre::{Result, eyre};
use std::path::PathBuf;

use keep_note_export::batch::{self, ExportConfig};
use keep_note_export::picker::{DirectoryPicker, StdinPicker};

/// Convert a Google Keep Takeout HTML export into plain Markdown notes.
/// Output lands in a "converted files" subdirectory of the export folder.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Folder containing the exported .html notes.
    /// Prompts interactively if omitted.
    #[arg(value_name = "INPUT_DIR")]
    input_dir: Option<PathBuf>,

    /// Print a line for each processed file.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress standard output (progress bar and summary).
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let input_dir = match cli.input_dir {
        Some(dir) => dir,
        None => match StdinPicker.select_directory() {
            Some(dir) => dir,
            None => {
                eprintln!("No folder selected. Exiting.");
                return Ok(());
            }
        },
    };

    if !input_dir.is_dir() {
        return Err(eyre!("Not a directory: {}", input_dir.display()));
    }

    let config = ExportConfig {
        input_dir,
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    batch::execute(&config)?;
    Ok(())
}
