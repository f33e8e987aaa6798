//! The conversion batch: enumerate, convert, count, summarize.

use eyre::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};

use crate::convert::{self, ConvertOutcome};

/// Name of the output subdirectory created inside the input directory.
pub const OUTPUT_DIR_NAME: &str = "converted files";

/// Configuration required to run one conversion batch.
/// This decouples the logic from how the arguments were obtained
/// (CLI argument or interactive prompt).
#[derive(Clone)]
pub struct ExportConfig {
    pub input_dir: PathBuf,
    pub verbose: bool,
    pub quiet: bool,
}

/// What a finished batch looked like.
#[derive(Debug, Clone, Copy)]
pub struct BatchSummary {
    pub attempted: usize,
    pub errors: usize,
}

impl BatchSummary {
    pub fn succeeded(&self) -> usize {
        self.attempted - self.errors
    }
}

/// Run one batch over `config.input_dir`.
///
/// Creates the output subdirectory up front (failure here terminates the run),
/// then converts every `.html` entry sequentially. A single-file failure is
/// counted and reported but never aborts the loop.
pub fn execute(config: &ExportConfig) -> Result<BatchSummary> {
    let output_dir = config.input_dir.join(OUTPUT_DIR_NAME);
    fs::create_dir_all(&output_dir).wrap_err_with(|| {
        format!("Failed to create output directory: {}", output_dir.display())
    })?;

    let files = collect_html_files(&config.input_dir)?;

    if files.is_empty() {
        if !config.quiet {
            eprintln!(
                "No HTML files found in {}.",
                config.input_dir.display()
            );
        }
        return Ok(BatchSummary { attempted: 0, errors: 0 });
    }

    let pb = if config.quiet {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(files.len() as u64);
        bar.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)",
            )
            .unwrap()
            .progress_chars("=>-"),
        );
        bar.println(format!("Found {} HTML file(s).", files.len()));
        bar
    };

    let mut errors = 0usize;
    for file in &files {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if config.verbose {
            pb.println(format!("Processing: {name}"));
        }
        match convert::convert(file, &output_dir, &pb) {
            ConvertOutcome::Converted(path) => {
                if config.verbose {
                    let md_name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    pb.println(format!("  -> Converted: {md_name}"));
                }
            }
            ConvertOutcome::NotFound => {
                errors += 1;
                pb.println(format!("Error: file not found - {}", file.display()));
            }
            ConvertOutcome::Failed(e) => {
                errors += 1;
                pb.println(format!("Error [{name}]: {e:#}"));
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();

    let summary = BatchSummary { attempted: files.len(), errors };

    if !config.quiet {
        let mut line = format!(
            "Done. Attempted {} file(s): {} converted.",
            summary.attempted,
            summary.succeeded()
        );
        if summary.errors > 0 {
            line.push_str(&format!(" Completed with {} error(s).", summary.errors));
        }
        eprintln!("{line}");
        eprintln!("Markdown notes written to: {}", output_dir.display());
    }

    Ok(summary)
}

/// Top-level entries of `dir` whose name ends in `.html`, case-insensitively.
/// Sorted so reruns process files in a stable order.
fn collect_html_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .wrap_err_with(|| format!("Failed to read input directory: {}", dir.display()))?;
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("html"))
        })
        .collect();
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn collects_html_case_insensitively_and_top_level_only() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.html"), "x").unwrap();
        fs::write(dir.path().join("b.HTML"), "x").unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();
        fs::write(dir.path().join("archive.zip"), "x").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/c.html"), "x").unwrap();

        let files = collect_html_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.html", "b.HTML"]);
    }
}
