//! Per-note conversion: one Keep HTML file in, one Markdown file out.

use eyre::{Context, Result};
use indicatif::ProgressBar;
use scraper::{ElementRef, Html, Selector};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::checklist;
use crate::sanitize::{UNTITLED, sanitize};
use crate::utils::{render_markdown, stripped_text};

/// Body written when both the normalized and the raw rendering attempts fail.
pub const CONVERSION_FAILED_BODY: &str = "[Content Conversion Failed]";

/// Result of converting a single note.
#[derive(Debug)]
pub enum ConvertOutcome {
    /// The Markdown file was written to the contained path.
    Converted(PathBuf),
    /// The source file disappeared between enumeration and open.
    NotFound,
    /// Anything else went wrong; the batch moves on to the next file.
    Failed(eyre::Report),
}

/// One parsed Keep note, read once per input file.
pub struct SourceNote {
    document: Html,
    file_name: String,
}

impl SourceNote {
    pub fn load(path: &Path) -> io::Result<Self> {
        let html = fs::read_to_string(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self {
            document: Html::parse_document(&html),
            file_name,
        })
    }

    /// Trimmed text of the `div.title` element, if the note has one.
    pub fn title(&self) -> Option<String> {
        let sel = Selector::parse("div.title").unwrap();
        self.document.select(&sel).next().map(|el| stripped_text(&el))
    }

    /// The note's content container: `div.note-content`, or `div.content` in
    /// older Takeout exports.
    pub fn content(&self) -> Option<ElementRef<'_>> {
        let primary = Selector::parse("div.note-content").unwrap();
        let fallback = Selector::parse("div.content").unwrap();
        self.document
            .select(&primary)
            .next()
            .or_else(|| self.document.select(&fallback).next())
    }

    /// Title for the converted note: the title element's text, the file stem
    /// when there is no title element, and "Untitled Note" when neither
    /// yields anything. Never empty.
    pub fn resolve_title(&self) -> String {
        let candidate = self.title().unwrap_or_else(|| {
            Path::new(&self.file_name)
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default()
        });
        if candidate.is_empty() {
            UNTITLED.to_string()
        } else {
            candidate
        }
    }
}

/// Convert the note at `source` into a Markdown file under `output_dir`.
///
/// `output_dir` is always the batch's designated output directory, never the
/// source file's own directory. An existing file with the same sanitized
/// title is overwritten.
pub fn convert(source: &Path, output_dir: &Path, pb: &ProgressBar) -> ConvertOutcome {
    match convert_inner(source, output_dir, pb) {
        Ok(path) => ConvertOutcome::Converted(path),
        Err(e) => {
            let not_found = e
                .downcast_ref::<io::Error>()
                .is_some_and(|io_err| io_err.kind() == io::ErrorKind::NotFound);
            if not_found {
                ConvertOutcome::NotFound
            } else {
                ConvertOutcome::Failed(e)
            }
        }
    }
}

fn convert_inner(source: &Path, output_dir: &Path, pb: &ProgressBar) -> Result<PathBuf> {
    let note = SourceNote::load(source)?;

    let title = note.resolve_title();
    let target = output_dir.join(format!("{}.md", sanitize(&title)));

    let body = match note.content() {
        Some(container) => render_body(container, &note.file_name, pb),
        None => {
            pb.println(format!(
                "  - Warning: no content section in {}; writing title only.",
                note.file_name
            ));
            String::new()
        }
    };

    let text = format!("# {title}\n\n{body}");
    fs::write(&target, text)
        .wrap_err_with(|| format!("Failed to write: {}", target.display()))?;
    Ok(target)
}

/// Render the content container through an ordered fallback chain:
/// checklist-normalized rendering, then raw rendering, then a literal failure
/// marker. Each tier only runs if the previous one failed, and a tier failure
/// costs at most checkbox fidelity, never note content.
fn render_body(container: ElementRef, source_name: &str, pb: &ProgressBar) -> String {
    match render_normalized(container) {
        Ok(body) => body,
        Err(e) => {
            pb.println(format!(
                "  - Warning: checklist handling failed for {source_name}: {e:#}; using raw content."
            ));
            match render_markdown(&container.html()) {
                Ok(body) => body,
                Err(e) => {
                    pb.println(format!(
                        "  - Error: raw conversion also failed for {source_name}: {e:#}"
                    ));
                    CONVERSION_FAILED_BODY.to_string()
                }
            }
        }
    }
}

fn render_normalized(container: ElementRef) -> Result<String> {
    let normalized = checklist::normalize(container);
    let rendered = render_markdown(&normalized.html)?;
    Ok(normalized.finish(&rendered))
}
