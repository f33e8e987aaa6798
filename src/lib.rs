//! # keep-note-export
//!
//! A CLI tool that converts a [Google Keep](https://keep.google.com) Takeout
//! export into local Markdown files.
//!
//! ## What it does
//!
//! Takeout ships every Keep note as a standalone HTML file. This tool walks a
//! chosen export folder, pulls the note title and content out of each HTML
//! document, flattens Keep's checkbox lists into Markdown task-list syntax
//! (`- [x] Milk`), renders the rest of the content to Markdown, and writes one
//! `.md` file per note into a `converted files/` subdirectory.
//!
//! The source HTML files are never modified.
//!
//! ## Usage
//!
//! ```sh
//! # Convert a Takeout folder
//! keep-note-export ~/Takeout/Keep
//!
//! # Or run without arguments and enter the folder when prompted
//! keep-note-export
//! ```
//!
//! A single failing note never aborts the batch; it is reported in the final
//! summary and the remaining notes are still converted.
//!
//! ## Compatibility
//!
//! Tracks the (undocumented) HTML structure of Google Takeout's Keep export:
//! `div.title` for the note title, `div.note-content` (older exports:
//! `div.content`) for the body. If a Takeout format change breaks extraction,
//! please [open an issue](https://github.com/egemengol/keep-note-export/issues).

pub mod batch;
pub mod checklist;
pub mod convert;
pub mod picker;
pub mod sanitize;
pub mod utils;
