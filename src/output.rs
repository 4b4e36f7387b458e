//! Markdown rendering of the project map.
//!
//! The document is append-only: a title, then one section per file.
//!
//! ````text
//! # Mapa Projektu: `<project>`
//!
//! ---
//!
//! ## `<relative/path>`
//!
//! ```<language>
//! <contents>
//! ```
//! ````

use crate::error::ProjmapError;
use crate::language::language_for;
use crate::types::{FileEntry, FileOutcome};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;

/// Body written in place of contents when a file cannot be read.
pub const READ_ERROR_PREFIX: &str = "Nie udało się odczytać pliku";

/// Streams sections into any [`Write`] sink.
pub struct MarkdownEmitter<W: Write> {
    out: W,
    /// Reported in write errors.
    target: PathBuf,
}

impl<W: Write> MarkdownEmitter<W> {
    pub fn new(out: W, target: impl Into<PathBuf>) -> Self {
        Self {
            out,
            target: target.into(),
        }
    }

    /// Writes the document title.
    pub fn begin(&mut self, project_name: &str) -> Result<(), ProjmapError> {
        self.emit(&format!("# Mapa Projektu: `{}`\n\n", project_name))
    }

    /// Writes one file section, reading the file's contents from disk.
    ///
    /// A file that cannot be read is not an error: its block carries a short
    /// message and the outcome says so. Only failures on the sink are returned
    /// as errors.
    pub fn write_file(&mut self, entry: &FileEntry) -> Result<FileOutcome, ProjmapError> {
        let (body, outcome) = match read_lossy(&entry.path) {
            Ok(content) => (content, FileOutcome::Written),
            Err(e) => {
                #[cfg(feature = "logging")]
                tracing::debug!("Cannot read {}: {}", entry.path.display(), e);
                let reason = e.to_string();
                (
                    format!("{}: {}", READ_ERROR_PREFIX, reason),
                    FileOutcome::Unreadable(reason),
                )
            }
        };
        self.emit(&render_section(&entry.relative, language_for(&entry.name), &body))?;
        Ok(outcome)
    }

    /// Flushes the sink and hands it back.
    pub fn finish(mut self) -> Result<W, ProjmapError> {
        self.out
            .flush()
            .map_err(|e| ProjmapError::io(&self.target, e))?;
        Ok(self.out)
    }

    fn emit(&mut self, text: &str) -> Result<(), ProjmapError> {
        self.out
            .write_all(text.as_bytes())
            .map_err(|e| ProjmapError::io(&self.target, e))
    }
}

/// Invalid UTF-8 sequences become U+FFFD instead of failing the read.
fn read_lossy(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}

fn render_section(relative: &str, lang: &str, body: &str) -> String {
    let mut out = String::with_capacity(body.len() + relative.len() + 32);
    out.push_str("---\n\n");
    out.push_str(&format!("## `{}`\n\n```{}\n", relative, lang));
    out.push_str(body);
    // Exactly one newline is added, so the original contents can be recovered.
    out.push_str("\n```\n\n");
    out
}
