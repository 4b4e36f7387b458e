use std::path::PathBuf;

/// A file accepted by the walker, ready to be written into the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Absolute path used to read the file.
    pub path: PathBuf,
    /// Path relative to the project root, always `/`-separated.
    pub relative: String,
    /// Final path component, used for language detection.
    pub name: String,
}

/// What happened when a file's contents were inlined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Written,
    /// The file could not be opened or read; the block holds an error
    /// message instead of contents.
    Unreadable(String),
}

/// Progress notifications emitted while the map is being written.
#[derive(Debug)]
pub enum MapEvent<'a> {
    /// Sent just before a file's section is written.
    File(&'a FileEntry),
    Unreadable { entry: &'a FileEntry, reason: &'a str },
    /// A directory below the root could not be listed; the walk continues.
    WalkError(String),
}

/// Totals for a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapSummary {
    pub output: PathBuf,
    pub files: usize,
    pub unreadable: usize,
    pub walk_errors: usize,
}
