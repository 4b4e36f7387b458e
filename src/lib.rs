//! # Projmap
//!
//! `projmap` walks a project directory and writes a single Markdown document
//! holding every included file's relative path and contents, each in a code
//! block tagged for syntax highlighting. The result is a readable snapshot of
//! a codebase, for people or for LLM prompts.
//!
//! Files and directories are left out by exact basename (see
//! [`ExclusionSet`]); excluded directories are never entered. Entries are
//! visited depth-first and sorted by name inside each directory, so the same
//! tree always produces the same document.
//!
//! # Features
//!
//! - `logging` (default): debug and warning events via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use projmap::{MapBuilder, MapEvent, map_project};
//!
//! let options = MapBuilder::new(".")
//!     .output("project_map.md")
//!     .exclude(["target", "dist"])
//!     .build();
//!
//! let summary = map_project(&options, |event| {
//!     if let MapEvent::File(entry) = event {
//!         println!("{}", entry.relative);
//!     }
//! })
//! .expect("Failed to map project");
//!
//! println!("{} files written to {}", summary.files, summary.output.display());
//! ```

mod engine;
mod error;
mod exclude;
mod language;
mod options;
pub mod output;
mod types;

pub use engine::map_project;
pub use error::ProjmapError;
pub use exclude::{DEFAULT_EXCLUSIONS, ExclusionSet};
pub use language::language_for;
pub use options::{DEFAULT_OUTPUT, MapBuilder, MapOptions};
pub use types::{FileEntry, FileOutcome, MapEvent, MapSummary};
