use crate::error::ProjmapError;
use crate::exclude::ExclusionSet;
use crate::options::MapOptions;
use crate::output::MarkdownEmitter;
use crate::types::{FileEntry, FileOutcome, MapEvent, MapSummary};
use ignore::{DirEntry, WalkBuilder};
use std::fs::{self, File};
use std::cmp::Ordering;
use std::io::BufWriter;
use std::path::{Component, Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;
/// Either a file to emit or a non-fatal traversal error.
enum Visit {
    File(FileEntry),
    Error(String),
}
struct Walker {
    inner: ignore::Walk,
    root: PathBuf,
    /// Canonical path of the map being written, if it already exists.
    skip: Option<PathBuf>,
}
impl Walker {
    fn new(root: &Path, exclusions: &ExclusionSet, skip: Option<PathBuf>) -> Self {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_path(files_first);
        let exclusions = exclusions.clone();
        builder.filter_entry(move |entry| {
            entry.depth() == 0 || !exclusions.excludes_os(entry.file_name())
        });
        Self {
            inner: builder.build(),
            root: root.to_path_buf(),
            skip,
        }
    }
    fn into_iter(self) -> impl Iterator<Item = Visit> {
        let Walker { inner, root, skip } = self;
        inner.filter_map(move |result| match result {
            Ok(entry) => accept(&root, skip.as_deref(), entry).map(Visit::File),
            Err(e) => Some(Visit::Error(e.to_string())),
        })
    }
}
/// Files sort before directories, then by name, so a directory's own files
/// are listed before anything found beneath it.
fn files_first(a: &Path, b: &Path) -> Ordering {
    (a.is_dir(), a.file_name()).cmp(&(b.is_dir(), b.file_name()))
}
/// Decides whether a walked entry is a file section, and builds it.
fn accept(root: &Path, skip: Option<&Path>, entry: DirEntry) -> Option<FileEntry> {
    if entry.depth() == 0 {
        return None;
    }
    let file_type = entry.file_type()?;
    if file_type.is_dir() {
        return None;
    }
    if file_type.is_symlink() {
        // Links to directories are listed but never followed.
        if entry.path().is_dir() {
            #[cfg(feature = "logging")]
            tracing::debug!("Skipping directory symlink: {}", entry.path().display());
            return None;
        }
    } else if !file_type.is_file() {
        #[cfg(feature = "logging")]
        tracing::debug!("Skipping special file: {}", entry.path().display());
        return None;
    }
    if let Some(skip) = skip {
        if skip.file_name() == Some(entry.file_name())
            && fs::canonicalize(entry.path()).is_ok_and(|p| p == skip)
        {
            #[cfg(feature = "logging")]
            tracing::debug!("Skipping output file: {}", entry.path().display());
            return None;
        }
    }
    let relative = relative_path(root, entry.path())?;
    Some(FileEntry {
        path: entry.path().to_path_buf(),
        relative,
        name: entry.file_name().to_string_lossy().into_owned(),
    })
}
/// Joins the components below `root` with `/`, whatever the host separator.
fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<_> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}
/// Resolves and checks the project root before anything is written.
///
/// Returns the directory to walk and the name used in the title.
fn resolve_root(root: &Path) -> Result<(PathBuf, String), ProjmapError> {
    let absolute = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
    if !absolute.is_dir() {
        return Err(ProjmapError::InvalidRoot(absolute));
    }
    let walk_root = fs::canonicalize(&absolute).map_err(|source| ProjmapError::RootUnreadable {
        path: absolute.clone(),
        source,
    })?;
    fs::read_dir(&walk_root).map_err(|source| ProjmapError::RootUnreadable {
        path: absolute.clone(),
        source,
    })?;
    let name = project_name(&absolute, &walk_root);
    Ok((walk_root, name))
}
/// Final component of the root; empty for a filesystem root such as `/`.
fn project_name(absolute: &Path, walk_root: &Path) -> String {
    absolute
        .file_name()
        .or_else(|| walk_root.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
/// Writes the project map described by `options`.
///
/// `progress` is called for every file before its section is written, for
/// every file that could not be read, and for every directory the walk could
/// not list. None of those stop the run; only an invalid root or a failure to
/// write the output does.
pub fn map_project<F>(options: &MapOptions, mut progress: F) -> Result<MapSummary, ProjmapError>
where
    F: FnMut(MapEvent<'_>),
{
    #[cfg(feature = "logging")]
    tracing::debug!("Mapping project at {}", options.root.display());
    let (walk_root, name) = resolve_root(&options.root)?;
    let file = File::create(&options.output).map_err(|e| ProjmapError::io(&options.output, e))?;
    let skip = fs::canonicalize(&options.output).ok();
    let mut emitter = MarkdownEmitter::new(BufWriter::new(file), &options.output);
    emitter.begin(&name)?;
    let mut summary = MapSummary {
        output: options.output.clone(),
        files: 0,
        unreadable: 0,
        walk_errors: 0,
    };
    for visit in Walker::new(&walk_root, &options.exclusions, skip).into_iter() {
        match visit {
            Visit::File(entry) => {
                progress(MapEvent::File(&entry));
                if let FileOutcome::Unreadable(reason) = emitter.write_file(&entry)? {
                    summary.unreadable += 1;
                    progress(MapEvent::Unreadable {
                        entry: &entry,
                        reason: &reason,
                    });
                }
                summary.files += 1;
            }
            Visit::Error(message) => {
                #[cfg(feature = "logging")]
                tracing::debug!("Walk error: {}", message);
                summary.walk_errors += 1;
                progress(MapEvent::WalkError(message));
            }
        }
    }
    emitter.finish()?;
    Ok(summary)
}
