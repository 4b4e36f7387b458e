use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum ProjmapError {
    #[error("'{}' is not a valid directory", .0.display())]
    InvalidRoot(PathBuf),
    #[error("cannot read project directory {}: {source}", .path.display())]
    RootUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot write output file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
impl ProjmapError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ProjmapError::Io {
            path: path.into(),
            source,
        }
    }
}
