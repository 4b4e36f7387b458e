//! Exact-basename exclusion.
//!
//! Names are compared verbatim against the final path component. There is no
//! glob or path matching: `build` excludes every directory or file called
//! `build`, at any depth.

use std::collections::BTreeSet;
use std::ffi::OsStr;

/// Basenames skipped unless the caller builds a custom [`ExclusionSet`].
pub const DEFAULT_EXCLUSIONS: &[&str] = &[
    ".git",
    ".next",
    "node_modules",
    "__pycache__",
    ".vscode",
    ".idea",
    ".env",
    ".expo",
    "venv",
    ".DS_Store",
    "package-lock.json",
    "next.config.ts",
    "eslint.config.mjs",
    "tsconfig.json",
    ".gitignore",
    "public",
    "yarn.lock",
    ".mvn",
];

/// An immutable set of basenames to leave out of the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionSet {
    names: BTreeSet<String>,
}

impl ExclusionSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_EXCLUSIONS.iter().copied())
    }

    /// Returns a new set holding every current name plus `extra`.
    pub fn union<I, S>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names = self.names.clone();
        names.extend(extra.into_iter().map(Into::into));
        Self { names }
    }

    pub fn excludes(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Non-UTF-8 names never match.
    pub fn excludes_os(&self, name: &OsStr) -> bool {
        name.to_str().is_some_and(|n| self.excludes(n))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates the names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::with_defaults()
    }
}
