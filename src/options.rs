use crate::exclude::ExclusionSet;
use std::path::PathBuf;
/// Output filename used when none is given.
pub const DEFAULT_OUTPUT: &str = "project_map.md";
#[derive(Debug, Clone)]
pub struct MapOptions {
    pub root: PathBuf,
    pub output: PathBuf,
    pub exclusions: ExclusionSet,
}
impl Default for MapOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT),
            exclusions: ExclusionSet::with_defaults(),
        }
    }
}
#[derive(Debug, Default)]
pub struct MapBuilder {
    options: MapOptions,
}
impl MapBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: MapOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output = path.into();
        self
    }
    /// Adds names to the current exclusion set; never removes any.
    pub fn exclude<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.exclusions = self.options.exclusions.union(names);
        self
    }
    /// Replaces the exclusion set, defaults included.
    pub fn exclusions(mut self, set: ExclusionSet) -> Self {
        self.options.exclusions = set;
        self
    }
    pub fn build(self) -> MapOptions {
        self.options
    }
}
