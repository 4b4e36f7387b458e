//! Language tags for fenced code blocks.

/// Exact filenames are checked before extensions, so conventional names
/// without an extension (`Dockerfile`) still get a tag.
const LANGUAGES: &[(&str, &str)] = &[
    (".py", "python"),
    (".js", "javascript"),
    (".jsx", "jsx"),
    (".ts", "typescript"),
    (".tsx", "tsx"),
    (".html", "html"),
    (".css", "css"),
    (".scss", "scss"),
    (".json", "json"),
    (".xml", "xml"),
    (".md", "markdown"),
    (".yaml", "yaml"),
    (".yml", "yaml"),
    (".sh", "shell"),
    (".sql", "sql"),
    (".java", "java"),
    (".c", "c"),
    (".cpp", "cpp"),
    (".cs", "csharp"),
    (".go", "go"),
    (".php", "php"),
    (".rb", "ruby"),
    (".rs", "rust"),
    (".swift", "swift"),
    (".kt", "kotlin"),
    (".dockerfile", "dockerfile"),
    ("Dockerfile", "dockerfile"),
];

fn lookup(key: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, lang)| *lang)
}

/// Returns the extension of `file_name` including the leading dot.
///
/// Leading dots are not extension separators: `.bashrc` has no extension,
/// `.config.rs` has `.rs`.
fn extension(file_name: &str) -> Option<&str> {
    let trimmed = file_name.trim_start_matches('.');
    let offset = file_name.len() - trimmed.len();
    trimmed.rfind('.').map(|i| &file_name[offset + i..])
}

/// Maps a filename to the language tag used on its code block.
///
/// Returns an empty string when the name is not recognised, which renders as
/// an untagged block.
pub fn language_for(file_name: &str) -> &'static str {
    if let Some(lang) = lookup(file_name) {
        return lang;
    }
    extension(file_name)
        .and_then(|ext| lookup(&ext.to_lowercase()))
        .unwrap_or("")
}
