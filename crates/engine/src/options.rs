/// Suffixes counted when no `--extensions` list is given.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    ".py", ".js", ".java", ".c", ".cpp", ".cs", ".php", ".ts", ".rb", ".swift", ".go", ".kt", ".r",
    ".m", ".h", ".scala", ".sh", ".dart", ".rs", ".ps1",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// How the target directory is split into counted units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectMode {
    /// The whole tree is one project.
    #[default]
    Single,
    /// Every visible immediate subdirectory is its own project.
    Multiple,
}
