use crate::error::{EngineError, Result};
use crate::filter::ExtensionFilter;
use ignore::{DirEntry, WalkBuilder};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Sequential recursive walk yielding the files `filter` accepts.
///
/// Nothing is pruned: hidden entries and ignore files are treated like any
/// other path. Symlinked directories below `root` are not entered; symlinks to
/// anything else are yielded as files. Directories that cannot be listed come
/// back as [`EngineError::Walk`] items and the walk moves on.
pub fn walk_files<'a>(
    root: &Path,
    filter: &'a ExtensionFilter,
) -> impl Iterator<Item = Result<PathBuf>> + 'a {
    let fallback = root.to_path_buf();
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .threads(1)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    walker.filter_map(move |entry| match entry {
        Ok(entry) => {
            if entry.depth() == 0 || !is_countable(&entry) {
                return None;
            }
            filter
                .matches(entry.path())
                .then(|| Ok(entry.into_path()))
        }
        Err(err) => {
            let (path, source) = split_walk_error(err, &fallback);
            Some(Err(EngineError::Walk { path, source }))
        }
    })
}

fn is_countable(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        // resolves the link; a dangling one is still a file to try
        Some(ft) if ft.is_symlink() => !entry.path().is_dir(),
        _ => false,
    }
}

/// Pull the offending path out of a walk error so diagnostics can name it.
fn split_walk_error(err: ignore::Error, fallback: &Path) -> (PathBuf, ignore::Error) {
    match err {
        ignore::Error::WithPath { path, err } => (path, *err),
        ignore::Error::WithDepth { err, .. } => split_walk_error(*err, fallback),
        other => (fallback.to_path_buf(), other),
    }
}

/// A visible immediate subdirectory of the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDir {
    pub name: String,
    pub path: PathBuf,
}

/// Immediate subdirectories of `target`, sorted by name.
///
/// Names starting with `.` and entries that are not directories (after
/// following symlinks) are left out.
///
/// # Errors
///
/// Returns [`EngineError::ListDirectory`] if `target` cannot be read.
pub fn list_projects(target: &Path) -> Result<Vec<ProjectDir>> {
    let list_err = |source| EngineError::ListDirectory {
        path: target.to_path_buf(),
        source,
    };

    let mut names: Vec<OsString> = std::fs::read_dir(target)
        .map_err(list_err)?
        .map(|entry| entry.map(|e| e.file_name()))
        .collect::<std::io::Result<_>>()
        .map_err(list_err)?;
    names.sort();

    Ok(names
        .into_iter()
        .filter(|name| !name.as_encoded_bytes().starts_with(b"."))
        .map(|name| {
            let path = target.join(&name);
            ProjectDir {
                name: name.to_string_lossy().into_owned(),
                path,
            }
        })
        .filter(|project| project.path.is_dir())
        .collect())
}
