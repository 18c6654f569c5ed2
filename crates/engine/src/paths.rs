// crates/engine/src/paths.rs
//! Target directory resolution.
//!
//! The target is made absolute against the current directory and cleaned of
//! `.` and `..` components without touching the filesystem, so a symlinked
//! target keeps the name the user typed.

use crate::error::{EngineError, Result};
use std::path::{Component, Path, PathBuf};

/// Resolve and validate the directory to scan.
///
/// With `explicit == None` the directory containing the running executable is
/// used.
///
/// # Errors
///
/// - [`EngineError::Config`] if the path contains NUL bytes
/// - [`EngineError::ExecutableLocation`] if the default location is unknown
/// - [`EngineError::InvalidDirectory`] if the result is not an existing directory
pub fn resolve_target(explicit: Option<&Path>) -> Result<PathBuf> {
    let target = match explicit {
        Some(path) => {
            if path.to_string_lossy().contains('\0') {
                return Err(EngineError::Config("Path contains null bytes".into()));
            }
            absolutize(path).map_err(|e| {
                EngineError::Config(format!("Cannot resolve '{}': {e}", path.display()))
            })?
        }
        None => executable_dir()?,
    };

    if !target.is_dir() {
        return Err(EngineError::InvalidDirectory(target));
    }
    Ok(target)
}

/// Directory holding the running binary.
///
/// # Errors
///
/// Returns [`EngineError::ExecutableLocation`] when the platform cannot report
/// the executable path.
pub fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(EngineError::ExecutableLocation)?;
    let exe = absolutize(&exe).map_err(EngineError::ExecutableLocation)?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        EngineError::ExecutableLocation(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("'{}' has no parent directory", exe.display()),
        ))
    })
}

/// Join relative paths onto the current directory, then normalize.
fn absolutize(path: &Path) -> std::io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(normalize(path))
    } else {
        Ok(normalize(&std::env::current_dir()?.join(path)))
    }
}

/// Lexically drop `.` and fold `..` into its parent.
///
/// `..` at the root stays at the root.
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                Some(Component::CurDir | Component::ParentDir) | None => {
                    out.push(Component::ParentDir);
                }
            },
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                out.push(component);
            }
        }
    }
    if out.as_os_str().is_empty() {
        out.push(Component::CurDir);
    }
    out
}
