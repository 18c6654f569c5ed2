use crate::error::EngineError;
use serde::Serialize;
use std::path::PathBuf;

/// A file or directory that could not be counted.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: EngineError,
}

/// Outcome of one recursive count.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub total: u64,
    pub files_counted: u64,
    pub failures: Vec<FileFailure>,
}

impl ScanResult {
    /// Fold one file's outcome into the running totals.
    pub fn record(&mut self, outcome: crate::error::Result<u64>) {
        match outcome {
            Ok(lines) => {
                self.total += lines;
                self.files_counted += 1;
            }
            Err(error) => self.record_failure(error),
        }
    }

    pub fn record_failure(&mut self, error: EngineError) {
        let path = error.path().map(PathBuf::from).unwrap_or_default();
        self.failures.push(FileFailure { path, error });
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCount {
    pub name: String,
    pub lines: u64,
    /// Set when `--ignore-zero` hides this project from the listing.
    #[serde(skip)]
    pub hidden: bool,
}

/// Everything one invocation produced, ready for rendering.
#[derive(Debug)]
pub enum Report {
    Single {
        directory: PathBuf,
        extensions: Option<Vec<String>>,
        scan: ScanResult,
    },
    Multiple {
        directory: PathBuf,
        projects: Vec<ProjectCount>,
        failures: Vec<FileFailure>,
        grand_total: u64,
    },
}

impl Report {
    /// Failures in the order they were met.
    #[must_use]
    pub fn failures(&self) -> &[FileFailure] {
        match self {
            Self::Single { scan, .. } => &scan.failures,
            Self::Multiple { failures, .. } => failures,
        }
    }

    /// Projects that should be listed, skipping hidden zero-count entries.
    pub fn visible_projects(&self) -> impl Iterator<Item = &ProjectCount> {
        let projects: &[ProjectCount] = match self {
            Self::Single { .. } => &[],
            Self::Multiple { projects, .. } => projects,
        };
        projects.iter().filter(|p| !p.hidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_record_outcomes() {
        let mut scan = ScanResult::default();
        scan.record(Ok(3));
        scan.record(Ok(0));
        scan.record(Err(EngineError::FileRead {
            path: PathBuf::from("locked.py"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        }));
        scan.record(Ok(2));

        assert_eq!(scan.total, 5);
        assert_eq!(scan.files_counted, 3);
        assert_eq!(scan.failures.len(), 1);
        assert_eq!(scan.failures[0].path, Path::new("locked.py"));
    }

    #[test]
    fn test_visible_projects_skip_hidden() {
        let report = Report::Multiple {
            directory: PathBuf::from("/work"),
            projects: vec![
                ProjectCount {
                    name: "empty".into(),
                    lines: 0,
                    hidden: true,
                },
                ProjectCount {
                    name: "proj".into(),
                    lines: 5,
                    hidden: false,
                },
            ],
            failures: vec![],
            grand_total: 5,
        };
        let names: Vec<_> = report.visible_projects().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["proj"]);
    }
}
