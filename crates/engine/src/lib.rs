// crates/engine/src/lib.rs
use std::path::Path;
use tracing::{debug, trace};

pub mod config;
pub mod error;
pub mod filesystem;
pub mod filter;
pub mod options;
pub mod paths;
pub mod processor;
pub mod stats;

use crate::config::Config;
use crate::error::Result;
use crate::filter::ExtensionFilter;
use crate::options::ProjectMode;
use crate::stats::{FileFailure, ProjectCount, Report, ScanResult};

/// Recursively count lines in every file under `directory` accepted by `filter`.
///
/// Unreadable files and unlistable directories never stop the scan. They are
/// collected in [`ScanResult::failures`] and contribute nothing to the total.
pub fn count_lines(directory: &Path, filter: &ExtensionFilter) -> ScanResult {
    debug!(directory = %directory.display(), "scanning");
    let mut scan = ScanResult::default();

    for candidate in filesystem::walk_files(directory, filter) {
        let outcome = candidate.and_then(|path| {
            let lines = processor::count_file_lines(&path)?;
            trace!(path = %path.display(), lines, "counted");
            Ok(lines)
        });
        if let Err(e) = &outcome {
            debug!(error = %e, "skipping unreadable entry");
        }
        scan.record(outcome);
    }

    debug!(
        directory = %directory.display(),
        total = scan.total,
        files = scan.files_counted,
        failures = scan.failures.len(),
        "scan finished"
    );
    scan
}

/// Count each visible immediate subdirectory of `target` as its own project.
///
/// With `ignore_zero`, projects with no lines are marked hidden but still
/// summed into the grand total.
///
/// # Errors
///
/// Fails only when `target` itself cannot be listed.
pub fn count_projects(
    target: &Path,
    filter: &ExtensionFilter,
    ignore_zero: bool,
) -> Result<Report> {
    count_projects_with(target, filter, ignore_zero, |_, _| {})
}

/// Like [`count_projects`], but hands each project to `on_project` as soon as
/// it is counted, together with the failures met while scanning it.
///
/// # Errors
///
/// Fails only when `target` itself cannot be listed.
pub fn count_projects_with<F>(
    target: &Path,
    filter: &ExtensionFilter,
    ignore_zero: bool,
    mut on_project: F,
) -> Result<Report>
where
    F: FnMut(&ProjectCount, &[FileFailure]),
{
    let mut projects = Vec::new();
    let mut failures = Vec::new();
    let mut grand_total = 0u64;

    for project in filesystem::list_projects(target)? {
        debug!(project = %project.name, "counting project");
        let scan = count_lines(&project.path, filter);
        grand_total += scan.total;
        let counted = ProjectCount {
            hidden: ignore_zero && scan.total == 0,
            name: project.name,
            lines: scan.total,
        };
        on_project(&counted, &scan.failures);
        failures.extend(scan.failures);
        projects.push(counted);
    }

    Ok(Report::Multiple {
        directory: target.to_path_buf(),
        projects,
        failures,
        grand_total,
    })
}

/// Resolve the target directory and run the configured mode.
///
/// # Errors
///
/// Returns an error if the target directory is invalid or, in multiple mode,
/// cannot be listed. Per-file problems are reported inside the [`Report`].
pub fn run(config: &Config) -> Result<Report> {
    run_with(config, |_, _| {})
}

/// [`run`] with a per-project hook; `on_project` is only called in
/// [`ProjectMode::Multiple`].
///
/// # Errors
///
/// Same as [`run`].
pub fn run_with<F>(config: &Config, on_project: F) -> Result<Report>
where
    F: FnMut(&ProjectCount, &[FileFailure]),
{
    let target = paths::resolve_target(config.dir.as_deref())?;

    match config.mode {
        ProjectMode::Single => {
            let scan = count_lines(&target, &config.filter);
            Ok(Report::Single {
                directory: target,
                extensions: config.filter.as_slice().map(<[String]>::to_vec),
                scan,
            })
        }
        ProjectMode::Multiple => {
            count_projects_with(&target, &config.filter, config.ignore_zero, on_project)
        }
    }
}
