// crates/cli/src/presentation.rs
use count_loc_engine::options::OutputFormat;
use count_loc_engine::stats::{FileFailure, ProjectCount, Report};
use std::io::{self, Write};

/// `Could not read <path>: <detail>` for every failure, on stderr.
pub fn print_failures(failures: &[FileFailure]) {
    let stderr = io::stderr();
    let mut err = stderr.lock();
    for failure in failures {
        let _ = writeln!(err, "{}", failure_line(failure));
    }
}

#[must_use]
pub fn failure_line(failure: &FileFailure) -> String {
    format!(
        "Could not read {}: {}",
        failure.path.display(),
        failure.error
    )
}

/// Print one project as soon as it is counted: its failures to stderr, then
/// its line to stdout unless it is hidden.
///
/// # Errors
///
/// Returns any error raised while writing to stdout.
pub fn print_project(project: &ProjectCount, failures: &[FileFailure]) -> io::Result<()> {
    print_failures(failures);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if !project.hidden {
        write_project_line(&mut out, project)?;
    }
    out.flush()
}

/// Print the trailer that closes a streamed multiple-projects listing.
///
/// # Errors
///
/// Returns any error raised while writing to stdout.
pub fn print_grand_total(grand_total: u64) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_grand_total(&mut out, grand_total)?;
    out.flush()
}

/// Render the report to stdout.
///
/// # Errors
///
/// Returns any error raised while writing to stdout.
pub fn print_report(report: &Report, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, report, format)?;
    out.flush()
}

/// Render the report into any writer.
///
/// # Errors
///
/// Returns any error raised by `out`.
pub fn write_report<W: Write>(out: &mut W, report: &Report, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_text(out, report),
        OutputFormat::Json => write_json(out, report),
    }
}

fn write_text<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    match report {
        Report::Single {
            directory,
            extensions,
            scan,
        } => {
            let listed = extensions
                .as_deref()
                .map_or_else(|| "*".to_string(), |list| list.join(", "));
            writeln!(out, "Directory: {}", directory.display())?;
            writeln!(out, "Extensions: {listed}")?;
            writeln!(out, "Total lines of code: {}", scan.total)?;
        }
        Report::Multiple { grand_total, .. } => {
            for project in report.visible_projects() {
                write_project_line(out, project)?;
            }
            write_grand_total(out, *grand_total)?;
        }
    }
    Ok(())
}

fn write_project_line<W: Write>(out: &mut W, project: &ProjectCount) -> io::Result<()> {
    writeln!(out, "{}: {}", project.name, project.lines)
}

fn write_grand_total<W: Write>(out: &mut W, grand_total: u64) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Grand Total (all subfolders): {grand_total}")
}

fn write_json<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    let value = match report {
        Report::Single {
            directory,
            extensions,
            scan,
        } => serde_json::json!({
            "mode": "single",
            "directory": directory.display().to_string(),
            "extensions": extensions,
            "total_lines": scan.total,
            "files": scan.files_counted,
            "failures": scan.failures.len(),
        }),
        Report::Multiple {
            directory,
            failures,
            grand_total,
            ..
        } => {
            let projects: Vec<_> = report.visible_projects().collect();
            serde_json::json!({
                "mode": "multiple",
                "directory": directory.display().to_string(),
                "projects": projects,
                "grand_total": grand_total,
                "failures": failures.len(),
            })
        }
    };

    serde_json::to_writer_pretty(&mut *out, &value)?;
    writeln!(out)
}
