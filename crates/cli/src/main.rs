use clap::Parser;
use count_loc_cli::args::Args;
use count_loc_cli::config::Config;
use count_loc_cli::{logging, presentation};
use count_loc_engine::error::EngineError;
use count_loc_engine::options::{OutputFormat, ProjectMode};
use count_loc_engine::stats::Report;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::setup_logging(args.verbose);

    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // text listings of several projects are printed while the scan runs
    let streaming = config.mode == ProjectMode::Multiple && config.format == OutputFormat::Text;
    let mut output: std::io::Result<()> = Ok(());

    let outcome = if streaming {
        count_loc_engine::run_with(&config, |project, failures| {
            if output.is_ok() {
                output = presentation::print_project(project, failures);
            }
        })
    } else {
        count_loc_engine::run(&config)
    };

    match outcome {
        Ok(report) => {
            let written = output.and_then(|()| match &report {
                Report::Multiple { grand_total, .. } if streaming => {
                    presentation::print_grand_total(*grand_total)
                }
                _ => {
                    presentation::print_failures(report.failures());
                    presentation::print_report(&report, config.format)
                }
            });
            if let Err(e) = written {
                eprintln!("Output Error: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e @ EngineError::InvalidDirectory(_)) => {
            println!("Error: {e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}
