// crates/cli/src/args.rs
use crate::options::OutputFormat;
use clap::{ArgAction, Parser, ValueHint};
use std::path::PathBuf;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "count_loc",
    version = crate::VERSION,
    about = "Count lines of code in a directory for specific file extensions.",
    after_help = "Examples:\n  \
        count_loc --dir ~/code --extensions .cpp .py .swift\n  \
        count_loc --dir ~/code --multiple --ignore-zero"
)]
pub struct Args {
    /// Directory to scan. Defaults to the directory holding this executable.
    #[arg(long, value_name = "PATH", value_hint = ValueHint::DirPath)]
    pub dir: Option<PathBuf>,

    /// File-name suffixes to count (e.g. .swift .py .cpp). Defaults to 20 common languages.
    #[arg(long, num_args = 1.., value_name = "SUFFIX")]
    pub extensions: Option<Vec<String>>,

    /// Count every file regardless of its name.
    #[arg(long, conflicts_with = "extensions")]
    pub all: bool,

    /// Treat each subdirectory as a separate project and print a count per folder.
    #[arg(long)]
    pub multiple: bool,

    /// Omit folders with zero lines from the per-folder listing.
    #[arg(long)]
    pub ignore_zero: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Log progress to stderr (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["count_loc"]).unwrap();
        assert!(args.dir.is_none());
        assert!(args.extensions.is_none());
        assert!(!args.all && !args.multiple && !args.ignore_zero);
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_extension_list() {
        let args =
            Args::try_parse_from(["count_loc", "--extensions", ".py", ".rs", "--multiple"]).unwrap();
        assert_eq!(args.extensions, Some(vec![".py".into(), ".rs".into()]));
        assert!(args.multiple);
    }

    #[test]
    fn test_extensions_need_a_value() {
        assert!(Args::try_parse_from(["count_loc", "--extensions"]).is_err());
    }

    #[test]
    fn test_all_conflicts_with_extensions() {
        assert!(Args::try_parse_from(["count_loc", "--all", "--extensions", ".py"]).is_err());
    }

    #[test]
    fn test_verbosity_counts() {
        let args = Args::try_parse_from(["count_loc", "-vv", "--format", "json"]).unwrap();
        assert_eq!(args.verbose, 2);
        assert_eq!(args.format, OutputFormat::Json);
    }
}
