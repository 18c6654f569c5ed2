use crate::filter::ExtensionFilter;
use crate::options::{OutputFormat, ProjectMode};
use derive_builder::Builder;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Directory to scan. `None` means the directory holding the executable.
    #[builder(default)]
    pub dir: Option<PathBuf>,
    #[builder(default)]
    pub filter: ExtensionFilter,
    #[builder(default)]
    pub mode: ProjectMode,
    /// Hide `name: 0` lines in multiple mode. Totals are unaffected.
    #[builder(default)]
    pub ignore_zero: bool,
    #[builder(default)]
    pub format: OutputFormat,
}
