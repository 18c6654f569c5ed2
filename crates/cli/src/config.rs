// crates/cli/src/config.rs
use crate::args::Args;
use crate::options;
pub use count_loc_engine::config::{Config, ConfigBuilder};
use count_loc_engine::error::EngineError;
use count_loc_engine::filter::ExtensionFilter;
use count_loc_engine::options::{self as engine_options, DEFAULT_EXTENSIONS, ProjectMode};

impl TryFrom<Args> for Config {
    type Error = EngineError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        config_from_args(args, DEFAULT_EXTENSIONS)
    }
}

/// Build the engine configuration, taking the fallback suffix list as input.
///
/// # Errors
///
/// Returns [`EngineError::Config`] if the extension list is unusable.
pub fn config_from_args(args: Args, defaults: &[&str]) -> Result<Config, EngineError> {
    let filter = ExtensionFilter::resolve(args.extensions, args.all, defaults)?;
    let mode = if args.multiple {
        ProjectMode::Multiple
    } else {
        ProjectMode::Single
    };

    ConfigBuilder::default()
        .dir(args.dir)
        .filter(filter)
        .mode(mode)
        .ignore_zero(args.ignore_zero)
        .format(engine_options::OutputFormat::from(args.format))
        .build()
        .map_err(|e| EngineError::Config(e.to_string()))
}

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(options::OutputFormat, engine_options::OutputFormat, Text, Json);
