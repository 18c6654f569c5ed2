//! File-name suffix filtering.
//!
//! Matching is a plain `ends_with` on the file name, not an extension parse:
//! `archive.tar.gz` is accepted by `.gz`, by `.tar.gz` and by `ar.gz` alike.

use crate::error::{EngineError, Result};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionFilter {
    /// Every file is counted.
    Any,
    /// Files whose name ends with one of these suffixes are counted.
    Suffixes(Vec<String>),
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        Self::from_defaults(crate::options::DEFAULT_EXTENSIONS)
    }
}

impl ExtensionFilter {
    /// Build a suffix filter, dropping repeated entries but keeping first-seen order.
    pub fn suffixes<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for suffix in suffixes {
            let suffix = suffix.into();
            if !unique.contains(&suffix) {
                unique.push(suffix);
            }
        }
        Self::Suffixes(unique)
    }

    #[must_use]
    pub fn from_defaults(defaults: &[&str]) -> Self {
        Self::suffixes(defaults.iter().copied())
    }

    /// Pick the active filter from what the user asked for.
    ///
    /// `all` wins over everything, then an explicit list, then `defaults`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] when an explicit list is empty or holds an
    /// empty suffix.
    pub fn resolve(explicit: Option<Vec<String>>, all: bool, defaults: &[&str]) -> Result<Self> {
        if all {
            return Ok(Self::Any);
        }
        match explicit {
            None => Ok(Self::from_defaults(defaults)),
            Some(list) if list.is_empty() => Err(EngineError::Config(
                "at least one extension is required".into(),
            )),
            Some(list) if list.iter().any(String::is_empty) => Err(EngineError::Config(
                "extensions must not be empty strings".into(),
            )),
            Some(list) => Ok(Self::suffixes(list)),
        }
    }

    #[must_use]
    pub fn matches_name(&self, name: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Suffixes(list) => list.iter().any(|suffix| name.ends_with(suffix.as_str())),
        }
    }

    /// Test the final component of `path`, byte for byte, so names that are
    /// not valid UTF-8 are matched too.
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        match self {
            Self::Any => true,
            Self::Suffixes(list) => path.file_name().is_some_and(|name| {
                let name = name.as_encoded_bytes();
                list.iter().any(|suffix| name.ends_with(suffix.as_bytes()))
            }),
        }
    }

    /// Suffixes in display order, or `None` for [`ExtensionFilter::Any`].
    #[must_use]
    pub fn as_slice(&self) -> Option<&[String]> {
        match self {
            Self::Any => None,
            Self::Suffixes(list) => Some(list),
        }
    }

    /// `".py, .rs"` style listing, `*` when every file is accepted.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Any => "*".to_string(),
            Self::Suffixes(list) => list.join(", "),
        }
    }
}
