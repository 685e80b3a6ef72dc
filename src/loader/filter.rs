//! Compiled Keep/Ignore pattern matching for entry names.

use crate::error::{ConfigenError, Result};
use regex::Regex;

/// A compiled set of regex patterns matched against entry names.
///
/// A name matches when any pattern is found anywhere in it (search, not
/// full match). Compile once per load and reuse for every entry.
#[derive(Clone, Default)]
pub struct PatternSet {
    /// The compiled regex patterns paired with their original string representations.
    patterns: Vec<(Regex, String)>,
}

impl std::fmt::Debug for PatternSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.patterns.iter().map(|(_, s)| s))
            .finish()
    }
}

impl PatternSet {
    /// Compile a list of patterns.
    ///
    /// # Returns
    ///
    /// * `Ok(PatternSet)` - Successfully compiled patterns
    /// * `Err(ConfigenError::UserError)` - If any pattern fails to compile
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let mut compiled = Vec::with_capacity(patterns.len());

        for pattern in patterns {
            let pattern = pattern.as_ref();
            let regex = Regex::new(pattern).map_err(|e| {
                ConfigenError::UserError(format!("invalid regex pattern '{}': {}", pattern, e))
            })?;
            compiled.push((regex, pattern.to_string()));
        }

        Ok(Self { patterns: compiled })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Return the first pattern found in `name`, if any.
    pub fn find_match(&self, name: &str) -> Option<&str> {
        self.patterns
            .iter()
            .find(|(regex, _)| regex.is_match(name))
            .map(|(_, pattern)| pattern.as_str())
    }

    pub fn matches(&self, name: &str) -> bool {
        self.find_match(name).is_some()
    }
}

/// Why an entry was left out of a load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skip<'a> {
    /// Keep patterns are set and none matched the file name.
    NotKept,
    /// The name matched this ignore pattern.
    Ignored(&'a str),
}

/// Keep and Ignore filters applied during a directory walk.
///
/// Keep is an allow-list for files and runs first; Ignore applies to files
/// and directories alike and always wins.
#[derive(Debug, Clone, Default)]
pub struct Filters {
    keep: PatternSet,
    ignore: PatternSet,
}

impl Filters {
    /// Compile keep and ignore pattern lists. Empty lists filter nothing.
    pub fn new<S: AsRef<str>>(keep: &[S], ignore: &[S]) -> Result<Self> {
        Ok(Self {
            keep: PatternSet::new(keep)?,
            ignore: PatternSet::new(ignore)?,
        })
    }

    /// Check whether a file name should be loaded.
    pub fn check_file(&self, name: &str) -> std::result::Result<(), Skip<'_>> {
        if !self.keep.is_empty() && !self.keep.matches(name) {
            return Err(Skip::NotKept);
        }
        self.check_dir(name)
    }

    /// Check whether a directory name should be descended into.
    pub fn check_dir(&self, name: &str) -> std::result::Result<(), Skip<'_>> {
        match self.ignore.find_match(name) {
            Some(pattern) => Err(Skip::Ignored(pattern)),
            None => Ok(()),
        }
    }
}
