//! Lookup of values by dotted path.
//!
//! Values are registered up front under names like `text.camelcase` and
//! loaded back by the same name. Everything before the last dot is the
//! module, the last segment is the item.

use crate::error::{Error, Result};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static DOTTED_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$")
        .expect("dotted path pattern should be valid")
});

/// Splits a dotted path into `(module, item)`. A path without a dot has an
/// empty module.
pub fn split_path(path: &str) -> Result<(&str, &str)> {
    if !DOTTED_PATH.is_match(path) {
        return Err(Error::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(path.rsplit_once('.').unwrap_or(("", path)))
}

/// Table of values addressed by dotted path
#[derive(Debug, Clone)]
pub struct Registry<V> {
    entries: BTreeMap<String, V>,
}

impl<V> Default for Registry<V> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<V> Registry<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a value, returning whatever was registered at that path before
    pub fn register(&mut self, path: &str, value: V) -> Result<Option<V>> {
        split_path(path)?;
        ::log::trace!("Registering {}", path);
        Ok(self.entries.insert(path.to_string(), value))
    }

    /// Builder form of [`Registry::register`]
    pub fn with(mut self, path: &str, value: V) -> Result<Self> {
        self.register(path, value)?;
        Ok(self)
    }

    /// Look up the value registered at `path`
    pub fn load(&self, path: &str) -> Result<&V> {
        split_path(path)?;
        self.entries.get(path).ok_or_else(|| {
            ::log::debug!("No entry for {} among {} entries", path, self.entries.len());
            Error::NotFound {
                path: path.to_string(),
            }
        })
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Items registered directly in `module`, in name order
    pub fn items_in<'a>(&'a self, module: &'a str) -> impl Iterator<Item = (&'a str, &'a V)> + 'a {
        self.entries.iter().filter_map(move |(path, value)| {
            let (parent, item) = path.rsplit_once('.').unwrap_or(("", path.as_str()));
            (parent == module).then_some((item, value))
        })
    }

    /// All registered paths, in order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
