// CLASSIFICATION: COMMUNITY
// Filename: props.rs v0.4
// Author: Lukas Bower
// Date Modified: 2026-02-03

//! Property store seam.
//!
//! Android exposes a process-wide property space through the bionic
//! `__system_property_*` calls. This module models the subset the vendor
//! init hook needs as a trait, so the resolver takes the store as an
//! injected capability instead of reaching for a hidden global.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use log::debug;
use thiserror::Error;

/// Key-value registry with Android property-space semantics.
///
/// `update` never creates and `add` never overwrites; [`PropertyStore::set`]
/// is the create-or-update convenience used for unconditional writes.
pub trait PropertyStore {
    /// Current value of `key`, if present.
    fn find(&self, key: &str) -> Option<String>;

    /// Overwrite the value of an existing property. Absent keys stay
    /// absent.
    fn update(&mut self, key: &str, value: &str);

    /// Create a property that does not yet exist. Existing keys keep their
    /// value.
    fn add(&mut self, key: &str, value: &str);

    /// Value of `key`, or `default` when unset.
    fn get(&self, key: &str, default: &str) -> String {
        self.find(key).unwrap_or_else(|| default.to_string())
    }

    /// Create-or-update.
    fn set(&mut self, key: &str, value: &str) {
        if self.find(key).is_some() {
            self.update(key, value);
        } else {
            self.add(key, value);
        }
    }
}

/// Errors raised while reading a `build.prop`-style file.
#[derive(Debug, Error)]
pub enum PropFileError {
    /// Underlying file read failed.
    #[error("failed to read property file: {0}")]
    Io(#[from] std::io::Error),
    /// A non-comment line had no `=` separator.
    #[error("malformed property line {line}: {text:?}")]
    Malformed {
        /// 1-based line number in the input.
        line: usize,
        /// The offending line, untrimmed.
        text: String,
    },
}

/// In-memory property space.
///
/// Keys iterate in sorted order, which keeps dumps and test expectations
/// deterministic.
#[derive(Debug, Default, Clone)]
pub struct InMemoryPropertyStore {
    entries: BTreeMap<String, String>,
}

impl InMemoryPropertyStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `key=value` property file into a fresh store. `#` comments
    /// and blank lines are skipped.
    pub fn load(path: &Path) -> Result<Self, PropFileError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parse property-file text.
    pub fn parse(text: &str) -> Result<Self, PropFileError> {
        let mut store = Self::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(PropFileError::Malformed {
                    line: idx + 1,
                    text: raw.to_string(),
                });
            };
            store
                .entries
                .insert(key.trim().to_string(), value.trim().to_string());
        }
        Ok(store)
    }

    /// Render the store back into property-file text, one `key=value` per
    /// line.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.entries {
            let _ = writeln!(out, "{key}={value}");
        }
        out
    }

    /// Borrow the underlying map, e.g. for serialization.
    pub fn snapshot(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    /// Number of properties held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no properties are held.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PropertyStore for InMemoryPropertyStore {
    fn find(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn update(&mut self, key: &str, value: &str) {
        if let Some(slot) = self.entries.get_mut(key) {
            debug!("prop update {key}={value}");
            *slot = value.to_string();
        }
    }

    fn add(&mut self, key: &str, value: &str) {
        debug!("prop add {key}={value}");
        self.entries
            .entry(key.to_string())
            .or_insert_with(|| value.to_string());
    }
}
