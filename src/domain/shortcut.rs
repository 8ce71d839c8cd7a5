//! Shortcut domain entities and display helpers
//!
//! This module contains the in-memory shortcut mapping and the table
//! formatting used by `list` and `check`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

use crate::color;

/// A single named shortcut
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutEntry {
    pub name: String,
    pub path: String,
}

impl ShortcutEntry {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Ordered name -> path mapping, serialized as a flat JSON object
///
/// Iteration follows insertion order. Name uniqueness is structural; path
/// uniqueness is enforced by the callers that insert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortcutStore(IndexMap<String, String>);

impl ShortcutStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Look up a shortcut by exact name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<ShortcutEntry> {
        self.0
            .get_key_value(name)
            .map(|(name, path)| ShortcutEntry::new(name.as_str(), path.as_str()))
    }

    /// First shortcut (in iteration order) whose path equals `path`
    #[must_use]
    pub fn find_by_path(&self, path: &str) -> Option<ShortcutEntry> {
        self.0
            .iter()
            .find(|(_, stored)| stored.as_str() == path)
            .map(|(name, stored)| ShortcutEntry::new(name.as_str(), stored.as_str()))
    }

    /// Insert or overwrite `name`, keeping its position if it already exists
    pub fn insert(&mut self, name: impl Into<String>, path: impl Into<String>) {
        self.0.insert(name.into(), path.into());
    }

    /// Remove `name`, preserving the order of the remaining entries
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.0.shift_remove(name)
    }

    /// Move the path stored under `old` to `new`
    ///
    /// The renamed entry is appended at the end. Returns false if `old` is
    /// not present.
    pub fn rename(&mut self, old: &str, new: impl Into<String>) -> bool {
        match self.0.shift_remove(old) {
            Some(path) => {
                self.0.insert(new.into(), path);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = ShortcutEntry> + '_ {
        self.0
            .iter()
            .map(|(name, path)| ShortcutEntry::new(name.as_str(), path.as_str()))
    }

    #[must_use]
    pub fn entries(&self) -> Vec<ShortcutEntry> {
        self.iter().collect()
    }
}

impl FromIterator<(String, String)> for ShortcutStore {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Lexically normalize a path by resolving `.` and `..` components
///
/// Does NOT resolve symlinks or touch the filesystem
fn normalize_path_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            _ => normalized.push(component),
        }
    }
    normalized
}

/// Convert absolute path to home-relative display format
///
/// Returns "~/path" if under home directory, otherwise the normalized path
#[must_use]
pub fn display_path(path: &Path) -> String {
    let normalized = normalize_path_lexically(path);

    if let Some(home) = dirs::home_dir() {
        if let Ok(rel) = normalized.strip_prefix(&home) {
            let rel_str = rel.display().to_string();
            if rel_str.is_empty() {
                return "~".to_string();
            }
            return format!("~/{rel_str}");
        }
    }
    normalized.display().to_string()
}

/// Format shortcuts as a two-column table (name, path)
///
/// When `abbreviate_home` is set, paths under the home directory are shown
/// as `~/...`; otherwise stored paths are printed verbatim.
#[must_use]
pub fn format_shortcut_table(
    entries: &[ShortcutEntry],
    abbreviate_home: bool,
    color_mode: color::ColorMode,
) -> Vec<String> {
    let max_name_width = entries
        .iter()
        .map(|entry| entry.name.chars().count())
        .max()
        .unwrap_or(0);

    entries
        .iter()
        .map(|entry| {
            let path = if abbreviate_home {
                display_path(Path::new(&entry.path))
            } else {
                entry.path.clone()
            };

            // Manual padding (format! width counts ANSI codes)
            let padding = " ".repeat(max_name_width - entry.name.chars().count());
            format!(
                "{}{padding}  {}",
                color_mode.colorize_name(&entry.name),
                color_mode.colorize_path(&path)
            )
        })
        .collect()
}
