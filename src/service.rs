use crate::domain::shortcut::{ShortcutEntry, ShortcutStore};
use crate::error::ShortcutError;
use crate::storage::ShortcutRepository;

/// Result of a successful `update`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub before: ShortcutEntry,
    pub after: ShortcutEntry,
    /// Another shortcut that already pointed at the new path
    pub shares_path_with: Option<String>,
}

impl UpdateOutcome {
    #[must_use]
    pub fn renamed(&self) -> bool {
        self.before.name != self.after.name
    }

    #[must_use]
    pub fn repathed(&self) -> bool {
        self.before.path != self.after.path
    }
}

/// Shortcut directory that enforces name/path uniqueness over a repository
///
/// Every operation loads the store once, works on an in-memory copy, and
/// saves at most once.
pub struct ShortcutDirectory<R>
where
    R: ShortcutRepository,
{
    repository: R,
}

impl<R> ShortcutDirectory<R>
where
    R: ShortcutRepository,
{
    pub const fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Resolve a query by exact name first, then by exact path
    ///
    /// # Errors
    /// Returns `NotFound` if the query matches neither
    pub fn find(&self, query: &str) -> Result<ShortcutEntry, ShortcutError> {
        resolve(&self.repository.load(), query)
    }

    /// Create a new shortcut
    ///
    /// # Errors
    /// Returns `EmptyName`, `DuplicateName`, `DuplicatePath`, or
    /// `StorageWriteFailed`
    pub fn add(&self, name: &str, path: &str) -> Result<ShortcutEntry, ShortcutError> {
        if name.is_empty() {
            return Err(ShortcutError::EmptyName);
        }

        let mut store = self.repository.load();

        if store.contains_name(name) {
            return Err(ShortcutError::DuplicateName {
                name: name.to_string(),
            });
        }

        if let Some(existing) = store.find_by_path(path) {
            return Err(ShortcutError::DuplicatePath {
                path: path.to_string(),
                existing: existing.name,
            });
        }

        store.insert(name, path);
        self.repository.save(&store)?;

        Ok(ShortcutEntry::new(name, path))
    }

    /// All shortcuts in persisted order
    pub fn list(&self) -> Vec<ShortcutEntry> {
        self.repository.load().entries()
    }

    /// Remove the shortcut a query resolves to
    ///
    /// # Errors
    /// Returns `NotFound` (nothing is written) or `StorageWriteFailed`
    pub fn remove(&self, query: &str) -> Result<ShortcutEntry, ShortcutError> {
        let mut store = self.repository.load();
        let entry = resolve(&store, query)?;

        store.remove(&entry.name);
        self.repository.save(&store)?;

        Ok(entry)
    }

    /// Rename and/or re-path the shortcut a query resolves to
    ///
    /// Empty values count as absent. The new path is not checked against
    /// the paths of other shortcuts.
    ///
    /// # Errors
    /// Returns `NotFound`, `NoChangeRequested`, `DuplicateName`,
    /// `NoChangeMade`, or `StorageWriteFailed`
    pub fn update(
        &self,
        query: &str,
        new_name: Option<&str>,
        new_path: Option<&str>,
    ) -> Result<UpdateOutcome, ShortcutError> {
        let mut store = self.repository.load();
        let before = resolve(&store, query)?;

        let new_name = new_name.filter(|name| !name.is_empty());
        let new_path = new_path.filter(|path| !path.is_empty());

        if new_name.is_none() && new_path.is_none() {
            return Err(ShortcutError::NoChangeRequested {
                query: query.to_string(),
            });
        }

        let mut after = before.clone();
        let mut shares_path_with = None;

        if let Some(name) = new_name.filter(|name| *name != before.name) {
            if store.contains_name(name) {
                return Err(ShortcutError::DuplicateName {
                    name: name.to_string(),
                });
            }
            store.rename(&before.name, name);
            after.name = name.to_string();
        }

        if let Some(path) = new_path.filter(|path| *path != before.path) {
            if let Some(other) = store.find_by_path(path) {
                tracing::debug!(path, other = %other.name, "Path shared by two shortcuts");
                shares_path_with = Some(other.name);
            }
            store.insert(after.name.as_str(), path);
            after.path = path.to_string();
        }

        if after == before {
            return Err(ShortcutError::NoChangeMade { name: before.name });
        }

        self.repository.save(&store)?;

        Ok(UpdateOutcome {
            before,
            after,
            shares_path_with,
        })
    }

    /// Path for a shortcut, for the caller to change directory into
    ///
    /// Name-or-path resolution applies.
    ///
    /// # Errors
    /// Returns `NotFound` if the name cannot be resolved
    pub fn goto(&self, name: &str) -> Result<String, ShortcutError> {
        self.find(name).map(|entry| entry.path)
    }
}

fn resolve(store: &ShortcutStore, query: &str) -> Result<ShortcutEntry, ShortcutError> {
    store
        .get(query)
        .or_else(|| store.find_by_path(query))
        .ok_or_else(|| ShortcutError::NotFound {
            query: query.to_string(),
        })
}
