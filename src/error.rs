//! Error taxonomy for shortcut operations

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the shortcut store and its persistence layer
#[derive(Debug, Error)]
pub enum ShortcutError {
    #[error("Shortcut or path matching '{query}' not found")]
    NotFound { query: String },

    #[error("Shortcut name '{name}' already exists. Use 'update' to change its value")]
    DuplicateName { name: String },

    #[error("Path '{path}' already has a shortcut assigned to it: '{existing}'")]
    DuplicatePath { path: String, existing: String },

    #[error("No update parameters provided for '{query}'. Use -n or -p")]
    NoChangeRequested { query: String },

    #[error("No changes made to '{name}'")]
    NoChangeMade { name: String },

    #[error("Shortcut name must not be empty")]
    EmptyName,

    #[error("{} is not valid JSON", path.display())]
    StorageUnreadable {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read shortcuts from {}", path.display())]
    StorageReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to save shortcuts to {}", path.display())]
    StorageWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ShortcutError {
    /// Process exit code reported for this failure
    ///
    /// Code 2 is left to clap for usage errors.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } => 3,
            Self::DuplicateName { .. } => 4,
            Self::DuplicatePath { .. } => 5,
            Self::NoChangeRequested { .. } => 6,
            Self::NoChangeMade { .. } => 7,
            Self::EmptyName => 8,
            Self::StorageWriteFailed { .. } => 9,
            Self::StorageUnreadable { .. } | Self::StorageReadFailed { .. } => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_for_user_facing_failures() {
        let errors = [
            ShortcutError::NotFound {
                query: "x".to_string(),
            },
            ShortcutError::DuplicateName {
                name: "x".to_string(),
            },
            ShortcutError::DuplicatePath {
                path: "/x".to_string(),
                existing: "x".to_string(),
            },
            ShortcutError::NoChangeRequested {
                query: "x".to_string(),
            },
            ShortcutError::NoChangeMade {
                name: "x".to_string(),
            },
            ShortcutError::EmptyName,
            ShortcutError::StorageWriteFailed {
                path: PathBuf::from("/x"),
                source: std::io::Error::other("denied"),
            },
        ];

        let mut codes: Vec<i32> = errors.iter().map(ShortcutError::exit_code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
        assert!(codes.iter().all(|code| *code > 2));
    }

    #[test]
    fn test_messages_name_the_offending_value() {
        let err = ShortcutError::NotFound {
            query: "proj".to_string(),
        };
        assert!(err.to_string().contains("'proj'"));

        let err = ShortcutError::DuplicatePath {
            path: "/home/u/proj".to_string(),
            existing: "proj".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("/home/u/proj"));
        assert!(message.contains("'proj'"));
    }
}
