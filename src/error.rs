//! Error types for the game's I/O-facing subsystems.
//!
//! Rejected guesses are not errors; they are reported as
//! [`Rejection`](crate::game::Rejection) values. The types here cover the things
//! that can actually fail: dictionary lookups, statistics persistence, settings
//! files and word-list loading.

use std::path::PathBuf;

/// Failure to reach or query the external dictionary.
///
/// Callers treat every variant as "valid" (fail-open); the error only exists so it
/// can be logged.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The HTTP request could not be completed.
    #[error("Dictionary request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The dictionary service answered with a server error.
    #[error("Dictionary service returned HTTP {status}")]
    Server {
        /// HTTP status code.
        status: u16,
    },
}

/// Failure to load or save the statistics snapshot.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O failure on the statistics file.
    #[error("Statistics file '{path}' could not be accessed: {source}")]
    Io {
        /// Path of the statistics file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The statistics file does not contain a valid snapshot.
    #[error("Statistics file '{path}' is corrupted: {source}\n\nSuggestion: Remove the file to start fresh")]
    Corrupted {
        /// Path of the statistics file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

/// Failure to load, validate or save settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file '{path}' could not be accessed: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON in config file '{path}': {source}\n\nSuggestion: Validate the file with a JSON linter")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Failure to set up a game.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// No usable answer words were available.
    #[error("Word list is empty\n\nSuggestion: Check that the word list contains 5-letter words, one per line")]
    EmptyWordList,

    /// A word list file could not be read.
    #[error("Word list '{path}' could not be read: {source}")]
    WordList {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_mentions_path() {
        let err = StoreError::Io {
            path: PathBuf::from("/tmp/stats.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/stats.json"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn server_error_shows_status() {
        let err = LookupError::Server { status: 503 };
        assert_eq!(err.to_string(), "Dictionary service returned HTTP 503");
    }

    #[test]
    fn empty_word_list_has_suggestion() {
        assert!(GameError::EmptyWordList.to_string().contains("Suggestion"));
    }
}
