//! Player settings
//!
//! Settings live in a small JSON file. Every field has a default, so a partial
//! file (or no file at all) is fine.

use crate::dictionary::DEFAULT_DICTIONARY_URL;
use crate::error::ConfigError;
use crate::game::{DEFAULT_ATTEMPTS, DEFAULT_EPOCH, DEFAULT_HINTS, Rules};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings file looked up in the current directory
pub const CONFIG_FILE_NAME: &str = "word_guess.json";

const fn default_attempts() -> usize {
    DEFAULT_ATTEMPTS
}

const fn default_hints() -> u32 {
    DEFAULT_HINTS
}

const fn default_true() -> bool {
    true
}

fn default_dictionary_url() -> String {
    DEFAULT_DICTIONARY_URL.to_string()
}

fn default_stats_path() -> PathBuf {
    PathBuf::from(".word_guess/stats.json")
}

const fn default_epoch() -> NaiveDate {
    DEFAULT_EPOCH
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Guesses allowed per game
    #[serde(default = "default_attempts")]
    pub attempts: usize,

    /// Hints available per game
    #[serde(default = "default_hints")]
    pub hints: u32,

    #[serde(default)]
    pub hard_mode: bool,

    /// Ask the online dictionary about words outside the word list
    #[serde(default = "default_true")]
    pub online_lookup: bool,

    #[serde(default = "default_dictionary_url")]
    pub dictionary_url: String,

    #[serde(default = "default_stats_path")]
    pub stats_path: PathBuf,

    /// Date of daily puzzle #1
    #[serde(default = "default_epoch")]
    pub epoch: NaiveDate,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            attempts: default_attempts(),
            hints: default_hints(),
            hard_mode: false,
            online_lookup: default_true(),
            dictionary_url: default_dictionary_url(),
            stats_path: default_stats_path(),
            epoch: default_epoch(),
        }
    }
}

impl Settings {
    /// Load `word_guess.json` from the current directory, or defaults if absent
    ///
    /// # Errors
    /// Returns `ConfigError` if the file exists but cannot be read or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_file(Path::new(CONFIG_FILE_NAME))
    }

    /// Load settings from `path`; a missing file yields the defaults
    ///
    /// # Errors
    /// Returns `ConfigError::Io` if the file cannot be read, `ConfigError::Parse`
    /// for malformed JSON and `ConfigError::Invalid` if validation fails.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let settings: Self =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Write the settings back as pretty JSON
    ///
    /// # Errors
    /// Returns `ConfigError::Io` if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let io_error = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(io_error)?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(io_error)
    }

    /// # Errors
    /// Returns `ConfigError::Invalid` if `attempts` is zero or the dictionary
    /// URL is empty while online lookups are enabled.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.attempts == 0 {
            return Err(ConfigError::Invalid(
                "attempts must be greater than 0".to_string(),
            ));
        }
        if self.online_lookup && self.dictionary_url.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "dictionaryUrl must not be empty when onlineLookup is enabled".to_string(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub const fn rules(&self) -> Rules {
        Rules {
            attempts: self.attempts,
            hints: self.hints,
            hard_mode: self.hard_mode,
        }
    }
}
