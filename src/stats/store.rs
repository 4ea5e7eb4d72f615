//! Where statistics are kept between runs

use super::Statistics;
use crate::error::StoreError;
use std::fs;
use std::path::{Path, PathBuf};

/// Persistent key-value home for the statistics snapshot
pub trait StatisticsStore {
    /// Load the saved snapshot, `None` if nothing has been saved yet
    ///
    /// # Errors
    /// Returns `StoreError` if the snapshot exists but cannot be read.
    fn load(&self) -> Result<Option<Statistics>, StoreError>;

    /// Replace the saved snapshot
    ///
    /// # Errors
    /// Returns `StoreError` if the snapshot cannot be written.
    fn save(&mut self, stats: &Statistics) -> Result<(), StoreError>;
}

impl<S: StatisticsStore + ?Sized> StatisticsStore for Box<S> {
    fn load(&self) -> Result<Option<Statistics>, StoreError> {
        (**self).load()
    }

    fn save(&mut self, stats: &Statistics) -> Result<(), StoreError> {
        (**self).save(stats)
    }
}

/// Statistics stored as a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl StatisticsStore for JsonFileStore {
    fn load(&self) -> Result<Option<Statistics>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| StoreError::Corrupted {
                path: self.path.clone(),
                source,
            })
    }

    fn save(&mut self, stats: &Statistics) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let json = serde_json::to_string_pretty(stats).map_err(|source| StoreError::Corrupted {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))
    }
}

/// Statistics held in memory only (`--no-save`)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    saved: Option<Statistics>,
    saves: usize,
}

impl MemoryStore {
    #[must_use]
    pub const fn with(stats: Statistics) -> Self {
        Self {
            saved: Some(stats),
            saves: 0,
        }
    }

    #[must_use]
    pub const fn saved(&self) -> Option<&Statistics> {
        self.saved.as_ref()
    }

    /// How many times `save` has been called
    #[must_use]
    pub const fn saves(&self) -> usize {
        self.saves
    }
}

impl StatisticsStore for MemoryStore {
    fn load(&self) -> Result<Option<Statistics>, StoreError> {
        Ok(self.saved.clone())
    }

    fn save(&mut self, stats: &Statistics) -> Result<(), StoreError> {
        self.saved = Some(stats.clone());
        self.saves += 1;
        Ok(())
    }
}
