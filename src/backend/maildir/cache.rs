//! Maildir folder cache module.

use crate::Folders;

/// Represents the folders discovered by the last full scan. Any
/// folder creation resets the cache to [`FolderCache::Empty`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum FolderCache {
    #[default]
    Empty,
    Populated(Folders),
}

impl FolderCache {
    pub fn get(&self) -> Option<&Folders> {
        match self {
            Self::Empty => None,
            Self::Populated(folders) => Some(folders),
        }
    }

    pub fn populate(&mut self, folders: Folders) {
        *self = Self::Populated(folders);
    }

    pub fn invalidate(&mut self) {
        *self = Self::Empty;
    }

    pub fn is_populated(&self) -> bool {
        matches!(self, Self::Populated(_))
    }
}
