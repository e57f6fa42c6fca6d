//! Folders module.
//!
//! This module contains the representation of the email folders.

use std::ops;

use serde::Serialize;

use crate::Folder;

/// Represents the ordered list of folders.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Folders(pub Vec<Folder>);

impl Folders {
    /// Returns the names of the folders, in order.
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|folder| folder.name.as_str()).collect()
    }
}

impl ops::Deref for Folders {
    type Target = Vec<Folder>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl ops::DerefMut for Folders {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
