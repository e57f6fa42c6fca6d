//! Folder module.
//!
//! This module contains the representation of the email folder.

use serde::Serialize;
use std::{fmt, path::PathBuf};

/// Represents a handle to a Maildir folder. The handle does not
/// check that the folder exists on disk.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Folder {
    /// Represents the root directory of the repository owning the
    /// folder.
    pub root: PathBuf,
    /// Represents the folder name, relative to the root. The root
    /// Maildir itself has an empty name.
    pub name: String,
    /// Represents the folder hierarchy delimiter.
    pub delim: char,
    /// Represents the name of the account owning the folder.
    pub account: String,
}

impl Folder {
    pub fn new<R, N, A>(root: R, name: N, delim: char, account: A) -> Self
    where
        R: Into<PathBuf>,
        N: Into<String>,
        A: Into<String>,
    {
        Self {
            root: root.into(),
            name: name.into(),
            delim,
            account: account.into(),
        }
    }

    /// Returns the folder directory path.
    pub fn path(&self) -> PathBuf {
        if self.name.is_empty() {
            self.root.clone()
        } else {
            self.root.join(&self.name)
        }
    }

    pub fn is_root(&self) -> bool {
        self.name.is_empty()
    }
}

impl fmt::Display for Folder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
