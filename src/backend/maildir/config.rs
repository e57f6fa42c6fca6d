//! Maildir config module.
//!
//! This module contains the representation of the Maildir backend
//! configuration.

use serde::Deserialize;
use std::{env, io, path::PathBuf, result};
use thiserror::Error;

pub const DEFAULT_SEP: char = '.';

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot expand maildir root directory {1}")]
    ExpandRootDirError(#[source] shellexpand::LookupError<env::VarError>, String),
    #[error("cannot parse maildir root directory {0}")]
    ParseRootDirError(PathBuf),
    #[error("cannot get current directory")]
    GetCurrentDirError(#[source] io::Error),
    #[error("invalid maildir separator {0:?}: expected exactly one character")]
    InvalidSepError(String),
}

pub type Result<T> = result::Result<T, ConfigError>;

/// Represents the Maildir backend config.
#[derive(Debug, Default, Clone, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MaildirConfig {
    /// Represents the Maildir root directory. Can contain `~` and
    /// environment variables.
    pub root_dir: PathBuf,
    /// Represents the folder hierarchy separator. Using `/` stores
    /// sub-folders as nested directories.
    pub sep: Option<String>,
    /// Restores the access time of the `new` and `cur` directories
    /// of the accessed folders at the end of the synchronization.
    pub restore_atime: Option<bool>,
}

impl MaildirConfig {
    /// Gets the Maildir root directory, expanded and absolute.
    pub fn root_dir(&self) -> Result<PathBuf> {
        let dir = self
            .root_dir
            .to_str()
            .ok_or_else(|| ConfigError::ParseRootDirError(self.root_dir.to_owned()))?;
        let dir = shellexpand::full(dir)
            .map(|dir| PathBuf::from(dir.into_owned()))
            .map_err(|err| ConfigError::ExpandRootDirError(err, dir.to_owned()))?;

        if dir.is_absolute() {
            Ok(dir)
        } else {
            Ok(env::current_dir()
                .map_err(ConfigError::GetCurrentDirError)?
                .join(dir))
        }
    }

    /// Gets the folder hierarchy separator, stripped from its
    /// surrounding whitespaces.
    pub fn sep(&self) -> Result<char> {
        match self.sep.as_deref().map(str::trim) {
            None => Ok(DEFAULT_SEP),
            Some(sep) => {
                let mut chars = sep.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(c),
                    _ => Err(ConfigError::InvalidSepError(sep.to_owned())),
                }
            }
        }
    }

    pub fn restore_atime(&self) -> bool {
        self.restore_atime.unwrap_or_default()
    }
}
