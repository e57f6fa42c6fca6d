//! Backend module.
//!
//! This module exposes the backend trait, the seam used by the
//! synchronization engine to manage the folders of a local mail
//! store.

use std::result;
use thiserror::Error;

use crate::{backend, Folder, Folders};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    MaildirBackendError(#[from] backend::maildir::Error),
}

pub type Result<T> = result::Result<T, Error>;

pub trait Backend {
    /// Creates the given folder. Creating a folder that already
    /// exists succeeds.
    fn make_folder(&mut self, folder: &str) -> Result<()>;
    /// Deletes the given folder. Backends are allowed to refuse,
    /// callers must not assume the folder is gone.
    fn delete_folder(&mut self, folder: &str) -> Result<()>;
    /// Gets a handle to the given folder, assumed to exist.
    fn get_folder(&mut self, folder: &str) -> Result<Folder>;
    /// Lists all the folders of the backend.
    fn get_folders(&mut self) -> Result<Folders>;

    /// Gives back whatever the backend altered while accessing its
    /// folders. Meant to be called once, at the end of a
    /// synchronization pass.
    fn restore_folder_atimes(&mut self) -> Result<()> {
        Ok(())
    }
}
