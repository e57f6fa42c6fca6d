//! Maildir backend module.
//!
//! This module contains the definition of the maildir backend and its
//! traits implementation.

use std::{
    borrow::Cow,
    fs::{self, DirBuilder},
    io,
    path::{Path, PathBuf},
    result,
};
use thiserror::Error;

use crate::{
    backend, AccountConfig, Backend, Folder, Folders, LogLogger, Logger, MaildirConfig,
};

use super::{
    atime, config::ConfigError, name::FolderNameError, validate_folder_name, AtimeTracker,
    FolderCache, MAILDIR_SUBDIRS,
};

const LOG_TARGET: &str = "maildir";

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot create maildir directory {1}")]
    CreateDirError(#[source] io::Error, PathBuf),
    #[error("cannot read maildir directory {1}")]
    ReadDirError(#[source] io::Error, PathBuf),
    #[error("cannot decode maildir subdirectory")]
    DecodeSubdirError(#[source] io::Error),
    #[error("cannot delete folder {0}: not yet implemented")]
    DeleteFolderUnimplementedError(String),

    #[error(transparent)]
    InvalidFolderNameError(#[from] FolderNameError),
    #[error(transparent)]
    AtimeError(#[from] atime::Error),
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
}

pub type Result<T> = result::Result<T, Error>;

/// Builds a [`MaildirBackend`].
#[derive(Clone, Copy)]
pub struct MaildirBackendBuilder<'a> {
    logger: &'a dyn Logger,
}

impl Default for MaildirBackendBuilder<'_> {
    fn default() -> Self {
        Self { logger: &LogLogger }
    }
}

impl<'a> MaildirBackendBuilder<'a> {
    pub fn logger(mut self, logger: &'a dyn Logger) -> Self {
        self.logger = logger;
        self
    }

    /// Builds the backend, creating the root directory if it does
    /// not exist yet.
    pub fn build(
        &self,
        account_config: Cow<'a, AccountConfig>,
        backend_config: Cow<'a, MaildirConfig>,
    ) -> Result<MaildirBackend<'a>> {
        let root = backend_config.root_dir()?;
        let sep = backend_config.sep()?;
        let restore_atime = backend_config.restore_atime();

        let backend = MaildirBackend {
            account_config,
            root,
            sep,
            restore_atime,
            logger: self.logger,
            cache: FolderCache::default(),
            atimes: AtimeTracker::default(),
        };

        backend.debug(format!(
            "maildir repository initialized, sep is {:?}",
            backend.sep
        ));

        if !backend.root.is_dir() {
            backend.debug(format!("creating root directory {:?}", backend.root));
            dir_builder(false)
                .create(&backend.root)
                .map_err(|err| Error::CreateDirError(err, backend.root.clone()))?;
        }

        Ok(backend)
    }
}

/// Represents the maildir backend.
pub struct MaildirBackend<'a> {
    account_config: Cow<'a, AccountConfig>,
    root: PathBuf,
    sep: char,
    restore_atime: bool,
    logger: &'a dyn Logger,
    cache: FolderCache,
    atimes: AtimeTracker,
}

impl<'a> MaildirBackend<'a> {
    pub fn new(
        account_config: Cow<'a, AccountConfig>,
        backend_config: Cow<'a, MaildirConfig>,
    ) -> Result<Self> {
        MaildirBackendBuilder::default().build(account_config, backend_config)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn sep(&self) -> char {
        self.sep
    }

    /// Gets the access times captured so far and not restored yet.
    pub fn atimes(&self) -> &AtimeTracker {
        &self.atimes
    }

    fn debug<S: AsRef<str>>(&self, msg: S) {
        self.logger.debug(LOG_TARGET, msg.as_ref())
    }

    fn folder<N: Into<String>>(&self, name: N) -> Folder {
        Folder::new(
            self.root.clone(),
            name,
            self.sep,
            self.account_config.name.clone(),
        )
    }

    /// Captures the access times of the given folder, unless they
    /// are already held. The first capture is the one restored.
    fn capture_atime(&mut self, folder: &Folder) -> Result<()> {
        if self.atimes.contains(folder.path()) {
            return Ok(());
        }

        let record = self.atimes.capture(folder.path())?;
        let msg = format!(
            "captured atimes of folder {:?}: new {:?}, cur {:?}",
            folder.name, record.new_atime, record.cur_atime
        );
        self.debug(msg);
        Ok(())
    }

    /// Creates the given directory, considering an already existing
    /// directory as a success.
    fn create_dir(&self, path: &Path, recursive: bool) -> Result<()> {
        match dir_builder(recursive).create(path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => {
                self.debug(format!("{:?} is already a directory", path));
                Ok(())
            }
            Err(err) => Err(Error::CreateDirError(err, path.to_owned())),
        }
    }

    /// Lists the directories of the given directory that may be
    /// folders, with their folder name. Maildir subdirectories are
    /// skipped.
    fn list_candidates(&self, dir: &Path, prefix: Option<&str>) -> Result<Vec<(PathBuf, String)>> {
        let mut candidates = Vec::new();

        for entry in fs::read_dir(dir).map_err(|err| Error::ReadDirError(err, dir.to_owned()))? {
            let entry = entry.map_err(Error::DecodeSubdirError)?;
            let path = entry.path();
            let dirname = entry.file_name();

            if MAILDIR_SUBDIRS.iter().any(|subdir| dirname == *subdir) {
                continue;
            }

            if !path.is_dir() {
                continue;
            }

            let dirname = match dirname.to_str() {
                Some(dirname) => dirname,
                None if self.sep == '/' || is_maildir(&path) => {
                    let msg = format!("skipping directory {:?}: name is not valid UTF-8", path);
                    self.logger.warn(LOG_TARGET, &msg);
                    continue;
                }
                None => {
                    self.debug(format!("{:?} is not a maildir folder", path));
                    continue;
                }
            };
            let name = match prefix {
                Some(prefix) => format!("{}{}{}", prefix, self.sep, dirname),
                None => dirname.to_owned(),
            };

            candidates.push((path, name));
        }

        Ok(candidates)
    }

    /// Walks the root directory and collects every Maildir folder,
    /// root first, in directory listing order. Nested directories
    /// are only walked when the separator is `/`.
    fn scan_folders(&mut self) -> Result<Folders> {
        self.debug(format!("scanning folders of {:?}", self.root));

        let mut folders = Folders::default();
        let root = self.root.clone();

        if is_maildir(&root) {
            self.push_folder(&mut folders, String::new())?;
        }

        let mut stack = self.list_candidates(&root, None)?;
        stack.reverse();

        while let Some((path, name)) = stack.pop() {
            if is_maildir(&path) {
                self.push_folder(&mut folders, name.clone())?;
            } else {
                self.debug(format!("{:?} is not a maildir folder", path));
            }

            if self.sep == '/' {
                let mut children = self.list_candidates(&path, Some(name.as_str()))?;
                children.reverse();
                stack.extend(children);
            }
        }

        self.debug(format!("found folders: {:?}", folders.names()));
        Ok(folders)
    }

    fn push_folder(&mut self, folders: &mut Folders, name: String) -> Result<()> {
        let folder = self.folder(name);
        if self.restore_atime {
            self.capture_atime(&folder)?;
        }
        folders.push(folder);
        Ok(())
    }
}

impl Backend for MaildirBackend<'_> {
    fn make_folder(&mut self, folder: &str) -> backend::Result<()> {
        self.debug(format!("creating folder {:?}", folder));
        validate_folder_name(folder, self.sep).map_err(Error::from)?;

        // sub-folders may be created before their parents when the
        // separator is `/`
        let path = self.root.join(folder);
        self.create_dir(&path, true)?;
        for subdir in MAILDIR_SUBDIRS {
            self.create_dir(&path.join(subdir), false)?;
        }

        self.cache.invalidate();
        Ok(())
    }

    fn delete_folder(&mut self, folder: &str) -> backend::Result<()> {
        let err = Error::DeleteFolderUnimplementedError(folder.to_owned());
        self.logger.warn(LOG_TARGET, &err.to_string());
        Err(err)?
    }

    fn get_folder(&mut self, folder: &str) -> backend::Result<Folder> {
        let folder = self.folder(folder);
        if self.restore_atime {
            self.capture_atime(&folder)?;
        }
        Ok(folder)
    }

    fn get_folders(&mut self) -> backend::Result<Folders> {
        if let Some(folders) = self.cache.get() {
            let folders = folders.clone();
            // records are consumed by each restoration, so folders
            // listed again from the cache need a new capture
            if self.restore_atime {
                for folder in folders.iter() {
                    self.capture_atime(folder)?;
                }
            }
            return Ok(folders);
        }

        let folders = self.scan_folders()?;
        self.cache.populate(folders.clone());
        Ok(folders)
    }

    fn restore_folder_atimes(&mut self) -> backend::Result<()> {
        let count = self.atimes.restore().map_err(Error::from)?;
        self.debug(format!("restored atimes of {} folder(s)", count));
        Ok(())
    }
}

/// A directory is a Maildir folder when it contains the `cur`, `new`
/// and `tmp` directories.
fn is_maildir(dir: &Path) -> bool {
    MAILDIR_SUBDIRS
        .iter()
        .all(|subdir| dir.join(subdir).is_dir())
}

fn dir_builder(recursive: bool) -> DirBuilder {
    let mut builder = DirBuilder::new();
    builder.recursive(recursive);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }
    builder
}
