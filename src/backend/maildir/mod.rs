pub mod atime;
pub mod backend;
pub mod cache;
pub mod config;
pub mod name;

pub use self::atime::{AtimeRecord, AtimeTracker};
pub use self::backend::{Error, MaildirBackend, MaildirBackendBuilder, Result};
pub use self::cache::FolderCache;
pub use self::config::{ConfigError, MaildirConfig, DEFAULT_SEP};
pub use self::name::{validate_folder_name, FolderNameError, MAILDIR_SUBDIRS};
