mod backend;
pub mod maildir;

pub use self::backend::{Backend, Error, Result};
pub use self::maildir::{MaildirBackend, MaildirBackendBuilder, MaildirConfig};
