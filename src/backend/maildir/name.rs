//! Maildir folder name module.
//!
//! This module contains the validation of the folder names given to
//! the Maildir backend before anything gets created on disk.

use std::path::MAIN_SEPARATOR;
use thiserror::Error;

/// Represents the subdirectories every Maildir folder contains.
pub const MAILDIR_SUBDIRS: [&str; 3] = ["cur", "new", "tmp"];

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum FolderNameError {
    #[error("invalid folder name {0}: folder names may not contain ../")]
    TraversalError(String),
    #[error("invalid folder name {0}: folder names may not begin with /")]
    LeadingSeparatorError(String),
    #[error("invalid folder name {0}: nested folder names may not contain {1}")]
    ReservedNameError(String, String),
}

fn is_path_sep(c: char) -> bool {
    c == '/' || c == MAIN_SEPARATOR
}

/// Checks that the given folder name is safe to create under the
/// root directory. When the separator is `/`, folders nest on disk
/// and their segments cannot collide with Maildir subdirectories.
pub fn validate_folder_name(name: &str, sep: char) -> Result<(), FolderNameError> {
    if name.split(is_path_sep).any(|segment| segment == "..") {
        return Err(FolderNameError::TraversalError(name.to_owned()));
    }

    if name.starts_with(is_path_sep) {
        return Err(FolderNameError::LeadingSeparatorError(name.to_owned()));
    }

    if sep == '/' {
        if let Some(segment) = name
            .split('/')
            .find(|segment| MAILDIR_SUBDIRS.contains(segment))
        {
            return Err(FolderNameError::ReservedNameError(
                name.to_owned(),
                segment.to_owned(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_folder_name, FolderNameError};

    #[test]
    fn traversal() {
        for sep in ['.', '/'] {
            assert_eq!(
                Err(FolderNameError::TraversalError("a/../b".into())),
                validate_folder_name("a/../b", sep)
            );
            assert_eq!(
                Err(FolderNameError::TraversalError("../b".into())),
                validate_folder_name("../b", sep)
            );
            assert_eq!(
                Err(FolderNameError::TraversalError("a/..".into())),
                validate_folder_name("a/..", sep)
            );
        }

        // dots inside a segment are not a traversal
        assert_eq!(Ok(()), validate_folder_name("a..b", '.'));
        assert_eq!(Ok(()), validate_folder_name("Work..Projects", '/'));
    }

    #[test]
    fn leading_separator() {
        assert_eq!(
            Err(FolderNameError::LeadingSeparatorError("/etc".into())),
            validate_folder_name("/etc", '.')
        );
        assert_eq!(
            Err(FolderNameError::LeadingSeparatorError("/etc".into())),
            validate_folder_name("/etc", '/')
        );
    }

    #[test]
    fn reserved_names() {
        assert_eq!(
            Err(FolderNameError::ReservedNameError(
                "a/new/b".into(),
                "new".into()
            )),
            validate_folder_name("a/new/b", '/')
        );
        assert_eq!(
            Err(FolderNameError::ReservedNameError("cur".into(), "cur".into())),
            validate_folder_name("cur", '/')
        );
        assert_eq!(
            Err(FolderNameError::ReservedNameError(
                "a/tmp".into(),
                "tmp".into()
            )),
            validate_folder_name("a/tmp", '/')
        );

        // only nested folders can collide with Maildir subdirectories
        assert_eq!(Ok(()), validate_folder_name("a/new/b", '.'));
        assert_eq!(Ok(()), validate_folder_name("newsletters/current", '/'));
    }

    #[test]
    fn valid_names() {
        assert_eq!(Ok(()), validate_folder_name("INBOX", '.'));
        assert_eq!(Ok(()), validate_folder_name("Work.Projects", '.'));
        assert_eq!(Ok(()), validate_folder_name("Work/Projects", '/'));
    }
}
