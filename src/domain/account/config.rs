//! Account config module.
//!
//! This module contains the representation of the user account
//! configuration.

use serde::Deserialize;

/// Represents the configuration of the user account.
#[derive(Debug, Default, Clone, Eq, PartialEq, Deserialize)]
pub struct AccountConfig {
    /// Represents the name of the account, handed to every folder
    /// of its repositories.
    pub name: String,
}
