//! Account module.
//!
//! This module contains everything related to the user account.

pub mod config;
pub use config::*;
