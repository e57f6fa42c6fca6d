//! Logger module.
//!
//! This module contains the logger capability given to repositories
//! at construction, so that diagnostics reach whatever the caller
//! wants them to reach.

/// Receives the diagnostics of a repository, tagged with the
/// component emitting them.
pub trait Logger {
    fn debug(&self, component: &str, msg: &str);
    fn warn(&self, component: &str, msg: &str);
}

/// Forwards diagnostics to the [`log`] facade, using the component
/// as log target.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct LogLogger;

impl Logger for LogLogger {
    fn debug(&self, component: &str, msg: &str) {
        log::debug!(target: component, "{}", msg);
    }

    fn warn(&self, component: &str, msg: &str) {
        log::warn!(target: component, "{}", msg);
    }
}
