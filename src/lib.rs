pub mod logger;
pub use logger::{LogLogger, Logger};

pub mod backend;
pub use backend::*;

pub mod domain;
pub use domain::*;
