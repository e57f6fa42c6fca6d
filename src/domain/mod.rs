pub mod account;
pub use account::*;

pub mod folder;
pub use folder::*;
