pub mod access;
pub mod cwd;
pub mod snapshot;

pub use access::{class_for, resolve_access, Access, PermClass};
pub use cwd::{current_directory, try_current_directory};
pub use snapshot::PathSnapshot;
