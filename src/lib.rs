#![forbid(unsafe_code)]
//! pathprobe: filesystem metadata snapshots and permission queries.
//!
//! Model highlights:
//! - A [`PathSnapshot`] performs one status lookup at construction and never re-stats; every
//!   predicate is a pure function of the captured record.
//! - Failed lookups are kept, not raised. Boolean predicates then answer `false`, while
//!   `owner_uid`, `owner_gid` and `size` return the failure explicitly.
//! - `can_read`/`can_write`/`can_execute` resolve owner → group → other against a freshly
//!   captured [`IdentitySnapshot`], comparing real ids and the primary group only.
//! - This crate forbids `unsafe` and uses `rustix` for process credentials.

pub mod adapters;
pub mod constants;
pub mod fs;
pub mod policy;
pub mod types;

pub use fs::{current_directory, try_current_directory, Access, PathSnapshot};
pub use policy::{IdentityBasis, InspectPolicy};
pub use types::{Error, ErrorKind, FileMode, FileStatus, IdentitySnapshot, Result};
