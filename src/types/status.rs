//! Data-only record of what a single status lookup returned.
use serde::Serialize;

use super::mode::FileMode;

/// Captured status of a path.
///
/// `uid`/`gid` are `None` on platforms without POSIX ownership.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FileStatus {
    pub mode: FileMode,
    pub size: u64,
    pub uid: Option<u32>,
    pub gid: Option<u32>,
}
