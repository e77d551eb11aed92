//! Data-only type for the identity of the invoking process.
use serde::Serialize;

use super::errors::Result;

/// Real and effective user/group ids of a process, frozen at capture time.
///
/// Later privilege changes in the same process are not reflected; capture a new one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct IdentitySnapshot {
    uid: u32,
    gid: u32,
    euid: u32,
    egid: u32,
}

impl IdentitySnapshot {
    /// Build an identity from explicit ids, e.g. to evaluate access on behalf of another user.
    pub const fn new(uid: u32, gid: u32, euid: u32, egid: u32) -> Self {
        Self {
            uid,
            gid,
            euid,
            egid,
        }
    }

    /// Capture the current process identity.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedPlatform` where the OS has no uid/gid model.
    pub fn capture() -> Result<Self> {
        use crate::adapters::{IdentitySource, ProcessIdentity};
        ProcessIdentity.current()
    }

    pub const fn uid(&self) -> u32 {
        self.uid
    }

    pub const fn gid(&self) -> u32 {
        self.gid
    }

    pub const fn euid(&self) -> u32 {
        self.euid
    }

    pub const fn egid(&self) -> u32 {
        self.egid
    }
}
