//! Point-in-time metadata snapshot of a single path.
//!
//! A `PathSnapshot` performs exactly one status lookup when it is created and answers every
//! later query from that captured record. Construction never fails: a failed lookup is kept
//! and every boolean predicate then reports `false`. Accessors that return a `Result`
//! (`owner_uid`, `owner_gid`, `size`) surface the failure instead of defaulting to zero.
use std::path::{Path, PathBuf};

use serde_json::json;

use crate::adapters::{FixedIdentity, FsStatusProbe, IdentitySource, ProcessIdentity, StatusProbe};
use crate::constants::{
    S_IRGRP, S_IROTH, S_IRUSR, S_IWGRP, S_IWOTH, S_IWUSR, S_IXGRP, S_IXOTH, S_IXUSR,
};
use crate::fs::access::{resolve_access, Access};
use crate::policy::InspectPolicy;
use crate::types::errors::{Error, ErrorKind, Result};
use crate::types::{FileMode, FileStatus, IdentitySnapshot};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Outcome {
    Found(FileStatus),
    NotFound(Error),
    Failed(Error),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathSnapshot {
    path: PathBuf,
    policy: InspectPolicy,
    outcome: Outcome,
}

impl PathSnapshot {
    /// Stat `path`, following symlinks.
    pub fn capture(path: impl AsRef<Path>) -> Self {
        Self::capture_with(path, &InspectPolicy::default())
    }

    pub fn capture_with(path: impl AsRef<Path>, policy: &InspectPolicy) -> Self {
        Self::capture_with_probe(path, policy, &FsStatusProbe)
    }

    /// Capture using a caller-supplied status source.
    pub fn capture_with_probe(
        path: impl AsRef<Path>,
        policy: &InspectPolicy,
        probe: &impl StatusProbe,
    ) -> Self {
        let path = path.as_ref();
        let outcome = match probe.probe(path, policy.follow_symlinks) {
            Ok(st) => Outcome::Found(st),
            Err(e) => {
                let err = Error::from_io(&e);
                log::debug!("capture {} failed: {}", path.display(), err);
                if err.is_not_found() {
                    Outcome::NotFound(err)
                } else {
                    Outcome::Failed(err)
                }
            }
        };
        Self {
            path: path.to_path_buf(),
            policy: policy.clone(),
            outcome,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn policy(&self) -> &InspectPolicy {
        &self.policy
    }

    pub fn status(&self) -> Option<&FileStatus> {
        match &self.outcome {
            Outcome::Found(st) => Some(st),
            Outcome::NotFound(_) | Outcome::Failed(_) => None,
        }
    }

    pub fn mode(&self) -> Option<FileMode> {
        self.status().map(|st| st.mode)
    }

    pub fn has_error(&self) -> bool {
        self.status().is_none()
    }

    pub fn error(&self) -> Option<&Error> {
        match &self.outcome {
            Outcome::Found(_) => None,
            Outcome::NotFound(e) | Outcome::Failed(e) => Some(e),
        }
    }

    /// False only when the lookup reported "not found".
    ///
    /// Any other failure (permission denied on a parent, I/O error) still counts as existing.
    pub fn exists(&self) -> bool {
        !matches!(self.outcome, Outcome::NotFound(_))
    }

    /// True when the mode word carries every bit in `mask` (a `FileMode` flag).
    pub fn has_mode(&self, mask: u32) -> bool {
        self.mode().is_some_and(|m| m.contains(mask))
    }

    pub fn is_dir(&self) -> bool {
        self.has_mode(FileMode::DIR)
    }

    /// Only possible when captured with `follow_symlinks = false`.
    pub fn is_symlink(&self) -> bool {
        self.has_mode(FileMode::SYMLINK)
    }

    pub fn is_regular_file(&self) -> bool {
        self.mode().is_some_and(FileMode::is_regular)
    }

    /// Block or character device.
    pub fn is_device(&self) -> bool {
        self.has_mode(FileMode::DEVICE)
    }

    pub fn is_named_pipe(&self) -> bool {
        self.has_mode(FileMode::NAMED_PIPE)
    }

    pub fn is_socket(&self) -> bool {
        self.has_mode(FileMode::SOCKET)
    }

    pub fn is_char_device(&self) -> bool {
        self.has_mode(FileMode::CHAR_DEVICE)
    }

    pub fn is_append_only(&self) -> bool {
        self.has_mode(FileMode::APPEND)
    }

    pub fn is_exclusive(&self) -> bool {
        self.has_mode(FileMode::EXCLUSIVE)
    }

    pub fn is_temporary(&self) -> bool {
        self.has_mode(FileMode::TEMPORARY)
    }

    pub fn has_setuid(&self) -> bool {
        self.has_mode(FileMode::SETUID)
    }

    pub fn has_setgid(&self) -> bool {
        self.has_mode(FileMode::SETGID)
    }

    pub fn is_sticky(&self) -> bool {
        self.has_mode(FileMode::STICKY)
    }

    /// True when all requested permission bits are set, regardless of who is asking.
    pub fn has_permission(&self, bits: u32) -> bool {
        self.mode().is_some_and(|m| m.perm() & bits == bits)
    }

    pub fn is_owner_readable(&self) -> bool {
        self.has_permission(S_IRUSR)
    }

    pub fn is_owner_writable(&self) -> bool {
        self.has_permission(S_IWUSR)
    }

    pub fn is_owner_executable(&self) -> bool {
        self.has_permission(S_IXUSR)
    }

    pub fn is_group_readable(&self) -> bool {
        self.has_permission(S_IRGRP)
    }

    pub fn is_group_writable(&self) -> bool {
        self.has_permission(S_IWGRP)
    }

    pub fn is_group_executable(&self) -> bool {
        self.has_permission(S_IXGRP)
    }

    pub fn is_other_readable(&self) -> bool {
        self.has_permission(S_IROTH)
    }

    pub fn is_other_writable(&self) -> bool {
        self.has_permission(S_IWOTH)
    }

    pub fn is_other_executable(&self) -> bool {
        self.has_permission(S_IXOTH)
    }

    /// Numeric owner of the path.
    ///
    /// # Errors
    ///
    /// `IdentityFieldUnavailable` if the capture failed, `UnsupportedPlatform` if the
    /// platform does not record ownership.
    pub fn owner_uid(&self) -> Result<u32> {
        self.id_field("uid", |st| st.uid)
    }

    /// Numeric group of the path.
    ///
    /// # Errors
    ///
    /// Same as [`owner_uid`](Self::owner_uid).
    pub fn owner_gid(&self) -> Result<u32> {
        self.id_field("gid", |st| st.gid)
    }

    fn id_field(&self, name: &str, field: impl Fn(&FileStatus) -> Option<u32>) -> Result<u32> {
        let st = self.status().ok_or_else(|| {
            Error::new(
                ErrorKind::IdentityFieldUnavailable,
                format!("{name}: no status captured for {}", self.path.display()),
            )
        })?;
        field(st).ok_or_else(|| {
            Error::new(
                ErrorKind::UnsupportedPlatform,
                format!("{name}: ownership not recorded on this platform"),
            )
        })
    }

    /// Byte length for regular files; the raw status value for anything else.
    ///
    /// # Errors
    ///
    /// Returns the capture failure when there is no status.
    pub fn size(&self) -> Result<u64> {
        match &self.outcome {
            Outcome::Found(st) => Ok(st.size),
            Outcome::NotFound(e) | Outcome::Failed(e) => Err(e.clone()),
        }
    }

    /// May the current process read this path? Identity is fetched fresh on every call.
    pub fn can_read(&self) -> bool {
        self.can_access(Access::Read)
    }

    pub fn can_write(&self) -> bool {
        self.can_access(Access::Write)
    }

    pub fn can_execute(&self) -> bool {
        self.can_access(Access::Execute)
    }

    pub fn can_access(&self, access: Access) -> bool {
        self.can_access_via(&ProcessIdentity, access)
    }

    /// Resolve against a caller-held identity, e.g. one reused across several checks.
    pub fn can_access_as(&self, access: Access, who: &IdentitySnapshot) -> bool {
        self.can_access_via(&FixedIdentity(*who), access)
    }

    /// Resolve against any identity source.
    ///
    /// If the source cannot produce an identity, the path's owner and group cannot match, so
    /// the other-class bits decide.
    pub fn can_access_via(&self, source: &impl IdentitySource, access: Access) -> bool {
        let Some(st) = self.status() else {
            return false;
        };
        match source.current() {
            Ok(who) => resolve_access(st, &who, self.policy.identity_basis, access),
            Err(e) => {
                log::debug!("identity unavailable, using other-class bits: {e}");
                st.mode.contains(access.other_bit())
            }
        }
    }

    /// JSON fact record describing this snapshot.
    pub fn facts(&self) -> serde_json::Value {
        let kind = match (&self.outcome, self.mode()) {
            (Outcome::NotFound(_), _) => "missing",
            (_, Some(m)) => m.kind(),
            (_, None) => "unknown",
        };
        json!({
            "path": self.path.display().to_string(),
            "exists": self.exists(),
            "error": self.error().map(|e| format!("{:?}", e.kind)),
            "kind": kind,
            "perm": self.mode().map(|m| format!("{:04o}", m.perm())),
            "setuid": self.has_setuid(),
            "setgid": self.has_setgid(),
            "sticky": self.is_sticky(),
            "uid": self.owner_uid().ok(),
            "gid": self.owner_gid().ok(),
            "size": self.size().ok(),
        })
    }
}
