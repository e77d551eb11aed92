//! Owner → group → other permission resolution.
//!
//! This is the classic simplified check: the first class whose id matches decides, using only
//! the primary group. Supplementary groups, ACLs and the root bypass are not consulted, so the
//! answer can differ from what `access(2)` would say.
use serde::Serialize;

use crate::constants::{
    S_IRGRP, S_IROTH, S_IRUSR, S_IWGRP, S_IWOTH, S_IWUSR, S_IXGRP, S_IXOTH, S_IXUSR,
};
use crate::policy::IdentityBasis;
use crate::types::{FileStatus, IdentitySnapshot};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    Read,
    Write,
    Execute,
}

impl Access {
    pub const fn owner_bit(self) -> u32 {
        match self {
            Access::Read => S_IRUSR,
            Access::Write => S_IWUSR,
            Access::Execute => S_IXUSR,
        }
    }

    pub const fn group_bit(self) -> u32 {
        match self {
            Access::Read => S_IRGRP,
            Access::Write => S_IWGRP,
            Access::Execute => S_IXGRP,
        }
    }

    pub const fn other_bit(self) -> u32 {
        match self {
            Access::Read => S_IROTH,
            Access::Write => S_IWOTH,
            Access::Execute => S_IXOTH,
        }
    }
}

/// Permission class selected for a caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PermClass {
    Owner,
    Group,
    Other,
}

/// Pick the class for `who`. A missing owner or group id never matches.
pub fn class_for(status: &FileStatus, who: &IdentitySnapshot, basis: IdentityBasis) -> PermClass {
    let (uid, gid) = match basis {
        IdentityBasis::Real => (who.uid(), who.gid()),
        IdentityBasis::Effective => (who.euid(), who.egid()),
    };
    if status.uid == Some(uid) {
        PermClass::Owner
    } else if status.gid == Some(gid) {
        PermClass::Group
    } else {
        PermClass::Other
    }
}

/// Decide whether `who` may perform `access` on a path with `status`.
pub fn resolve_access(
    status: &FileStatus,
    who: &IdentitySnapshot,
    basis: IdentityBasis,
    access: Access,
) -> bool {
    let class = class_for(status, who, basis);
    let bit = match class {
        PermClass::Owner => access.owner_bit(),
        PermClass::Group => access.group_bit(),
        PermClass::Other => access.other_bit(),
    };
    let allowed = status.mode.contains(bit);
    log::trace!(
        "resolve_access: access={:?} class={:?} mode={:o} allowed={}",
        access,
        class,
        status.mode.perm(),
        allowed
    );
    allowed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FileMode;

    fn status(perm: u32, uid: Option<u32>, gid: Option<u32>) -> FileStatus {
        FileStatus {
            mode: FileMode::from_unix(0o100_000 | perm),
            size: 0,
            uid,
            gid,
        }
    }

    #[test]
    fn owner_class_wins_even_when_group_would_allow() {
        let st = status(0o070, Some(1000), Some(100));
        let me = IdentitySnapshot::new(1000, 100, 1000, 100);
        assert_eq!(class_for(&st, &me, IdentityBasis::Real), PermClass::Owner);
        assert!(!resolve_access(&st, &me, IdentityBasis::Real, Access::Read));
    }

    #[test]
    fn group_class_used_when_owner_differs() {
        let st = status(0o640, Some(0), Some(100));
        let me = IdentitySnapshot::new(1000, 100, 1000, 100);
        assert!(resolve_access(&st, &me, IdentityBasis::Real, Access::Read));
        assert!(!resolve_access(&st, &me, IdentityBasis::Real, Access::Write));
    }

    #[test]
    fn missing_ids_fall_through_to_other() {
        let st = status(0o604, None, None);
        let me = IdentitySnapshot::new(0, 0, 0, 0);
        assert_eq!(class_for(&st, &me, IdentityBasis::Real), PermClass::Other);
        assert!(resolve_access(&st, &me, IdentityBasis::Real, Access::Read));
        assert!(!resolve_access(&st, &me, IdentityBasis::Real, Access::Write));
    }

    #[test]
    fn root_gets_no_bypass() {
        let st = status(0o000, Some(1000), Some(1000));
        let root = IdentitySnapshot::new(0, 0, 0, 0);
        assert!(!resolve_access(&st, &root, IdentityBasis::Real, Access::Read));
    }

    #[test]
    fn effective_basis_compares_effective_ids() {
        let st = status(0o700, Some(0), Some(0));
        // setuid-root style: real 1000, effective 0
        let who = IdentitySnapshot::new(1000, 1000, 0, 1000);
        assert!(!resolve_access(&st, &who, IdentityBasis::Real, Access::Execute));
        assert!(resolve_access(&st, &who, IdentityBasis::Effective, Access::Execute));
    }
}
