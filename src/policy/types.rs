/// Which of the caller's ids are compared against a path's owner and group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IdentityBasis {
    /// Real uid/gid. Matches the classic simplified owner/group/other check.
    #[default]
    Real,
    /// Effective uid/gid. Closer to what the kernel does for setuid programs, but a
    /// behavior change from `Real`; opt in explicitly.
    Effective,
}
