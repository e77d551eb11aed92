use super::types::IdentityBasis;

/// Policy governs how a `PathSnapshot` is captured and how access is resolved against it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InspectPolicy {
    /// Follow a final symlink during the status lookup (stat vs lstat).
    pub follow_symlinks: bool,
    pub identity_basis: IdentityBasis,
}

impl Default for InspectPolicy {
    fn default() -> Self {
        Self {
            follow_symlinks: true,
            identity_basis: IdentityBasis::Real,
        }
    }
}

impl InspectPolicy {
    /// Describe symlinks themselves instead of their targets.
    ///
    /// With the default policy `is_symlink()` can never be true, since the lookup
    /// resolves the link first.
    ///
    /// # Example
    /// ```rust
    /// use pathprobe::policy::InspectPolicy;
    ///
    /// let policy = InspectPolicy::no_follow();
    /// assert!(!policy.follow_symlinks);
    /// ```
    pub fn no_follow() -> Self {
        Self {
            follow_symlinks: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_identity_basis(mut self, basis: IdentityBasis) -> Self {
        self.identity_basis = basis;
        self
    }
}
