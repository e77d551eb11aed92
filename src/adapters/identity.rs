// Default IdentitySource implementation using process credentials (Unix-only)

use crate::types::errors::Result;
use crate::types::IdentitySnapshot;

pub trait IdentitySource {
    /// Capture the identity that permission resolution should compare against.
    /// # Errors
    /// Returns an error if the platform has no uid/gid model.
    fn current(&self) -> Result<IdentitySnapshot>;
}

#[derive(Copy, Clone, Debug, Default)]
pub struct ProcessIdentity;

impl IdentitySource for ProcessIdentity {
    fn current(&self) -> Result<IdentitySnapshot> {
        #[cfg(unix)]
        {
            use rustix::process::{getegid, geteuid, getgid, getuid};
            Ok(IdentitySnapshot::new(
                getuid().as_raw(),
                getgid().as_raw(),
                geteuid().as_raw(),
                getegid().as_raw(),
            ))
        }
        #[cfg(not(unix))]
        {
            use crate::types::errors::{Error, ErrorKind};
            Err(Error::new(
                ErrorKind::UnsupportedPlatform,
                "process identity not supported on this platform",
            ))
        }
    }
}

/// Fixed identity, for evaluating access on behalf of someone other than this process.
#[derive(Copy, Clone, Debug)]
pub struct FixedIdentity(pub IdentitySnapshot);

impl IdentitySource for FixedIdentity {
    fn current(&self) -> Result<IdentitySnapshot> {
        Ok(self.0)
    }
}
