//! Inspection policy.
//!
//! Consumers construct an [`InspectPolicy`](crate::policy::InspectPolicy) via `Default` or a
//! preset (`no_follow`) and customize fields before capturing a snapshot with
//! [`PathSnapshot::capture_with`](crate::fs::PathSnapshot::capture_with).
//!
//! Submodules:
//! - `config`: policy struct and presets
//! - `types`: policy enums

pub mod config;
pub mod types;

pub use config::InspectPolicy;
pub use types::IdentityBasis;
