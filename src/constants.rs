//! Shared crate-wide constants for pathprobe.
//!
//! POSIX permission bits, using the conventional octal numbering. These are the values
//! accepted by `PathSnapshot::has_permission` and combined with `|` for multi-bit checks.

/// Read by owner.
pub const S_IRUSR: u32 = 0o400;
/// Write by owner.
pub const S_IWUSR: u32 = 0o200;
/// Execute/search by owner.
pub const S_IXUSR: u32 = 0o100;
/// Read by group.
pub const S_IRGRP: u32 = 0o040;
/// Write by group.
pub const S_IWGRP: u32 = 0o020;
/// Execute/search by group.
pub const S_IXGRP: u32 = 0o010;
/// Read by others.
pub const S_IROTH: u32 = 0o004;
/// Write by others.
pub const S_IWOTH: u32 = 0o002;
/// Execute/search by others.
pub const S_IXOTH: u32 = 0o001;

pub const S_IRWXU: u32 = S_IRUSR | S_IWUSR | S_IXUSR;
pub const S_IRWXG: u32 = S_IRGRP | S_IWGRP | S_IXGRP;
pub const S_IRWXO: u32 = S_IROTH | S_IWOTH | S_IXOTH;

/// Mask for the permission portion of a mode word (owner + group + other).
pub const PERM_MASK: u32 = S_IRWXU | S_IRWXG | S_IRWXO;

// Raw POSIX st_mode bits consumed by `FileMode::from_unix`.
pub(crate) const RAW_IFMT: u32 = 0o170_000;
pub(crate) const RAW_IFSOCK: u32 = 0o140_000;
pub(crate) const RAW_IFLNK: u32 = 0o120_000;
pub(crate) const RAW_IFREG: u32 = 0o100_000;
pub(crate) const RAW_IFBLK: u32 = 0o060_000;
pub(crate) const RAW_IFDIR: u32 = 0o040_000;
pub(crate) const RAW_IFCHR: u32 = 0o020_000;
pub(crate) const RAW_IFIFO: u32 = 0o010_000;
pub(crate) const RAW_ISUID: u32 = 0o4000;
pub(crate) const RAW_ISGID: u32 = 0o2000;
pub(crate) const RAW_ISVTX: u32 = 0o1000;
