use serde::Serialize;

use crate::constants::{
    PERM_MASK, RAW_IFBLK, RAW_IFCHR, RAW_IFDIR, RAW_IFIFO, RAW_IFLNK, RAW_IFMT, RAW_IFREG,
    RAW_IFSOCK, RAW_ISGID, RAW_ISUID, RAW_ISVTX,
};

/// Portable mode word for a filesystem node.
///
/// The low nine bits are the POSIX permission bits. Type and attribute flags live in the high
/// bits so they never collide with permissions, whatever the host's raw `st_mode` layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct FileMode(u32);

impl FileMode {
    pub const DIR: u32 = 1 << 31;
    pub const APPEND: u32 = 1 << 30;
    pub const EXCLUSIVE: u32 = 1 << 29;
    pub const TEMPORARY: u32 = 1 << 28;
    pub const SYMLINK: u32 = 1 << 27;
    pub const DEVICE: u32 = 1 << 26;
    pub const NAMED_PIPE: u32 = 1 << 25;
    pub const SOCKET: u32 = 1 << 24;
    pub const SETUID: u32 = 1 << 23;
    pub const SETGID: u32 = 1 << 22;
    pub const CHAR_DEVICE: u32 = 1 << 21;
    pub const STICKY: u32 = 1 << 20;
    pub const IRREGULAR: u32 = 1 << 19;

    /// Bits that make a node something other than a regular file.
    pub const TYPE_MASK: u32 = Self::DIR
        | Self::SYMLINK
        | Self::NAMED_PIPE
        | Self::SOCKET
        | Self::DEVICE
        | Self::CHAR_DEVICE
        | Self::IRREGULAR;

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Translate a raw POSIX `st_mode`.
    ///
    /// Block devices get `DEVICE`; character devices get `DEVICE | CHAR_DEVICE`. Unknown file
    /// types are marked `IRREGULAR`. `APPEND`, `EXCLUSIVE` and `TEMPORARY` are never set here.
    pub fn from_unix(st_mode: u32) -> Self {
        let mut bits = st_mode & PERM_MASK;
        bits |= match st_mode & RAW_IFMT {
            RAW_IFREG => 0,
            RAW_IFDIR => Self::DIR,
            RAW_IFLNK => Self::SYMLINK,
            RAW_IFBLK => Self::DEVICE,
            RAW_IFCHR => Self::DEVICE | Self::CHAR_DEVICE,
            RAW_IFIFO => Self::NAMED_PIPE,
            RAW_IFSOCK => Self::SOCKET,
            _ => Self::IRREGULAR,
        };
        if st_mode & RAW_ISUID != 0 {
            bits |= Self::SETUID;
        }
        if st_mode & RAW_ISGID != 0 {
            bits |= Self::SETGID;
        }
        if st_mode & RAW_ISVTX != 0 {
            bits |= Self::STICKY;
        }
        Self(bits)
    }

    /// True when every bit in `mask` is set.
    pub const fn contains(self, mask: u32) -> bool {
        self.0 & mask == mask
    }

    /// Permission portion only (owner + group + other).
    pub const fn perm(self) -> u32 {
        self.0 & PERM_MASK
    }

    pub const fn is_regular(self) -> bool {
        self.0 & Self::TYPE_MASK == 0
    }

    /// Short label for the node type, used in fact records.
    pub fn kind(self) -> &'static str {
        if self.contains(Self::DIR) {
            "dir"
        } else if self.contains(Self::SYMLINK) {
            "symlink"
        } else if self.contains(Self::NAMED_PIPE) {
            "pipe"
        } else if self.contains(Self::SOCKET) {
            "socket"
        } else if self.contains(Self::DEVICE) {
            "device"
        } else if self.is_regular() {
            "file"
        } else {
            "unknown"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_file_keeps_only_permissions() {
        let m = FileMode::from_unix(0o100_644);
        assert!(m.is_regular());
        assert_eq!(m.perm(), 0o644);
        assert_eq!(m.kind(), "file");
    }

    #[test]
    fn char_device_is_also_a_device() {
        let m = FileMode::from_unix(0o020_666);
        assert!(m.contains(FileMode::DEVICE));
        assert!(m.contains(FileMode::CHAR_DEVICE));
        assert!(!m.is_regular());

        let blk = FileMode::from_unix(0o060_660);
        assert!(blk.contains(FileMode::DEVICE));
        assert!(!blk.contains(FileMode::CHAR_DEVICE));
    }

    #[test]
    fn special_bits_translate() {
        let m = FileMode::from_unix(0o041_777);
        assert!(m.contains(FileMode::DIR | FileMode::STICKY));
        assert_eq!(m.perm(), 0o777);

        let s = FileMode::from_unix(0o106_755);
        assert!(s.contains(FileMode::SETUID));
        assert!(s.contains(FileMode::SETGID));
        assert!(!s.contains(FileMode::STICKY));
    }

    #[test]
    fn unknown_type_is_irregular() {
        let m = FileMode::from_unix(0o150_644);
        assert!(m.contains(FileMode::IRREGULAR));
        assert_eq!(m.kind(), "unknown");
    }
}
