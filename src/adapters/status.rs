// Default StatusProbe implementation using OS metadata

use std::path::Path;

use crate::types::{FileMode, FileStatus};

pub trait StatusProbe {
    /// Perform one status lookup for `path`.
    ///
    /// When `follow_symlinks` is false the link itself is described, not its target.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the lookup fails.
    fn probe(&self, path: &Path, follow_symlinks: bool) -> std::io::Result<FileStatus>;
}

#[derive(Copy, Clone, Debug, Default)]
pub struct FsStatusProbe;

impl StatusProbe for FsStatusProbe {
    fn probe(&self, path: &Path, follow_symlinks: bool) -> std::io::Result<FileStatus> {
        let md = if follow_symlinks {
            std::fs::metadata(path)?
        } else {
            std::fs::symlink_metadata(path)?
        };
        #[cfg(unix)]
        {
            use std::os::unix::fs::MetadataExt;
            Ok(FileStatus {
                mode: FileMode::from_unix(md.mode()),
                size: md.size(),
                uid: Some(md.uid()),
                gid: Some(md.gid()),
            })
        }
        #[cfg(not(unix))]
        {
            Ok(FileStatus {
                mode: approximate_mode(&md),
                size: md.len(),
                uid: None,
                gid: None,
            })
        }
    }
}

// Without POSIX modes: directories are fully open, read-only files lose write bits.
#[cfg(not(unix))]
fn approximate_mode(md: &std::fs::Metadata) -> FileMode {
    let ft = md.file_type();
    if ft.is_dir() {
        FileMode::from_bits(FileMode::DIR | 0o777)
    } else if ft.is_symlink() {
        FileMode::from_bits(FileMode::SYMLINK | 0o777)
    } else if md.permissions().readonly() {
        FileMode::from_bits(0o444)
    } else {
        FileMode::from_bits(0o666)
    }
}
