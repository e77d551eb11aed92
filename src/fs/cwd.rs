//! Working-directory lookup.
use std::path::MAIN_SEPARATOR;

use crate::types::errors::{Error, ErrorKind, Result};

/// Current working directory as a string, or `""` if the lookup fails.
///
/// With `trailing_separator` the platform separator is appended unconditionally, so the
/// filesystem root comes back doubled (`"//"` on Unix). Use [`try_current_directory`] to tell
/// a failed lookup apart from a real result.
pub fn current_directory(trailing_separator: bool) -> String {
    match try_current_directory(trailing_separator) {
        Ok(dir) => dir,
        Err(e) => {
            log::debug!("current_directory: {e}");
            String::new()
        }
    }
}

/// Like [`current_directory`] but reports the failure.
///
/// # Errors
///
/// `NotFound` if the working directory was removed, `StatusUnavailable` for any other
/// lookup failure.
pub fn try_current_directory(trailing_separator: bool) -> Result<String> {
    let dir = std::env::current_dir().map_err(|e| {
        let mut err = Error::from_io(&e);
        err.msg = format!("getcwd: {e}");
        err
    })?;
    let mut s = dir.to_string_lossy().into_owned();
    if s.is_empty() {
        return Err(Error::new(ErrorKind::StatusUnavailable, "getcwd: empty path"));
    }
    if trailing_separator {
        s.push(MAIN_SEPARATOR);
    }
    Ok(s)
}
