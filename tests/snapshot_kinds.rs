//! Type predicates over real filesystem nodes.
#![cfg(unix)]

use pathprobe::policy::InspectPolicy;
use pathprobe::PathSnapshot;

fn primary_kinds(s: &PathSnapshot) -> usize {
    [
        s.is_dir(),
        s.is_regular_file(),
        s.is_symlink(),
        s.is_device(),
        s.is_named_pipe(),
        s.is_socket(),
    ]
    .iter()
    .filter(|b| **b)
    .count()
}

#[test]
fn directory_and_file() {
    let td = tempfile::tempdir().unwrap();
    let dir = PathSnapshot::capture(td.path());
    assert!(!dir.has_error());
    assert!(dir.exists());
    assert!(dir.is_dir());
    assert_eq!(primary_kinds(&dir), 1);

    let f = td.path().join("plain.txt");
    std::fs::write(&f, b"hello").unwrap();
    let file = PathSnapshot::capture(&f);
    assert!(file.is_regular_file());
    assert!(!file.is_dir());
    assert_eq!(primary_kinds(&file), 1);
    assert_eq!(file.size().unwrap(), 5);
}

#[test]
fn symlink_only_visible_without_follow() {
    let td = tempfile::tempdir().unwrap();
    let f = td.path().join("target");
    let l = td.path().join("link");
    std::fs::write(&f, b"x").unwrap();
    std::os::unix::fs::symlink(&f, &l).unwrap();

    let followed = PathSnapshot::capture(&l);
    assert!(!followed.is_symlink());
    assert!(followed.is_regular_file());

    let raw = PathSnapshot::capture_with(&l, &InspectPolicy::no_follow());
    assert!(raw.is_symlink());
    assert!(!raw.is_regular_file());
    assert_eq!(primary_kinds(&raw), 1);
}

#[test]
fn dangling_symlink_is_not_found_when_followed() {
    let td = tempfile::tempdir().unwrap();
    let l = td.path().join("dangling");
    std::os::unix::fs::symlink(td.path().join("nowhere"), &l).unwrap();

    assert!(!PathSnapshot::capture(&l).exists());
    let raw = PathSnapshot::capture_with(&l, &InspectPolicy::no_follow());
    assert!(raw.exists());
    assert!(raw.is_symlink());
}

#[test]
fn unix_socket() {
    let td = tempfile::tempdir().unwrap();
    let p = td.path().join("sock");
    let _listener = std::os::unix::net::UnixListener::bind(&p).unwrap();
    let s = PathSnapshot::capture(&p);
    assert!(s.is_socket());
    assert_eq!(primary_kinds(&s), 1);
}

#[cfg(target_os = "linux")]
#[test]
fn named_pipe() {
    use rustix::fs::{mknodat, FileType, Mode, CWD};
    let td = tempfile::tempdir().unwrap();
    let p = td.path().join("fifo");
    mknodat(CWD, &p, FileType::Fifo, Mode::from_raw_mode(0o644), 0).unwrap();
    let s = PathSnapshot::capture(&p);
    assert!(s.is_named_pipe());
    assert!(!s.is_regular_file());
    assert_eq!(primary_kinds(&s), 1);
}

#[cfg(target_os = "linux")]
#[test]
fn dev_null_is_a_char_device() {
    let s = PathSnapshot::capture("/dev/null");
    assert!(s.is_device());
    assert!(s.is_char_device());
    assert!(!s.is_regular_file());
    assert_eq!(primary_kinds(&s), 1);
    assert_eq!(s.facts()["kind"], "device");
}

#[test]
fn special_bits() {
    use std::os::unix::fs::PermissionsExt;
    let td = tempfile::tempdir().unwrap();
    let f = td.path().join("app");
    std::fs::write(&f, b"bin").unwrap();
    std::fs::set_permissions(&f, std::fs::Permissions::from_mode(0o6755)).unwrap();
    let s = PathSnapshot::capture(&f);
    // Some filesystems strip setgid for non-members; setuid is kept for the owner.
    assert!(s.has_setuid());
    assert!(!s.is_sticky());

    let d = td.path().join("shared");
    std::fs::create_dir(&d).unwrap();
    std::fs::set_permissions(&d, std::fs::Permissions::from_mode(0o1777)).unwrap();
    let ds = PathSnapshot::capture(&d);
    assert!(ds.is_sticky());
    assert!(ds.is_dir());
    assert!(!ds.has_setuid());
}

#[test]
fn queries_are_stable_after_the_path_changes() {
    let td = tempfile::tempdir().unwrap();
    let f = td.path().join("gone-soon");
    std::fs::write(&f, b"abc").unwrap();
    let s = PathSnapshot::capture(&f);
    std::fs::remove_file(&f).unwrap();

    for _ in 0..3 {
        assert!(s.exists());
        assert!(!s.has_error());
        assert!(s.is_regular_file());
        assert_eq!(s.size().unwrap(), 3);
    }
}
