//! End-to-end producer tests for `twofold-ini`.
//!
//! Each test gets an isolated `TempDir` — no shared state.

use std::fs;
use std::io;
use std::path::PathBuf;

use rstest::rstest;
use tempfile::TempDir;
use twofold_ini::{parse_file, parse_file_either, FaultCode, ParseResult, FILE_NOT_FOUND};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn make_dir() -> TempDir {
    TempDir::new().expect("tempdir")
}

fn write(dir: &TempDir, filename: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(filename);
    fs::write(&path, content).expect("write fixture");
    path
}

const WIN_INI: &str = "; for 16-bit app support\n\
[fonts]\n\
[extensions]\n\
[mci extensions]\n\
[files]\n\
[Mail]\n\
MAPI=1\n";

// ---------------------------------------------------------------------------
// 1. Well-formed input
// ---------------------------------------------------------------------------

#[rstest]
#[case("win.ini", WIN_INI, 5, 7)]
#[case("empty.ini", "", 0, 0)]
#[case("flat.ini", "a=1\nb=2\n", 0, 2)]
#[case("crlf.ini", "[one]\r\nx=1\r\n[two]\r\n", 2, 3)]
fn maybe_success_counts_sections_and_lines(
    #[case] name: &str,
    #[case] content: &str,
    #[case] sections: usize,
    #[case] lines: usize,
) {
    let dir = make_dir();
    let path = write(&dir, name, content.as_bytes());

    let parsed = parse_file(&path).try_get_value().cloned().expect("success");
    assert_eq!(parsed.section_count, sections);
    assert_eq!(parsed.lines.len(), lines);
}

#[test]
fn either_success_matches_maybe_success() {
    let dir = make_dir();
    let path = write(&dir, "win.ini", WIN_INI.as_bytes());

    let via_maybe = parse_file(&path).try_get_value().cloned().expect("maybe");
    let via_either = parse_file_either(&path).into_left().expect("either");
    assert_eq!(via_maybe, via_either);
}

// ---------------------------------------------------------------------------
// 2. Missing resource
// ---------------------------------------------------------------------------

#[test]
fn missing_file_is_a_failure_without_cause() {
    let dir = make_dir();
    let result = parse_file(&dir.path().join("absent.ini"));

    let failure = result.try_get_failure().expect("failure");
    assert_eq!(failure.message(), FILE_NOT_FOUND);
    assert_eq!(failure.message(), "File not found");
    assert!(failure.cause().is_none());
}

#[test]
fn missing_file_is_a_not_found_fault() {
    let dir = make_dir();
    let fault = parse_file_either(&dir.path().join("absent.ini"))
        .into_right()
        .expect("fault");
    assert_eq!(fault.code, FaultCode::NotFound);
    assert_eq!(fault.message, "File not found");
}

// ---------------------------------------------------------------------------
// 3. Read faults
// ---------------------------------------------------------------------------

#[test]
fn directory_read_fault_is_carried_as_cause() {
    let dir = make_dir();
    let result = parse_file(dir.path());

    let failure = result.try_get_failure().expect("failure");
    let cause = failure.cause().expect("cause");
    let io_err = cause.downcast_ref::<io::Error>().expect("io::Error cause");
    assert_eq!(failure.message(), io_err.to_string());
}

#[test]
fn invalid_utf8_is_a_failure_with_invalid_data_cause() {
    let dir = make_dir();
    let path = write(&dir, "binary.ini", &[0x5b, 0xff, 0xfe, 0x5d]);

    let failure = parse_file(&path).try_get_failure().cloned().expect("failure");
    let io_err = failure
        .cause()
        .and_then(|c| c.downcast_ref::<io::Error>())
        .expect("io cause");
    assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    assert_eq!(failure.message(), io_err.to_string());
}

#[cfg(unix)]
#[test]
fn permission_fault_message_is_the_fault_description() {
    use std::os::unix::fs::PermissionsExt;

    let dir = make_dir();
    let path = write(&dir, "locked.ini", b"[secret]\n");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o000)).expect("chmod");
    if fs::read(&path).is_ok() {
        // Running with privileges that ignore file modes.
        return;
    }

    let failure = parse_file(&path).try_get_failure().cloned().expect("failure");
    let io_err = failure
        .cause()
        .and_then(|c| c.downcast_ref::<io::Error>())
        .expect("io cause");
    assert_eq!(io_err.kind(), io::ErrorKind::PermissionDenied);
    assert_eq!(failure.message(), io_err.to_string());

    let fault = parse_file_either(&path).into_right().expect("fault");
    assert_eq!(fault.code, FaultCode::Unreadable);
    assert_eq!(fault.message, io_err.to_string());
}

// ---------------------------------------------------------------------------
// 4. Defaults on failure
// ---------------------------------------------------------------------------

#[test]
fn default_placeholder_on_failure() {
    let dir = make_dir();
    let parsed = parse_file(&dir.path().join("absent.ini")).value_or_else(ParseResult::empty);
    assert!(parsed.lines.is_empty());
    assert_eq!(parsed.section_count, 0);
}
