mod common;

use std::fs;
use tempfile::tempdir;

use common::*;
use disc_optimizer_core::{extract_archive_to, Error};

#[test]
fn test_extract_zip_reproduces_folder_structure() {
    let src = tempdir().unwrap();
    let zip_path = create_test_zip(
        src.path(),
        "good.zip",
        &[
            ("readme.txt", b"read me"),
            ("Disc 1/", b""),
            ("Disc 1/game.cue", b"FILE \"game.bin\" BINARY"),
            ("Disc 1/game.bin", b"binary track"),
            ("extras/art/cover.png", b"png"),
        ],
    );

    let dest = tempdir().unwrap();
    let result = extract_archive_to(&zip_path, dest.path()).unwrap();

    assert_eq!(result.files_extracted, 4);
    assert_eq!(result.dest, dest.path());
    assert_eq!(count_files_recursive(dest.path()), 4);
    assert_eq!(
        fs::read(dest.path().join("Disc 1").join("game.cue")).unwrap(),
        b"FILE \"game.bin\" BINARY"
    );
    assert_eq!(
        fs::read(dest.path().join("Disc 1").join("game.bin")).unwrap(),
        b"binary track"
    );
    assert_eq!(fs::read(dest.path().join("readme.txt")).unwrap(), b"read me");
    assert!(dest
        .path()
        .join("extras")
        .join("art")
        .join("cover.png")
        .is_file());
}

#[test]
fn test_extract_overwrites_existing_files() {
    let src = tempdir().unwrap();
    let zip_path = create_test_zip(src.path(), "good.zip", &[("game.iso", b"fresh")]);

    let dest = tempdir().unwrap();
    fs::write(dest.path().join("game.iso"), b"stale contents").unwrap();

    extract_archive_to(&zip_path, dest.path()).unwrap();
    assert_eq!(fs::read(dest.path().join("game.iso")).unwrap(), b"fresh");
}

#[test]
fn test_extract_creates_missing_destination() {
    let src = tempdir().unwrap();
    let zip_path = create_test_zip(src.path(), "good.zip", &[("game.iso", b"iso")]);

    let dest_root = tempdir().unwrap();
    let dest = dest_root.path().join("not").join("yet");
    extract_archive_to(&zip_path, &dest).unwrap();
    assert!(dest.join("game.iso").is_file());
}

#[test]
fn test_extract_gz_writes_single_member() {
    let src = tempdir().unwrap();
    let gz_path = create_test_gz(src.path(), "game.iso.gz", None, b"iso payload");

    let dest = tempdir().unwrap();
    let result = extract_archive_to(&gz_path, dest.path()).unwrap();
    assert_eq!(result.files_extracted, 1);
    assert_eq!(fs::read(dest.path().join("game.iso")).unwrap(), b"iso payload");
}

#[test]
fn test_extract_corrupt_7z_reports_archive_name() {
    let src = tempdir().unwrap();
    let bad = src.path().join("corrupt.7z");
    fs::write(&bad, b"this is not a 7z archive at all").unwrap();

    let dest = tempdir().unwrap();
    let err = extract_archive_to(&bad, dest.path()).unwrap_err();
    assert!(matches!(err, Error::Extract { .. }), "{:?}", err);
    assert!(err.to_string().contains("corrupt.7z"), "{}", err);
}

#[test]
fn test_extract_corrupt_rar_reports_archive_name() {
    let src = tempdir().unwrap();
    let bad = src.path().join("broken.rar");
    fs::write(&bad, b"not a rar").unwrap();

    let dest = tempdir().unwrap();
    let err = extract_archive_to(&bad, dest.path()).unwrap_err();
    assert!(err.to_string().contains("broken.rar"), "{}", err);
}

#[test]
fn test_extract_unsupported_extension() {
    let src = tempdir().unwrap();
    let not_archive = src.path().join("game.iso");
    fs::write(&not_archive, b"iso").unwrap();

    let dest = tempdir().unwrap();
    let err = extract_archive_to(&not_archive, dest.path()).unwrap_err();
    assert!(matches!(err, Error::UnsupportedArchive(_)));
    assert!(err.to_string().contains("game.iso"));
    assert_eq!(count_files_recursive(dest.path()), 0);
}

#[test]
fn test_extract_7z_reproduces_folder_structure() {
    let src = tempdir().unwrap();
    let archive = create_test_7z(
        src.path(),
        "set.7z",
        &[
            ("Disc 1/game.cue", b"FILE \"game.bin\" BINARY"),
            ("Disc 1/game.bin", b"binary track"),
            ("readme.txt", b"read me"),
        ],
    );

    let dest = tempdir().unwrap();
    let result = extract_archive_to(&archive, dest.path()).unwrap();

    assert_eq!(result.files_extracted, 3);
    assert_eq!(count_files_recursive(dest.path()), 3);
    assert_eq!(
        fs::read(dest.path().join("Disc 1").join("game.bin")).unwrap(),
        b"binary track"
    );
    assert_eq!(fs::read(dest.path().join("readme.txt")).unwrap(), b"read me");
}

#[test]
fn test_corrupt_gz_leaves_existing_file_untouched() {
    let src = tempdir().unwrap();
    let bad = src.path().join("game.iso.gz");
    fs::write(&bad, b"definitely not gzip data").unwrap();

    let dest = tempdir().unwrap();
    let original = vec![0xA5u8; 4096];
    fs::write(dest.path().join("game.iso"), &original).unwrap();

    let err = extract_archive_to(&bad, dest.path()).unwrap_err();
    assert!(matches!(err, Error::Extract { .. }), "{:?}", err);
    assert!(err.to_string().contains("game.iso.gz"), "{}", err);
    assert_eq!(fs::read(dest.path().join("game.iso")).unwrap(), original);
    assert_eq!(fs::read_dir(dest.path()).unwrap().count(), 1);
}

#[test]
fn test_truncated_gz_leaves_existing_file_untouched() {
    let src = tempdir().unwrap();
    let payload: Vec<u8> = (0..64 * 1024u32).map(|i| (i * 31 % 251) as u8).collect();
    let gz_path = create_test_gz(src.path(), "game.iso.gz", Some("game.iso"), &payload);
    let bytes = fs::read(&gz_path).unwrap();
    fs::write(&gz_path, &bytes[..bytes.len() / 2]).unwrap();

    let dest = tempdir().unwrap();
    fs::write(dest.path().join("game.iso"), b"keep me").unwrap();

    assert!(extract_archive_to(&gz_path, dest.path()).is_err());
    assert_eq!(fs::read(dest.path().join("game.iso")).unwrap(), b"keep me");
    assert_eq!(count_files_recursive(dest.path()), 1);
}

#[test]
fn test_truncated_gz_writes_nothing() {
    let src = tempdir().unwrap();
    let payload = vec![7u8; 32 * 1024];
    let gz_path = create_test_gz(src.path(), "dump.raw.gz", None, &payload);
    let bytes = fs::read(&gz_path).unwrap();
    fs::write(&gz_path, &bytes[..bytes.len() - 12]).unwrap();

    let dest = tempdir().unwrap();
    assert!(extract_archive_to(&gz_path, dest.path()).is_err());
    assert_eq!(count_files_recursive(dest.path()), 0);
    assert_eq!(fs::read_dir(dest.path()).unwrap().count(), 0);
}

#[test]
fn test_zip_failing_midway_writes_nothing() {
    let src = tempdir().unwrap();
    let zip_path = create_test_zip(
        src.path(),
        "damaged.zip",
        &[
            ("Disc 1/game.cue", b"first entry decodes fine"),
            ("Disc 1/game.bin", b"SECOND-ENTRY-PAYLOAD"),
        ],
    );

    // Flip one byte of the stored payload so its CRC no longer matches.
    let mut bytes = fs::read(&zip_path).unwrap();
    let needle = b"SECOND-ENTRY-PAYLOAD";
    let at = bytes
        .windows(needle.len())
        .position(|w| w == needle)
        .unwrap();
    bytes[at] ^= 0xFF;
    fs::write(&zip_path, bytes).unwrap();

    let dest = tempdir().unwrap();
    let err = extract_archive_to(&zip_path, dest.path()).unwrap_err();
    assert!(err.to_string().contains("damaged.zip"), "{}", err);
    assert_eq!(count_files_recursive(dest.path()), 0);
    assert_eq!(fs::read_dir(dest.path()).unwrap().count(), 0);
}
