//! Image Loader Tests.

use std::io::Write;

use sim16_core::sim::loader::{LoadError, load_file, load_image};
use sim16_core::soc::{FlatMemory, Memory};
use tempfile::NamedTempFile;

#[test]
fn load_file_reads_bytes() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&[0x06, 0x00, 0x05, 0x00, 0x00]).unwrap();

    let bytes = load_file(file.path()).unwrap();

    assert_eq!(bytes, vec![0x06, 0x00, 0x05, 0x00, 0x00]);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.bin");

    let err = load_file(&path).unwrap_err();

    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("absent.bin"));
}

#[test]
fn image_is_placed_at_base() {
    let mut mem = FlatMemory::new();
    load_image(&mut mem, 0x0200, &[1, 2, 3]).unwrap();
    assert_eq!(mem.load_byte(0x01FF), 0);
    assert_eq!(mem.load_byte(0x0200), 1);
    assert_eq!(mem.load_byte(0x0202), 3);
}

#[test]
fn image_may_end_exactly_at_top_of_memory() {
    let mut mem = FlatMemory::new();
    load_image(&mut mem, 0xFFFE, &[0xAA, 0xBB]).unwrap();
    assert_eq!(mem.load_word(0xFFFE), 0xBBAA);
}

#[test]
fn oversized_image_is_rejected_untouched() {
    let mut mem = FlatMemory::new();
    let err = load_image(&mut mem, 0xFFFF, &[1, 2]).unwrap_err();

    assert!(matches!(err, LoadError::TooLarge { base: 0xFFFF, len: 2 }));
    assert_eq!(mem.load_byte(0xFFFF), 0);
    assert_eq!(mem.load_byte(0x0000), 0);
}
