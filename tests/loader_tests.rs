//! Tests for memory image loading.

use cache_simulator::common::SimError;
use cache_simulator::sim::loader::{load_image, load_image_file, parse_word};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::io::Cursor;
use std::path::Path;
use std::sync::Mutex;

/// Logger that keeps every record for inspection.
struct CaptureLog;

static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());
static CAPTURE: CaptureLog = CaptureLog;

impl Log for CaptureLog {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

/// Tests parsing well-formed integers.
#[test]
fn test_parse_clean_words() {
    assert_eq!(parse_word("42"), (42, true));
    assert_eq!(parse_word("-7"), (-7, true));
    assert_eq!(parse_word("+5"), (5, true));
    assert_eq!(parse_word("  8388608  "), (8388608, true));
    assert_eq!(parse_word("-2147483648"), (i32::MIN, true));
}

/// Tests permissive parsing of malformed lines.
#[test]
fn test_parse_malformed_words() {
    assert_eq!(parse_word("12abc"), (12, false));
    assert_eq!(parse_word("abc"), (0, false));
    assert_eq!(parse_word(""), (0, false));
    assert_eq!(parse_word("-"), (0, false));
    assert_eq!(parse_word("3 4"), (3, false));
}

/// Tests loading lines in order.
#[test]
fn test_load_image_in_order() {
    let input = Cursor::new("8454151\n9043971\nfoo\n-1\n");
    let words = load_image(input, "test", 16).unwrap();
    assert_eq!(words, vec![8454151, 9043971, 0, -1]);
}

/// Tests a final line with no trailing newline.
#[test]
fn test_load_image_without_trailing_newline() {
    let words = load_image(Cursor::new("1\n2"), "test", 16).unwrap();
    assert_eq!(words, vec![1, 2]);
}

/// Tests an empty image.
#[test]
fn test_load_empty_image() {
    let words = load_image(Cursor::new(""), "test", 16).unwrap();
    assert!(words.is_empty());
}

/// Tests that an image larger than memory is rejected.
#[test]
fn test_load_image_exceeds_capacity() {
    let err = load_image(Cursor::new("1\n2\n3\n"), "big", 2).unwrap_err();
    match err {
        SimError::ImageLoad { path, .. } => assert_eq!(path, "big"),
        other => panic!("unexpected error: {:?}", other),
    }
}

/// Tests that an image exactly filling memory is accepted.
#[test]
fn test_load_image_exact_capacity() {
    let words = load_image(Cursor::new("1\n2\n"), "full", 2).unwrap();
    assert_eq!(words.len(), 2);
}

/// Tests a missing image file.
#[test]
fn test_load_missing_file() {
    let err = load_image_file(Path::new("/nonexistent/image.mc"), 16).unwrap_err();
    assert!(matches!(err, SimError::ImageLoad { .. }));
    assert!(err.to_string().contains("/nonexistent/image.mc"));
}

/// Tests that a malformed line is reported at warning level.
#[test]
fn test_load_image_warns_on_malformed_line() {
    let _ = log::set_logger(&CAPTURE);
    log::set_max_level(LevelFilter::Trace);

    let words = load_image(Cursor::new("1\nx7\n"), "warned-image", 16).unwrap();
    assert_eq!(words, vec![1, 0]);

    let records = RECORDS.lock().unwrap();
    assert!(records
        .iter()
        .any(|(level, msg)| *level == Level::Warn && msg.starts_with("warned-image:2:")));
    assert!(!records
        .iter()
        .any(|(_, msg)| msg.starts_with("warned-image:1:")));
}
