//! Memory Image Loader.
//!
//! A memory image is a text file holding one integer per line. Line `i`
//! becomes `mem[i]`. Parsing is permissive: each line contributes the
//! value of its leading integer (optional whitespace and sign, then
//! digits), and a line with no digits contributes zero. Lines that are
//! not a clean integer are accepted but reported with a warning.

use crate::common::{SimError, Word};
use log::{debug, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parses the leading integer of `line`.
///
/// # Returns
///
/// The parsed value (wrapping on overflow) and whether the whole line,
/// ignoring surrounding whitespace, was a well-formed integer.
pub fn parse_word(line: &str) -> (Word, bool) {
    let trimmed = line.trim_start();
    let bytes = trimmed.as_bytes();

    let mut pos = 0;
    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let digits_start = pos;
    let mut value: Word = 0;
    while let Some(&b) = bytes.get(pos) {
        if !b.is_ascii_digit() {
            break;
        }
        value = value.wrapping_mul(10).wrapping_add(Word::from(b - b'0'));
        pos += 1;
    }

    let has_digits = pos > digits_start;
    let clean = has_digits && trimmed[pos..].trim().is_empty();
    let value = if negative { value.wrapping_neg() } else { value };
    (value, clean)
}

/// Reads a memory image from any buffered reader.
///
/// # Arguments
///
/// * `reader` - Source of image lines.
/// * `source` - Name used in diagnostics.
/// * `capacity` - Maximum number of words the image may hold.
pub fn load_image<R: BufRead>(
    reader: R,
    source: &str,
    capacity: usize,
) -> Result<Vec<Word>, SimError> {
    let mut words = Vec::new();

    for (lineno, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| SimError::ImageLoad {
            path: source.to_string(),
            reason: e.to_string(),
        })?;

        if words.len() == capacity {
            return Err(SimError::ImageLoad {
                path: source.to_string(),
                reason: format!("image exceeds memory capacity of {} words", capacity),
            });
        }

        let (value, clean) = parse_word(&line);
        if !clean {
            warn!(
                "{}:{}: malformed line {:?} read as {}",
                source,
                lineno + 1,
                line,
                value
            );
        }
        words.push(value);
    }

    debug!("loaded {} words from {}", words.len(), source);
    Ok(words)
}

/// Reads a memory image from a file on disk.
pub fn load_image_file(path: &Path, capacity: usize) -> Result<Vec<Word>, SimError> {
    let source = path.display().to_string();
    let file = File::open(path).map_err(|e| SimError::ImageLoad {
        path: source.clone(),
        reason: e.to_string(),
    })?;
    load_image(BufReader::new(file), &source, capacity)
}
