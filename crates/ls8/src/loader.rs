//! Text program loader.
//!
//! Program files hold one instruction byte per line written as a base-2
//! numeral. Anything after the numeral is ignored, so `10000010 # LDI R0,8`
//! loads `0x82`. Lines that do not start with a numeral are skipped.

use std::fs;
use std::path::{Path, PathBuf};

use ls8_core::ADDRESS_SPACE_BYTES;
use thiserror::Error;

/// Program file could not be turned into a memory image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("cannot read program {}: {source}", path.display())]
    Open {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The program holds more bytes than the address space.
    #[error("program of {len} bytes does not fit in {} bytes of memory", ADDRESS_SPACE_BYTES)]
    TooLarge {
        /// Number of bytes parsed before giving up.
        len: usize,
    },
}

/// Parses the leading base-2 numeral of `line`.
///
/// Leading whitespace is skipped and the longest run of `0`/`1` digits is
/// taken. Numerals wider than eight bits keep their low eight bits. Returns
/// `None` when the line has no numeral.
#[must_use]
pub fn parse_line(line: &str) -> Option<u8> {
    let trimmed = line.trim_start();
    let digits_len = trimmed
        .bytes()
        .take_while(|b| matches!(b, b'0' | b'1'))
        .count();
    if digits_len == 0 {
        return None;
    }

    Some(
        trimmed.as_bytes()[..digits_len]
            .iter()
            .fold(0u8, |acc, digit| (acc << 1) | (digit - b'0')),
    )
}

/// Parses a whole program text into a memory image.
///
/// # Errors
///
/// Returns [`LoadError::TooLarge`] when more than 256 bytes are parsed.
pub fn parse_program(text: &str) -> Result<Vec<u8>, LoadError> {
    let image: Vec<u8> = text.lines().filter_map(parse_line).collect();
    if image.len() > ADDRESS_SPACE_BYTES {
        return Err(LoadError::TooLarge { len: image.len() });
    }
    Ok(image)
}

/// Reads and parses the program file at `path`.
///
/// # Errors
///
/// Returns [`LoadError::Open`] when the file cannot be read and
/// [`LoadError::TooLarge`] when the program does not fit in memory.
pub fn load_file(path: &Path) -> Result<Vec<u8>, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let image = parse_program(&text)?;
    log::debug!("loaded {} bytes from {}", image.len(), path.display());
    Ok(image)
}
