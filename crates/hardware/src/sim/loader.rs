//! Boot Image Loader.
//!
//! Boot images are plain text. Every line that carries code looks like
//!
//! ```text
//! 0x010: 93 05 a0 00   | addi a1, x0, 10
//! ```
//!
//! that is an address in hex, a colon, and a run of hex byte pairs. Bytes are
//! stored in the order written, starting at the address. Parsing of a line
//! stops at the first character that is not a hex digit pair, so anything after
//! the bytes (such as a `|` comment) is ignored. Lines that do not start with
//! `0x` are skipped entirely.

use std::io::BufRead;

use crate::common::error::LoadError;
use crate::soc::Memory;

/// Loads a boot image into memory.
///
/// # Arguments
///
/// * `reader` - Source of image text.
/// * `mem` - Memory receiving the bytes.
///
/// # Returns
///
/// The number of bytes written. A count of zero is not an error here; callers
/// decide whether an empty image is acceptable.
pub fn load_image<R: BufRead>(reader: R, mem: &mut Memory) -> Result<usize, LoadError> {
    let mut count = 0;
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        count += load_line(&line, idx + 1, mem)?;
    }
    tracing::debug!("Loaded {count} bytes into memory of {} bytes", mem.len());
    Ok(count)
}

/// Loads a single image line, returning the number of bytes it placed.
fn load_line(line: &str, line_no: usize, mem: &mut Memory) -> Result<usize, LoadError> {
    let text = line.trim_start().as_bytes();
    let Some(rest) = text
        .strip_prefix(b"0x")
        .or_else(|| text.strip_prefix(b"0X"))
    else {
        return Ok(0);
    };

    let digits = rest.iter().take_while(|b| b.is_ascii_hexdigit()).count();
    let addr = parse_address(&rest[..digits]);
    let rest = skip_space(&rest[digits..]);
    let Some(rest) = rest.strip_prefix(b":") else {
        return Err(LoadError::MissingColon { line: line_no });
    };
    let rest = skip_space(rest);

    let mut count = 0;
    for pair in rest.chunks_exact(2) {
        let (Some(hi), Some(lo)) = (hex_value(pair[0]), hex_value(pair[1])) else {
            break;
        };
        let target = addr.saturating_add(count);
        let placed = u32::try_from(target)
            .ok()
            .and_then(|a| mem.write_u8(a, (hi << 4) | lo).ok());
        if placed.is_none() {
            return Err(LoadError::AddressOutOfRange {
                line: line_no,
                addr: target,
            });
        }
        count += 1;
    }
    Ok(count)
}

/// Parses a run of hex digits; saturates instead of wrapping on overflow.
fn parse_address(digits: &[u8]) -> usize {
    digits.iter().fold(0usize, |acc, &d| {
        acc.saturating_mul(16)
            .saturating_add(usize::from(hex_value(d).unwrap_or(0)))
    })
}

fn skip_space(bytes: &[u8]) -> &[u8] {
    let n = bytes.iter().take_while(|b| b.is_ascii_whitespace()).count();
    &bytes[n..]
}

const fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
