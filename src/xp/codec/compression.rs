//! Gzip decompression for `.xp` files.
//!
//! The whole stream is inflated into one buffer before any parsing happens.

use std::io::Read;

use flate2::bufread::GzDecoder;

use crate::xp::types::error::{Result, XpError};

/// Inflates a complete gzip stream into a new buffer.
///
/// Concatenated gzip members are read as one continuous stream. Runs of
/// `0x00` padding between or after members are skipped.
///
/// # Errors
/// Returns [`XpError::CorruptArchive`] on empty input, a bad magic number, a truncated
/// stream, a CRC/length mismatch in the trailer, or non-zero bytes after a member
/// that do not start another member.
pub fn decompress(compressed: &[u8]) -> Result<Vec<u8>> {
    if compressed.is_empty() {
        return Err(XpError::CorruptArchive("Input is empty".to_string()));
    }
    let mut output = Vec::with_capacity(compressed.len().saturating_mul(4));
    let mut input = compressed;

    while !input.is_empty() {
        // bufread decoders only consume the member they decode
        {
            let mut decoder = GzDecoder::new(&mut input);
            decoder.read_to_end(&mut output).map_err(|e| {
                XpError::CorruptArchive(format!("Gzip decompression failed: {}", e))
            })?;
        }

        let padding = input.iter().take_while(|&&b| b == 0).count();
        input = &input[padding..];
    }

    Ok(output)
}
