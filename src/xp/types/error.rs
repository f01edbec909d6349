//! Custom error types for the rexpaint-xp crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum XpError {
    /// A storage error from the file-loading boundary (file not found, permission denied).
    ///
    /// Decompression failures are never reported through this variant.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// The input is not a valid gzip stream (bad magic, truncated stream, checksum mismatch).
    #[error("Corrupt gzip archive: {0}")]
    CorruptArchive(String),

    /// Fewer bytes than the global header needs.
    #[error("Truncated header: expected {expected} bytes, but found {found}")]
    TruncatedHeader { expected: usize, found: usize },

    /// Fewer bytes than a layer header needs at the cursor.
    #[error("Truncated header for layer {layer} at offset {offset}: expected {expected} bytes, but found {found}")]
    TruncatedLayerHeader {
        layer: u32,
        offset: usize,
        expected: usize,
        found: usize,
    },

    /// The tile array of a layer does not fit in the remaining buffer,
    /// or its size overflows.
    #[error("Truncated tile data for layer {layer} ({width}x{height}) at offset {offset}: {available} bytes available")]
    TruncatedTileData {
        layer: u32,
        width: u32,
        height: u32,
        offset: usize,
        available: usize,
    },

    /// A field-offset lookup used an unknown key.
    ///
    /// Field offsets are compile-time constants in this crate, so this only
    /// surfaces from [`TileField::from_name`](crate::TileField::from_name).
    #[error("Invalid offset table key: {0}")]
    InvalidOffsetTable(String),
}

impl XpError {
    /// Whether this error came from storage rather than from the bytes being decoded.
    pub fn is_storage_error(&self) -> bool {
        matches!(self, XpError::Io(_))
    }
}

/// A convenience `Result` type alias using the crate's `XpError` type.
pub type Result<T> = std::result::Result<T, XpError>;
