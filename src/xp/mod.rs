//! Core REXPaint `.xp` decoder module
//!
//! Decoding is a single pass: gzip-inflate the whole input, read the
//! global header, then read each layer's header and tile array.
//! Nothing is returned unless every layer decodes.

pub mod codec;
pub mod format;
pub mod reader;
pub mod types;
mod cursor;

pub use format::TileField;
pub use reader::{load, load_image};
pub use types::error::{Result, XpError};
pub use types::models::*;

/// Decodes a gzip-compressed `.xp` image into its layers.
///
/// # Errors
/// - `XpError::CorruptArchive` if the input is not valid gzip
/// - `XpError::TruncatedHeader` if the stream has fewer than 8 bytes
/// - `XpError::TruncatedLayerHeader` if a layer header is cut short
/// - `XpError::TruncatedTileData` if a tile array is cut short or its size overflows
pub fn decode(compressed: &[u8]) -> Result<Vec<Layer>> {
    decode_image(compressed).map(XpImage::into_layers)
}

/// Decodes a gzip-compressed `.xp` image, keeping the header version and
/// the number of ignored trailing bytes alongside the layers.
pub fn decode_image(compressed: &[u8]) -> Result<XpImage> {
    let data = codec::compression::decompress(compressed)?;
    format::parse(&data)
}

/// Decodes an already-decompressed `.xp` stream.
pub fn decode_uncompressed(data: &[u8]) -> Result<XpImage> {
    format::parse(data)
}
