//! File-loading boundary around the decoder.
//!
//! Storage failures surface as [`XpError::Io`](crate::XpError::Io), distinct
//! from the decode errors raised once the bytes are in memory.

use std::fs;
use std::path::Path;
use log::{debug, info, trace};

use super::codec::compression;
use super::format;
use super::types::error::Result;
use super::types::models::{Layer, XpImage};

/// Reads and decodes the `.xp` file at `path`.
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read (`XpError::Io`)
/// - The file is not valid gzip (`XpError::CorruptArchive`)
/// - The decompressed stream is shorter than its headers declare
pub fn load_image(path: impl AsRef<Path>) -> Result<XpImage> {
    let path = path.as_ref();
    info!("Opening XP file: {}", path.display());
    let compressed = fs::read(path)?;

    let data = compression::decompress(&compressed)?;
    debug!(
        "Decompressed {} bytes -> {} bytes",
        compressed.len(),
        data.len()
    );

    let image = format::parse(&data)?;
    for (i, layer) in image.layers.iter().enumerate() {
        trace!("Layer {}: {}x{} ({} tiles)", i, layer.width(), layer.height(), layer.len());
    }
    if image.trailing_bytes > 0 {
        debug!("Ignoring {} trailing bytes after the last layer", image.trailing_bytes);
    }

    info!(
        "XP file decoded: version={}, {} layers",
        image.version,
        image.layers.len()
    );
    Ok(image)
}

/// Reads and decodes the `.xp` file at `path`, keeping only the layers.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Layer>> {
    load_image(path).map(XpImage::into_layers)
}
