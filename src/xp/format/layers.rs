//! Layer loop and tile-array parsing.

use crate::xp::cursor::ByteCursor;
use crate::xp::format::{header, TileField, TILE_SIZE};
use crate::xp::types::error::{Result, XpError};
use crate::xp::types::models::{Layer, LayerHeader, Rgb, Tile};

/// Parses `layer_count` consecutive layers starting at the cursor.
pub(crate) fn parse_layers(cursor: &mut ByteCursor<'_>, layer_count: u32) -> Result<Vec<Layer>> {
    // layer_count is untrusted; the smallest possible layer is its 8-byte header
    let mut layers = Vec::with_capacity((layer_count as usize).min(cursor.remaining() / 8));
    for layer in 0..layer_count {
        let layer_header = header::parse_layer_header(cursor, layer)?;
        let tiles = parse_tiles(cursor, layer, layer_header)?;
        layers.push(Layer::new(layer_header, tiles));
    }
    Ok(layers)
}

/// Parses the `width * height` tile records of one layer.
///
/// The whole array is bounds-checked before any record is read, so an
/// oversized or overflowing header never allocates.
pub(crate) fn parse_tiles(
    cursor: &mut ByteCursor<'_>,
    layer: u32,
    layer_header: LayerHeader,
) -> Result<Vec<Tile>> {
    let truncated = XpError::TruncatedTileData {
        layer,
        width: layer_header.width,
        height: layer_header.height,
        offset: cursor.position(),
        available: cursor.remaining(),
    };

    let Some(byte_len) = tile_array_len(layer_header) else {
        return Err(truncated);
    };
    let Some(bytes) = cursor.take(byte_len) else {
        return Err(truncated);
    };

    Ok(bytes.chunks_exact(TILE_SIZE).map(parse_tile).collect())
}

/// `width * height * TILE_SIZE`, or `None` if it does not fit in `usize`.
fn tile_array_len(layer_header: LayerHeader) -> Option<usize> {
    let tile_count = (layer_header.width as u64).checked_mul(layer_header.height as u64)?;
    let byte_len = tile_count.checked_mul(TILE_SIZE as u64)?;
    usize::try_from(byte_len).ok()
}

fn parse_tile(record: &[u8]) -> Tile {
    let mut glyph = [0u8; 4];
    glyph.copy_from_slice(&record[TileField::Glyph.range()]);
    Tile {
        glyph,
        fg: Rgb::new(
            record[TileField::FgR.offset()],
            record[TileField::FgG.offset()],
            record[TileField::FgB.offset()],
        ),
        bg: Rgb::new(
            record[TileField::BgR.offset()],
            record[TileField::BgG.offset()],
            record[TileField::BgB.offset()],
        ),
    }
}
