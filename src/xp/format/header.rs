//! Global header and layer header parsing.

use crate::xp::cursor::ByteCursor;
use crate::xp::format::{HEADER_SIZE, LAYER_HEADER_SIZE};
use crate::xp::types::error::{Result, XpError};
use crate::xp::types::models::{LayerHeader, XpHeader};

/// Parses the 8-byte global header at the cursor.
///
/// ```text
/// [4 bytes] version     (little-endian u32)
/// [4 bytes] layer_count (little-endian u32)
/// ```
pub(crate) fn parse_header(cursor: &mut ByteCursor<'_>) -> Result<XpHeader> {
    let found = cursor.remaining();
    let (version, layer_count) = cursor
        .take_u32_pair()
        .ok_or(XpError::TruncatedHeader {
            expected: HEADER_SIZE,
            found,
        })?;
    Ok(XpHeader {
        version,
        layer_count,
    })
}

/// Parses the 8-byte dimension header of layer `layer` at the cursor.
///
/// ```text
/// [4 bytes] width  (little-endian u32)
/// [4 bytes] height (little-endian u32)
/// ```
pub(crate) fn parse_layer_header(cursor: &mut ByteCursor<'_>, layer: u32) -> Result<LayerHeader> {
    let offset = cursor.position();
    let found = cursor.remaining();
    let (width, height) = cursor
        .take_u32_pair()
        .ok_or(XpError::TruncatedLayerHeader {
            layer,
            offset,
            expected: LAYER_HEADER_SIZE,
            found,
        })?;
    Ok(LayerHeader { width, height })
}
