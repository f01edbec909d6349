//! Binary layout of the decompressed `.xp` stream.
//!
//! # Module Organization
//!
//! - [`header`]: Global header and per-layer dimension headers
//! - [`layers`]: Layer loop and tile-array parsing
//!
//! # Layout
//!
//! ```text
//! ┌──────────────────────────┐
//! │ version      u32 LE      │ ← header::parse_header()
//! │ layer_count  u32 LE      │
//! ├──────────────────────────┤  × layer_count
//! │ width        u32 LE      │ ← header::parse_layer_header()
//! │ height       u32 LE      │
//! │ width*height × 10 bytes  │ ← layers::parse_tiles()
//! │   glyph[4] fg_rgb bg_rgb │
//! └──────────────────────────┘
//! ```
//!
//! Tiles are stored column-major: all rows of column 0, then column 1, and so on.

use std::ops::Range;
use std::str::FromStr;

use crate::xp::cursor::ByteCursor;
use crate::xp::types::error::{Result, XpError};
use crate::xp::types::models::XpImage;

pub(crate) mod header;
pub(crate) mod layers;

/// Size of the global header in bytes.
pub const HEADER_SIZE: usize = 8;

/// Size of each layer's dimension header in bytes.
pub const LAYER_HEADER_SIZE: usize = 8;

/// Size of one tile record in bytes.
pub const TILE_SIZE: usize = 10;

/// A field of the 10-byte tile record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileField {
    Glyph,
    FgR,
    FgG,
    FgB,
    BgR,
    BgG,
    BgB,
}

impl TileField {
    pub const ALL: [TileField; 7] = [
        TileField::Glyph,
        TileField::FgR,
        TileField::FgG,
        TileField::FgB,
        TileField::BgR,
        TileField::BgG,
        TileField::BgB,
    ];

    /// Byte range of this field inside a tile record.
    pub const fn range(self) -> Range<usize> {
        match self {
            TileField::Glyph => 0..4,
            TileField::FgR => 4..5,
            TileField::FgG => 5..6,
            TileField::FgB => 6..7,
            TileField::BgR => 7..8,
            TileField::BgG => 8..9,
            TileField::BgB => 9..10,
        }
    }

    /// Start offset of this field inside a tile record.
    pub fn offset(self) -> usize {
        self.range().start
    }

    pub const fn name(self) -> &'static str {
        match self {
            TileField::Glyph => "glyph",
            TileField::FgR => "fg_r",
            TileField::FgG => "fg_g",
            TileField::FgB => "fg_b",
            TileField::BgR => "bg_r",
            TileField::BgG => "bg_g",
            TileField::BgB => "bg_b",
        }
    }

    /// Looks a field up by its name (`glyph`, `fg_r`, ..., `bg_b`).
    ///
    /// # Errors
    /// Returns [`XpError::InvalidOffsetTable`] for an unknown name.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.name() == name)
            .ok_or_else(|| XpError::InvalidOffsetTable(name.to_string()))
    }
}

impl FromStr for TileField {
    type Err = XpError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

/// Parses a complete decompressed stream: header, then every layer.
///
/// Bytes after the last tile of the last layer are counted but not validated.
pub fn parse(data: &[u8]) -> Result<XpImage> {
    let mut cursor = ByteCursor::new(data);
    let header = header::parse_header(&mut cursor)?;
    let layers = layers::parse_layers(&mut cursor, header.layer_count)?;
    Ok(XpImage {
        version: header.version,
        layers,
        trailing_bytes: cursor.remaining(),
    })
}
