//! Core data structures for decoded REXPaint images.
//!
//! This module defines the types produced by the decoder:
//! - File and layer headers
//! - Layers and their tile grids
//! - Tile records and colors

use byteorder::{ByteOrder, LittleEndian};

/// The global header at the start of the decompressed stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XpHeader {
    /// Format version tag. Read as an unsigned integer and never branched on.
    pub version: u32,
    pub layer_count: u32,
}

/// The dimension header preceding each layer's tile array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerHeader {
    pub width: u32,
    pub height: u32,
}

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A single cell of a layer: a raw glyph code plus foreground and background colors.
///
/// The glyph is kept as the 4 bytes found in the file. Mapping it to a
/// character (for example through code page 437) is up to the consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub glyph: [u8; 4],
    pub fg: Rgb,
    pub bg: Rgb,
}

impl Tile {
    /// The glyph bytes read as a little-endian `u32`.
    pub fn glyph_code(&self) -> u32 {
        LittleEndian::read_u32(&self.glyph)
    }
}

/// One decoded layer.
///
/// Tiles are stored column-major, exactly as in the file: flat index `i`
/// is grid position `(i / height, i % height)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
}

impl Layer {
    /// Only the decoder builds layers, so `tiles.len() == width * height` always holds.
    pub(crate) fn new(header: LayerHeader, tiles: Vec<Tile>) -> Self {
        debug_assert_eq!(
            tiles.len() as u64,
            header.width as u64 * header.height as u64
        );
        Self {
            width: header.width,
            height: header.height,
            tiles,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// All tiles in storage (column-major) order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn into_tiles(self) -> Vec<Tile> {
        self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Flat index of grid position `(x, y)`, or `None` when out of bounds.
    pub fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        usize::try_from(x as u64 * self.height as u64 + y as u64).ok()
    }

    /// Grid position `(x, y)` of flat index `i`, or `None` when out of bounds.
    pub fn position_of(&self, index: usize) -> Option<(u32, u32)> {
        if index >= self.tiles.len() {
            return None;
        }
        let height = self.height as usize;
        Some(((index / height) as u32, (index % height) as u32))
    }

    /// The tile at grid position `(x, y)`.
    pub fn tile(&self, x: u32, y: u32) -> Option<&Tile> {
        self.index_of(x, y).and_then(|i| self.tiles.get(i))
    }

    /// Iterates `((x, y), tile)` pairs in storage order.
    pub fn iter_cells(&self) -> impl Iterator<Item = ((u32, u32), &Tile)> + '_ {
        let height = self.height as usize;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, tile)| (((i / height) as u32, (i % height) as u32), tile))
    }
}

/// A fully decoded `.xp` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XpImage {
    /// Version tag from the global header, kept for diagnostics.
    pub version: u32,
    pub layers: Vec<Layer>,
    /// Bytes left after the last tile of the last layer. They are not validated.
    pub trailing_bytes: usize,
}

impl XpImage {
    pub fn layer(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    pub fn into_layers(self) -> Vec<Layer> {
        self.layers
    }
}
