//! # rexpaint-xp
//!
//! A decoder for REXPaint `.xp` images: gzip-compressed files holding one or
//! more layers of colored ASCII tiles.
//!
//! ```no_run
//! let layers = rexpaint_xp::load("hello.xp").unwrap();
//! let layer = &layers[0];
//! for ((x, y), tile) in layer.iter_cells() {
//!     println!("{},{} -> {:#x}", x, y, tile.glyph_code());
//! }
//! ```
//!
//! Glyph codes are returned as raw bytes; choosing a code page is left to the caller.
pub mod xp;

// Re-export the main types for convenience
pub use xp::{
    decode,
    decode_image,
    decode_uncompressed,
    load,
    load_image,
    Layer,
    LayerHeader,
    Result,
    Rgb,
    Tile,
    TileField,
    XpError,
    XpHeader,
    XpImage,
    format::{HEADER_SIZE, LAYER_HEADER_SIZE, TILE_SIZE},
};
