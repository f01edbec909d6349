//! Codec layer for the gzip container wrapped around every `.xp` file.
//!
//! # Submodules
//!
//! - [`compression`][]: Whole-buffer gzip decompression (flate2)

pub mod compression;
