//! Forward-only read cursor over the decompressed stream.
//!
//! Every read goes through [`ByteCursor::take`], the single bounds check of the decoder.
//! Callers map a `None` to the error kind that matches the structure being read.

use byteorder::{ByteOrder, LittleEndian};

#[derive(Debug, Clone)]
pub(crate) struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Borrows the next `n` bytes and advances past them, or returns `None`
    /// without moving if fewer than `n` remain.
    pub(crate) fn take(&mut self, n: usize) -> Option<&'a [u8]> {
        if n > self.remaining() {
            return None;
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Some(slice)
    }

    /// Reads a fixed-size block as two little-endian `u32` words at offsets 0 and 4.
    pub(crate) fn take_u32_pair(&mut self) -> Option<(u32, u32)> {
        let bytes = self.take(8)?;
        Some((
            LittleEndian::read_u32(&bytes[0..4]),
            LittleEndian::read_u32(&bytes[4..8]),
        ))
    }
}
