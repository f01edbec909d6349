//! Decoded data structures and error types.

pub mod error;
pub mod models;
