//! Block DCT transform core with quantization.
//!
//! Implements the numeric heart of block-based lossy compression: an
//! orthonormal separable DCT over square blocks, uniform quantization
//! against a per-coefficient step table, and the full
//! forward -> quantize -> dequantize -> inverse round trip.
//!
//! The crate has no bitstream, entropy-coding, or file-format surface;
//! it consumes and produces plain numeric blocks.

pub mod blocks;
pub mod dct;
pub mod error;
pub mod matrix;
pub mod pipeline;
pub mod quantization;

pub use blocks::{BlockSource, REFERENCE_BLOCK};
pub use dct::{BLOCK_SIZE, Dct};
pub use error::{BlockDctError, Result};
pub use matrix::Matrix;
pub use pipeline::{Pipeline, RoundTrip};
